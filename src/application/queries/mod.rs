pub mod categories;
pub mod pages;
