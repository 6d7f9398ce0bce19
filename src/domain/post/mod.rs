pub mod entity;
pub mod repository;

pub use entity::{Pagination, Post};
pub use repository::PostReadRepository;
