pub mod category;
pub mod errors;
pub mod page;
pub mod post;
pub mod slug;
