// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_page;
mod postgres_post;

pub(crate) use error::map_sqlx;
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_page::PostgresPageRepository;
pub use postgres_post::PostgresPostRepository;
