// tests/support/mocks/mod.rs
//! テスト用のインメモリ実装

pub mod category_repo;
pub mod page_repo;
pub mod post_repo;
pub mod storage;
pub mod time;

pub use category_repo::InMemoryCategoryRepo;
pub use page_repo::InMemoryPageRepo;
pub use post_repo::InMemoryPostRepo;
pub use storage::{MemoryImageStore, TEST_BASE_URL};
pub use time::{FixedClock, fixed_now};
