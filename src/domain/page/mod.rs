pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPage, Page, PageUpdate};
pub use repository::{PageReadRepository, PageWriteRepository};
pub use value_objects::{PageContent, PageId, PageStatus, PageTitle};
