pub mod categories;
pub mod pages;
pub mod pagination;
pub mod posts;
pub mod seo;
pub mod serde_time;
pub mod slugs;
pub mod uploads;

pub use categories::{CategoryDto, CategoryShowDto};
pub use pages::{PageDto, PageShowDto};
pub use pagination::PaginatedResult;
pub use posts::PostDto;
pub use seo::{OpenGraphMetadata, SeoMetadata};
pub use slugs::SlugPreviewDto;
pub use uploads::UploadedImageDto;
