mod check_slug;
mod get_by_id;
mod list;
mod service;
mod show;

pub use check_slug::CheckPageSlugQuery;
pub use get_by_id::GetPageByIdQuery;
pub use service::PageQueryService;
pub use show::ShowPageQuery;
