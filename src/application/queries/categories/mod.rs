mod check_slug;
mod get_by_id;
mod list;
mod service;
mod show;

pub use check_slug::CheckCategorySlugQuery;
pub use get_by_id::GetCategoryByIdQuery;
pub use service::CategoryQueryService;
pub use show::ShowCategoryQuery;
