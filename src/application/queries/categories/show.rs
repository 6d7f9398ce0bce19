use super::CategoryQueryService;
use crate::{
    application::{
        dto::{CategoryShowDto, PaginatedResult, SeoMetadata},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{post::Pagination, slug::Slug},
};

pub struct ShowCategoryQuery {
    pub slug: String,
    /// One-based; `0` is read as the first page.
    pub page: u32,
    /// Path of the current request, used for the canonical URL.
    pub request_path: String,
}

impl CategoryQueryService {
    pub async fn show_category(&self, query: ShowCategoryQuery) -> ApplicationResult<CategoryShowDto> {
        let slug =
            Slug::new(query.slug).map_err(|_| ApplicationError::not_found("category not found"))?;
        let category = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let seo = SeoMetadata::compose(
            &self.settings,
            category.name.as_str(),
            self.settings.absolute_url(&query.request_path),
        );

        let pagination = Pagination::new(query.page, self.settings.max_posts);
        let (posts, total) = self
            .post_repo
            .list_published_by_category(category.id, pagination)
            .await?;

        Ok(CategoryShowDto {
            category: category.into(),
            posts: PaginatedResult::new(
                posts.into_iter().map(Into::into).collect(),
                total,
                pagination.page,
                pagination.per_page,
            ),
            seo,
        })
    }
}
