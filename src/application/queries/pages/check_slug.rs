use super::PageQueryService;
use crate::{
    application::{
        dto::SlugPreviewDto,
        error::ApplicationResult,
        validation::{self, FieldErrors},
    },
    domain::slug::Uniqueness,
};

pub struct CheckPageSlugQuery {
    pub title: Option<String>,
}

impl PageQueryService {
    /// Slug a new page titled `title` would receive. Nothing is stored.
    pub async fn check_slug(&self, query: CheckPageSlugQuery) -> ApplicationResult<SlugPreviewDto> {
        let mut errors = FieldErrors::new();
        let title = validation::required_text(&mut errors, "title", query.title.as_deref(), 1, None);
        errors.into_result()?;

        let slug = self
            .slug_service
            .generate(title.unwrap_or_default(), Uniqueness::Enforced, None)
            .await?;
        Ok(SlugPreviewDto {
            slug: slug.into_inner(),
        })
    }
}
