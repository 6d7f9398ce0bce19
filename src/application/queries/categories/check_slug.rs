use super::CategoryQueryService;
use crate::{
    application::{
        dto::SlugPreviewDto,
        error::ApplicationResult,
        validation::{self, FieldErrors},
    },
    domain::slug::Uniqueness,
};

pub struct CheckCategorySlugQuery {
    pub name: Option<String>,
}

impl CategoryQueryService {
    /// Slug a new category named `name` would receive. Nothing is stored.
    pub async fn check_slug(&self, query: CheckCategorySlugQuery) -> ApplicationResult<SlugPreviewDto> {
        let mut errors = FieldErrors::new();
        let name = validation::required_text(&mut errors, "name", query.name.as_deref(), 1, None);
        errors.into_result()?;

        let slug = self
            .slug_service
            .generate(name.unwrap_or_default(), Uniqueness::Enforced, None)
            .await?;
        Ok(SlugPreviewDto {
            slug: slug.into_inner(),
        })
    }
}
