// src/application/commands/categories/update.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
        validation::{FieldErrors, SLUG_TAKEN},
    },
    domain::{
        category::{CategoryId, CategoryName, CategoryUpdate},
        slug::SlugClaim,
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        let input = self
            .validate_input(command.name.as_deref(), command.slug.as_deref(), Some(id))
            .await?;

        let name = CategoryName::new(input.name)?;
        let slug = match self.slug_service.claim(input.slug, id.into()).await? {
            SlugClaim::Available(slug) => slug,
            SlugClaim::Taken(_) => {
                let mut errors = FieldErrors::new();
                errors.add("slug", SLUG_TAKEN);
                return Err(errors.into());
            }
            SlugClaim::Empty => {
                let mut errors = FieldErrors::new();
                errors.add("slug", "The slug must contain at least one letter or number.");
                return Err(errors.into());
            }
        };

        let update = CategoryUpdate::new(id, name, slug, self.clock.now());
        let updated = self.write_repo.update(update).await?;

        tracing::info!(
            category_id = i64::from(updated.id),
            slug = %updated.slug,
            "category updated"
        );
        Ok(updated.into())
    }
}
