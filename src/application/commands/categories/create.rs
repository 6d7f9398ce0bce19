// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{
        category::{CategoryName, NewCategory},
        slug::Uniqueness,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    /// Validated, but the stored slug is always derived from `name`.
    pub slug: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let input = self
            .validate_input(command.name.as_deref(), command.slug.as_deref(), None)
            .await?;

        let name = CategoryName::new(input.name)?;
        let slug = self
            .slug_service
            .generate(name.as_str(), Uniqueness::Enforced, None)
            .await?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewCategory {
                name,
                slug,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            category_id = i64::from(created.id),
            slug = %created.slug,
            "category created"
        );
        Ok(created.into())
    }
}
