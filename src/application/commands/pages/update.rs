// src/application/commands/pages/update.rs
use serde_json::Value;

use super::{PageCommandService, input::RawPageInput};
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
        validation::{FieldErrors, SLUG_TAKEN},
    },
    domain::{
        page::{PageId, PageTitle, PageUpdate},
        slug::SlugClaim,
    },
};

#[derive(Debug, Clone)]
pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<Value>,
}

impl UpdatePageCommand {
    fn raw(&self) -> RawPageInput<'_> {
        RawPageInput {
            title: self.title.as_deref(),
            slug: self.slug.as_deref(),
            content: self.content.as_deref(),
            status: self.status.as_ref(),
        }
    }
}

impl PageCommandService {
    pub async fn update_page(&self, command: UpdatePageCommand) -> ApplicationResult<PageDto> {
        let id = PageId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let input = self.validate_input(command.raw(), Some(id)).await?;

        let title = PageTitle::new(input.title)?;
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

        let update = PageUpdate {
            id,
            title,
            slug,
            content: input.content,
            status: input.status,
            updated_at: self.clock.now(),
        };
        let updated = self.write_repo.update(update).await?;

        tracing::info!(
            page_id = i64::from(updated.id),
            slug = %updated.slug,
            published = updated.is_published(),
            "page updated"
        );
        Ok(updated.into())
    }
}
