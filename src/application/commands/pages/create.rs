// src/application/commands/pages/create.rs
use serde_json::Value;

use super::{PageCommandService, input::RawPageInput};
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::{
        page::{NewPage, PageTitle},
        slug::Uniqueness,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePageCommand {
    pub title: Option<String>,
    /// Validated, but the stored slug is always derived from `title`.
    pub slug: Option<String>,
    pub content: Option<String>,
    pub status: Option<Value>,
}

impl CreatePageCommand {
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
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let input = self.validate_input(command.raw(), None).await?;

        let title = PageTitle::new(input.title)?;
        let slug = self
            .slug_service
            .generate(title.as_str(), Uniqueness::Enforced, None)
            .await?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewPage {
                title,
                slug,
                content: input.content,
                status: input.status,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            page_id = i64::from(created.id),
            slug = %created.slug,
            published = created.is_published(),
            "page created"
        );
        Ok(created.into())
    }
}
