// src/application/commands/pages/input.rs
use serde_json::Value;

use super::PageCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        validation::{self, FieldErrors, SLUG_TAKEN},
    },
    domain::page::{
        PageContent, PageId, PageStatus,
        value_objects::{CONTENT_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS},
    },
};

pub(super) struct PageInput<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub content: PageContent,
    pub status: PageStatus,
}

pub(super) struct RawPageInput<'a> {
    pub title: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub content: Option<&'a str>,
    pub status: Option<&'a Value>,
}

impl PageCommandService {
    /// Validates every field, then sanitizes the content. Content that drops
    /// under the minimum length once sanitized is reported like short input.
    pub(super) async fn validate_input<'a>(
        &self,
        raw: RawPageInput<'a>,
        current: Option<PageId>,
    ) -> ApplicationResult<PageInput<'a>> {
        let mut errors = FieldErrors::new();

        let title = validation::required_text(
            &mut errors,
            "title",
            raw.title,
            TITLE_MIN_CHARS,
            Some(TITLE_MAX_CHARS),
        );
        let slug = validation::required_text(&mut errors, "slug", raw.slug, 1, None);
        if let Some(slug) = slug {
            if validation::alpha_dash(&mut errors, "slug", slug)
                && self
                    .slug_service
                    .is_taken(slug, current.map(i64::from))
                    .await?
            {
                errors.add("slug", SLUG_TAKEN);
            }
        }
        let content = validation::required_text(
            &mut errors,
            "content",
            raw.content,
            CONTENT_MIN_CHARS,
            None,
        );
        let status = validation::required_boolean(&mut errors, "status", raw.status);

        let content = content
            .filter(|_| !errors.has("content"))
            .and_then(|html| self.sanitize(&mut errors, html));

        errors.into_result()?;

        match (title, slug, content, status) {
            (Some(title), Some(slug), Some(content), Some(status)) => Ok(PageInput {
                title,
                slug,
                content,
                status: PageStatus::from(status),
            }),
            _ => Err(ApplicationError::validation("incomplete page input")),
        }
    }

    fn sanitize(&self, errors: &mut FieldErrors, html: &str) -> Option<PageContent> {
        let cleaned = self.sanitizer.sanitize(html);
        if let Ok(content) = PageContent::new(cleaned) {
            Some(content)
        } else {
            errors.add(
                "content",
                format!("The content must be at least {CONTENT_MIN_CHARS} characters."),
            );
            None
        }
    }
}
