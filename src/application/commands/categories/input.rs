// src/application/commands/categories/input.rs
use super::CategoryCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        validation::{self, FieldErrors, SLUG_TAKEN},
    },
    domain::category::{
        CategoryId,
        value_objects::{NAME_MAX_CHARS, NAME_MIN_CHARS},
    },
};

pub(super) struct CategoryInput<'a> {
    pub name: &'a str,
    pub slug: &'a str,
}

impl CategoryCommandService {
    /// `name: required|min:2|max:255`, `slug: required|alpha_dash|unique`.
    /// `current` is excluded from the uniqueness check.
    pub(super) async fn validate_input<'a>(
        &self,
        name: Option<&'a str>,
        slug: Option<&'a str>,
        current: Option<CategoryId>,
    ) -> ApplicationResult<CategoryInput<'a>> {
        let mut errors = FieldErrors::new();

        let name = validation::required_text(
            &mut errors,
            "name",
            name,
            NAME_MIN_CHARS,
            Some(NAME_MAX_CHARS),
        );
        let slug = validation::required_text(&mut errors, "slug", slug, 1, None);

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

        errors.into_result()?;

        match (name, slug) {
            (Some(name), Some(slug)) => Ok(CategoryInput { name, slug }),
            _ => Err(ApplicationError::validation("incomplete category input")),
        }
    }
}
