// src/infrastructure/html.rs
use std::collections::HashSet;

use crate::application::ports::html::HtmlSanitizer;

/// Allow-list sanitizer for editor markup. Keeps formatting, links and
/// images; drops scripts, event handlers, inline styles and embedded frames.
pub struct AmmoniaSanitizer {
    cleaner: ammonia::Builder<'static>,
}

impl Default for AmmoniaSanitizer {
    fn default() -> Self {
        let mut cleaner = ammonia::Builder::default();
        cleaner
            .add_tags(["figure", "figcaption"])
            .add_tag_attributes("img", ["width", "height"])
            .link_rel(Some("noopener noreferrer"))
            .clean_content_tags(HashSet::from(["script", "style", "iframe"]));
        Self { cleaner }
    }
}

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        self.cleaner.clean(html).to_string()
    }
}
