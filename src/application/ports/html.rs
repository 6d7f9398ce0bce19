// src/application/ports/html.rs

/// Removes markup able to run script in a reader's browser.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}
