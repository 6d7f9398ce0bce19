// src/application/ports/util.rs

/// Turns free text into a lower-case, dash separated URL segment.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
