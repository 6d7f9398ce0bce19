// src/application/settings.rs

/// Site-wide values shared by handlers that build public views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Site name, used as the Open Graph site name.
    pub name: String,
    /// Placed between the default title and the subject title.
    pub separator: String,
    /// Relative path or absolute URL of the default social preview image.
    pub og_image: String,
    /// Page size of public post listings.
    pub max_posts: u32,
    pub default_title: String,
    pub default_description: String,
    pub default_keywords: String,
    /// Absolute origin used for canonical and asset URLs, without trailing slash.
    pub public_base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "Mokkan".into(),
            separator: "|".into(),
            og_image: "images/og-default.png".into(),
            max_posts: 10,
            default_title: "Mokkan".into(),
            default_description: "Articles and pages published with Mokkan".into(),
            default_keywords: "cms, blog".into(),
            public_base_url: "http://localhost:8080".into(),
        }
    }
}

impl SiteSettings {
    /// Absolute URL for a site-relative path. Absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
