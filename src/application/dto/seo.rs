use crate::application::settings::SiteSettings;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Document head metadata handed to the view layer with every public view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub open_graph: OpenGraphMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OpenGraphMetadata {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub url: String,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SeoMetadata {
    /// Metadata for a public view of `subject` served at `canonical`.
    pub fn compose(settings: &SiteSettings, subject: &str, canonical: impl Into<String>) -> Self {
        let title = format!(
            "{} {} {}",
            settings.default_title, settings.separator, subject
        );
        let canonical = canonical.into();

        Self {
            open_graph: OpenGraphMetadata {
                title: title.clone(),
                description: settings.default_description.clone(),
                site_name: settings.name.clone(),
                url: canonical.clone(),
                images: vec![settings.absolute_url(&settings.og_image)],
                kind: "article".into(),
            },
            title,
            description: settings.default_description.clone(),
            keywords: settings.default_keywords.clone(),
            canonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_mirrors_seo_fields_into_open_graph() {
        let settings = SiteSettings {
            name: "Mokkan Blog".into(),
            separator: "-".into(),
            og_image: "/img/og.png".into(),
            default_title: "Mokkan".into(),
            default_description: "desc".into(),
            default_keywords: "a, b".into(),
            public_base_url: "https://blog.example".into(),
            ..SiteSettings::default()
        };

        let seo = SeoMetadata::compose(&settings, "News", "https://blog.example/categories/news");

        assert_eq!(seo.title, "Mokkan - News");
        assert_eq!(seo.description, "desc");
        assert_eq!(seo.keywords, "a, b");
        assert_eq!(seo.canonical, "https://blog.example/categories/news");
        assert_eq!(seo.open_graph.title, seo.title);
        assert_eq!(seo.open_graph.url, seo.canonical);
        assert_eq!(seo.open_graph.site_name, "Mokkan Blog");
        assert_eq!(seo.open_graph.images, vec!["https://blog.example/img/og.png"]);

        let json = serde_json::to_value(&seo).unwrap();
        assert_eq!(json["open_graph"]["type"], "article");
    }
}
