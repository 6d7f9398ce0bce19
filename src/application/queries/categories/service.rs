use std::sync::Arc;

use crate::{
    application::settings::SiteSettings,
    domain::{category::CategoryReadRepository, post::PostReadRepository, slug::SlugService},
};

pub struct CategoryQueryService {
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) settings: Arc<SiteSettings>,
}

impl CategoryQueryService {
    pub fn new(
        read_repo: Arc<dyn CategoryReadRepository>,
        post_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<SlugService>,
        settings: Arc<SiteSettings>,
    ) -> Self {
        Self {
            read_repo,
            post_repo,
            slug_service,
            settings,
        }
    }
}
