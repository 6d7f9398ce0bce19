use std::sync::Arc;

use crate::{
    application::settings::SiteSettings,
    domain::{page::PageReadRepository, slug::SlugService},
};

pub struct PageQueryService {
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) settings: Arc<SiteSettings>,
}

impl PageQueryService {
    pub fn new(
        read_repo: Arc<dyn PageReadRepository>,
        slug_service: Arc<SlugService>,
        settings: Arc<SiteSettings>,
    ) -> Self {
        Self {
            read_repo,
            slug_service,
            settings,
        }
    }
}
