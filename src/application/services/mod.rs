// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService,
            pages::{PageCommandService, UploadPolicy},
        },
        ports::{html::HtmlSanitizer, storage::ImageStore, time::Clock, util::SlugGenerator},
        queries::{categories::CategoryQueryService, pages::PageQueryService},
        settings::SiteSettings,
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        page::{PageReadRepository, PageWriteRepository},
        post::PostReadRepository,
        slug::{SlugIndex, SlugService},
    },
};

/// Storage ports the content services are built on.
#[derive(Clone)]
pub struct ContentRepositories {
    pub category_write: Arc<dyn CategoryWriteRepository>,
    pub category_read: Arc<dyn CategoryReadRepository>,
    pub category_slugs: Arc<dyn SlugIndex>,
    pub page_write: Arc<dyn PageWriteRepository>,
    pub page_read: Arc<dyn PageReadRepository>,
    pub page_slugs: Arc<dyn SlugIndex>,
    pub posts: Arc<dyn PostReadRepository>,
}

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repositories: ContentRepositories,
        sanitizer: Arc<dyn HtmlSanitizer>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: SiteSettings,
        upload_policy: UploadPolicy,
    ) -> Self {
        let settings = Arc::new(settings);

        let category_slugs = Arc::new(SlugService::new(
            "category",
            Arc::clone(&repositories.category_slugs),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let page_slugs = Arc::new(SlugService::new(
            "page",
            Arc::clone(&repositories.page_slugs),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repositories.category_write),
            Arc::clone(&repositories.category_read),
            Arc::clone(&category_slugs),
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&repositories.category_read),
            Arc::clone(&repositories.posts),
            category_slugs,
            Arc::clone(&settings),
        ));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&repositories.page_write),
            Arc::clone(&repositories.page_read),
            Arc::clone(&page_slugs),
            sanitizer,
            image_store,
            upload_policy,
            clock,
        ));
        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&repositories.page_read),
            page_slugs,
            settings,
        ));

        Self {
            category_commands,
            category_queries,
            page_commands,
            page_queries,
        }
    }
}
