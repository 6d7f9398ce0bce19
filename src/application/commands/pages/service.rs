// src/application/commands/pages/service.rs
use std::sync::Arc;

use super::UploadPolicy;
use crate::{
    application::ports::{html::HtmlSanitizer, storage::ImageStore, time::Clock},
    domain::{
        page::{PageReadRepository, PageWriteRepository},
        slug::SlugService,
    },
};

pub struct PageCommandService {
    pub(super) write_repo: Arc<dyn PageWriteRepository>,
    pub(super) read_repo: Arc<dyn PageReadRepository>,
    pub(super) slug_service: Arc<SlugService>,
    pub(super) sanitizer: Arc<dyn HtmlSanitizer>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) upload_policy: UploadPolicy,
    pub(super) clock: Arc<dyn Clock>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
        slug_service: Arc<SlugService>,
        sanitizer: Arc<dyn HtmlSanitizer>,
        image_store: Arc<dyn ImageStore>,
        upload_policy: UploadPolicy,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            sanitizer,
            image_store,
            upload_policy,
            clock,
        }
    }
}
