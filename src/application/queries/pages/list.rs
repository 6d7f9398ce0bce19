use super::PageQueryService;
use crate::application::{dto::PageDto, error::ApplicationResult};

impl PageQueryService {
    /// Every page, drafts included.
    pub async fn list_pages(&self) -> ApplicationResult<Vec<PageDto>> {
        let pages = self.read_repo.list().await?;
        Ok(pages.into_iter().map(Into::into).collect())
    }
}
