use super::PageQueryService;
use crate::{
    application::{
        dto::{PageShowDto, SeoMetadata},
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct ShowPageQuery {
    pub slug: String,
    pub request_path: String,
}

impl PageQueryService {
    /// Public page view. Drafts resolve to not found.
    pub async fn show_page(&self, query: ShowPageQuery) -> ApplicationResult<PageShowDto> {
        let slug = Slug::new(query.slug).map_err(|_| ApplicationError::not_found("page not found"))?;
        let page = self
            .read_repo
            .find_published_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let seo = SeoMetadata::compose(
            &self.settings,
            page.title.as_str(),
            self.settings.absolute_url(&query.request_path),
        );

        Ok(PageShowDto {
            page: page.into(),
            seo,
        })
    }
}
