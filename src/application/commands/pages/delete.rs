// src/application/commands/pages/delete.rs
use super::PageCommandService;
use crate::{application::error::ApplicationResult, domain::page::PageId};

#[derive(Debug, Clone, Copy)]
pub struct DeletePageCommand {
    pub id: i64,
}

impl PageCommandService {
    pub async fn delete_page(&self, command: DeletePageCommand) -> ApplicationResult<()> {
        let id = PageId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(page_id = command.id, "page deleted");
        Ok(())
    }
}
