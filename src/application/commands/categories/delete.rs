// src/application/commands/categories/delete.rs
use super::CategoryCommandService;
use crate::{application::error::ApplicationResult, domain::category::CategoryId};

#[derive(Debug, Clone, Copy)]
pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = CategoryId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(category_id = command.id, "category deleted");
        Ok(())
    }
}
