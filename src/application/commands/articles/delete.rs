// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

#[derive(Debug, Clone, Copy)]
pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Succeeds whether or not the article existed.
    ///
    /// # Errors
    ///
    /// Fails on a negative id or a repository failure.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.repo.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
