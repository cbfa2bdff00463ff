// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleContent, ArticleId, ArticleTitle},
};

#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ArticleCommandService {
    /// Replace title and content of an existing article.
    ///
    /// Returns `Ok(None)` when no article has the given id; validation of the
    /// new title and content only happens once the article has been found.
    ///
    /// # Errors
    ///
    /// Fails on a negative id, an invalid title or content, or a repository failure.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<Option<Article>> {
        let id = ArticleId::new(command.id)?;
        let Some(article) = self.repo.find_by_id(id).await? else {
            tracing::debug!(article_id = %id, "update skipped, article not found");
            return Ok(None);
        };

        let UpdateArticleCommand {
            id: _,
            title,
            content,
        } = command;
        let title = ArticleTitle::new(title)?;
        let content = ArticleContent::new(content)?;

        let updated = article
            .change_title(title, self.clock.now())
            .change_content(content, self.clock.now());

        let saved = self.repo.save(updated).await?;
        tracing::info!(article_id = %id, "article updated");
        Ok(Some(saved))
    }
}
