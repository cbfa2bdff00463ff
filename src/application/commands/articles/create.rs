// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleContent, ArticleTitle},
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl CreateArticleCommand {
    #[must_use]
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// # Errors
    ///
    /// Names the first missing field.
    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
        })
    }
}

impl ArticleCommandService {
    /// Validate and store a new article.
    ///
    /// # Errors
    ///
    /// Validation failures are returned before the repository is touched;
    /// repository failures pass through unchanged.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Article> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let created = self.repo.save(Article::draft(title, content, now)).await?;
        if let Some(id) = created.id() {
            tracing::info!(article_id = %id, "article created");
        }
        Ok(created)
    }
}
