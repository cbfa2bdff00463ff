use super::ArticleQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleId},
};

#[derive(Debug, Clone, Copy)]
pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// Fails on a negative id or a repository failure.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<Option<Article>> {
        let id = ArticleId::new(query.id)?;
        Ok(self.repo.find_by_id(id).await?)
    }
}
