use super::ArticleQueryService;
use crate::{application::error::ApplicationResult, domain::article::Article};

impl ArticleQueryService {
    /// All stored articles, in the order the repository returns them.
    ///
    /// # Errors
    ///
    /// Repository failures pass through unchanged.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<Article>> {
        Ok(self.repo.find_all().await?)
    }
}
