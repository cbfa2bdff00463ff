use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Persistence contract for articles.
///
/// `save` is the only place identifiers are assigned: an article without an
/// id is inserted, one with an id overwrites the stored row and fails with
/// `DomainError::NotFound` when that row does not exist. `delete` is
/// idempotent and `find_by_id` reports absence as `Ok(None)`.
///
/// Every method fails with `DomainError::Persistence` when the store does.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// # Errors
    ///
    /// `DomainError::NotFound` when updating an id with no stored row.
    async fn save(&self, article: Article) -> DomainResult<Article>;
    /// # Errors
    ///
    /// Store failures only.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// # Errors
    ///
    /// Store failures only.
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    /// # Errors
    ///
    /// Store failures only; a missing row is not an error.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
