use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ARTICLE_COLUMNS: &str = "id, title, content, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title().value())
        .bind(article.content().value())
        .bind(article.created_at())
        .bind(article.updated_at())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    // Last write wins: concurrent updates to the same row simply overwrite.
    async fn update(&self, id: ArticleId, article: &Article) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = ?, content = ?, updated_at = ? WHERE id = ? RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title().value())
        .bind(article.content().value())
        .bind(article.updated_at())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    // A row that no longer satisfies the value objects is a store fault, not bad input.
    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let invalid_row = |err: DomainError| match err {
            DomainError::Validation(msg) => {
                DomainError::Persistence(format!("stored article {id} is invalid: {msg}"))
            }
            other => other,
        };

        Ok(Self::new(
            Some(ArticleId::new(id).map_err(invalid_row)?),
            ArticleTitle::new(row.title).map_err(invalid_row)?,
            ArticleContent::new(row.content).map_err(invalid_row)?,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[async_trait]
impl ArticleRepository for SqliteArticleRepository {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        match article.id() {
            None => self.insert(&article).await,
            Some(id) => self.update(id, &article).await,
        }
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id ASC"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            tracing::debug!(article_id = %id, "delete matched no rows");
        }
        Ok(())
    }
}
