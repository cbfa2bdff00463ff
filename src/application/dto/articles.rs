use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01 09:00:00")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "2024-01-01 09:00:00")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    // Only stored articles reach the boundary; a draft would report id 0.
    fn from(article: Article) -> Self {
        Self {
            id: article.id().map_or(0, i64::from),
            title: article.title().value().to_owned(),
            content: article.content().value().to_owned(),
            created_at: article.created_at(),
            updated_at: article.updated_at(),
        }
    }
}
