use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

/// Article aggregate.
///
/// Instances are immutable: `change_title` and `change_content` hand back a
/// new version with `updated_at` moved to the supplied instant. An article
/// without an id has not been through `ArticleRepository::save` yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: Option<ArticleId>,
    title: ArticleTitle,
    content: ArticleContent,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Article {
    #[must_use]
    pub const fn new(
        id: Option<ArticleId>,
        title: ArticleTitle,
        content: ArticleContent,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub const fn draft(title: ArticleTitle, content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self::new(None, title, content, now, now)
    }

    #[must_use]
    pub const fn id(&self) -> Option<ArticleId> {
        self.id
    }

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    #[must_use]
    pub const fn title(&self) -> &ArticleTitle {
        &self.title
    }

    #[must_use]
    pub const fn content(&self) -> &ArticleContent {
        &self.content
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn change_title(&self, title: ArticleTitle, now: DateTime<Utc>) -> Self {
        Self {
            title,
            updated_at: now,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn change_content(&self, content: ArticleContent, now: DateTime<Utc>) -> Self {
        Self {
            content,
            updated_at: now,
            ..self.clone()
        }
    }
}
