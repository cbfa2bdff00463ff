// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use blog_api::domain::article::{Article, ArticleId, ArticleRepository};
use blog_api::domain::errors::{DomainError, DomainResult};

/// リポジトリに対して行われた呼び出しの記録
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoCall {
    Save,
    FindById,
    FindAll,
    Delete,
}

#[derive(Default)]
struct State {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
    calls: Vec<RepoCall>,
}

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// メモリ上の記事リポジトリ（呼び出し履歴付き）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    state: Mutex<State>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    fn record(&self, call: RepoCall) -> std::sync::MutexGuard<'_, State> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn save(&self, article: Article) -> DomainResult<Article> {
        let mut state = self.record(RepoCall::Save);
        let stored = match article.id() {
            None => {
                state.last_id += 1;
                Article::new(
                    Some(ArticleId::new(state.last_id)?),
                    article.title().clone(),
                    article.content().clone(),
                    article.created_at(),
                    article.updated_at(),
                )
            }
            Some(id) => {
                if !state.rows.contains_key(&i64::from(id)) {
                    return Err(DomainError::NotFound(format!("article {id} not found")));
                }
                article
            }
        };

        let key = stored.id().map(i64::from).unwrap_or_default();
        state.rows.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.record(RepoCall::FindById);
        Ok(state.rows.get(&i64::from(id)).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let state = self.record(RepoCall::FindAll);
        Ok(state.rows.values().cloned().collect())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.record(RepoCall::Delete);
        state.rows.remove(&i64::from(id));
        Ok(())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作で永続化エラーを返すリポジトリ
pub struct FailingArticleRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database unavailable".into()))
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn save(&self, _article: Article) -> DomainResult<Article> {
        unavailable()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        unavailable()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        unavailable()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        unavailable()
    }
}
