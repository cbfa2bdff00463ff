use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
}

impl ArticleQueryService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }
}
