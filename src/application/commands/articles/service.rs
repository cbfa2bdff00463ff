// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::article::ArticleRepository};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[must_use]
    pub const fn new(repo: Arc<dyn ArticleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
