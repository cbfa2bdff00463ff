use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(i64);

impl ArticleId {
    /// # Errors
    ///
    /// `DomainError::Validation` for negative ids.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id < 0 {
            Err(DomainError::Validation(
                "article id must be zero or greater".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Value equality; an absent other never matches.
    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Article headline, 1 to 100 characters counted as Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// `DomainError::Validation` when the title is empty or longer than 100 characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let length = value.chars().count();
        if !(1..=TITLE_MAX_CHARS).contains(&length) {
            return Err(DomainError::Validation(format!(
                "title must be between 1 and {TITLE_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// # Errors
    ///
    /// `DomainError::Validation` for empty content.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().next().is_none() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}
