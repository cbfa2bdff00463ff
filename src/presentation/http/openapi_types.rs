use crate::application::dto::ArticleDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Simple status response used by health endpoints and docs.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

// ---- response envelopes ----
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub data: ArticleDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ArticleResponse {
    #[must_use]
    pub fn new(data: ArticleDto) -> Self {
        Self {
            data,
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(data: ArticleDto, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleDto>,
}

impl From<Vec<ArticleDto>> for ArticleListResponse {
    fn from(data: Vec<ArticleDto>) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
