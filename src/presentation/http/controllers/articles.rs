// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{
    ArticleListResponse, ArticleResponse, MessageResponse,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body accepted by create and update; both fields are required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleRequest {
    pub title: String,
    pub content: String,
}

fn article_id(path: Result<Path<i64>, PathRejection>) -> HttpResult<i64> {
    let Path(id) = path?;
    Ok(id)
}

fn request_body(payload: Result<Json<ArticleRequest>, JsonRejection>) -> HttpResult<ArticleRequest> {
    let Json(body) = payload?;
    Ok(body)
}

#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "All stored articles.", body = ArticleListResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleListResponse>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    let items: Vec<ArticleDto> = articles.into_iter().map(Into::into).collect();
    Ok(Json(items.into()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleResponse),
        (status = 400, description = "Malformed or negative id.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let id = article_id(path)?;

    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()?
        .map(|article| Json(ArticleResponse::new(article.into())))
        .ok_or_else(HttpError::article_not_found)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Title or content rejected.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let ArticleRequest { title, content } = request_body(payload)?;

    let created = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { title, content })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(ArticleResponse::with_message(created.into(), "article created")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleResponse),
        (status = 400, description = "Id, title or content rejected.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ArticleRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let id = article_id(path)?;
    let ArticleRequest { title, content } = request_body(payload)?;

    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand { id, title, content })
        .await
        .into_http()?
        .map(|article| Json(ArticleResponse::with_message(article.into(), "article updated")))
        .ok_or_else(HttpError::article_not_found)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article removed, or it never existed.", body = MessageResponse),
        (status = 400, description = "Malformed or negative id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    path: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<MessageResponse>> {
    let id = article_id(path)?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "article deleted".into(),
    }))
}
