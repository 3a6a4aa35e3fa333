//! Author endpoint handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, AuthorDto, AuthorForCreation, AuthorsResourceParameters, BaseUri, Json, Query,
    Response,
};
use crate::domain::pagination::{create_paginated_response, PagedResponse};

pub const AUTHORS_ROUTE: &str = "/api/authors";

/// GET /api/authors
pub async fn list_authors(
    State(state): State<AppState>,
    base: BaseUri,
    Query(params): Query<AuthorsResourceParameters>,
) -> Result<Json<PagedResponse<AuthorDto>>, ApiError> {
    let page = params.page(state.settings.default_page);
    let query = params.to_query(page);

    debug!(
        main_category = ?query.main_category,
        search_query = ?query.search_query,
        page_number = page.page_number(),
        page_size = page.page_size(),
        "Listing authors"
    );

    let authors = state.author_service.list(&query).await?;

    let links = base
        .collection(AUTHORS_ROUTE)
        .with_param("mainCategory", query.main_category.as_deref())
        .with_param("searchQuery", query.search_query.as_deref());
    let data = authors.iter().map(AuthorDto::from).collect();

    Ok(Json(create_paginated_response(&links, &page, data)))
}

/// GET /api/authors/{author_id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<Json<Response<AuthorDto>>, ApiError> {
    debug!(author_id = %author_id, "Getting author");

    let author = state
        .author_service
        .get(&author_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Author '{}' not found", author_id)))?;

    Ok(Json(Response::new(AuthorDto::from(&author))))
}

/// POST /api/authors
pub async fn create_author(
    State(state): State<AppState>,
    base: BaseUri,
    Json(body): Json<AuthorForCreation>,
) -> Result<impl IntoResponse, ApiError> {
    let author = state.author_service.create(body.into()).await?;
    let location = base.join(&format!("{}/{}", AUTHORS_ROUTE, author.id()));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuthorDto::from(&author)),
    ))
}

/// DELETE /api/authors/{author_id}
pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.author_service.delete(&author_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Author '{}' not found", author_id)))
    }
}

/// OPTIONS /api/authors
pub async fn authors_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET,POST,OPTIONS")])
}
