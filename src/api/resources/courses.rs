//! Course endpoint handlers, nested under an author

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use super::authors::AUTHORS_ROUTE;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, BaseUri, CourseDto, CourseForCreation, CourseForUpdate, Json, JsonPatch,
    PageParameters, Query, Response,
};
use crate::domain::course::Course;
use crate::domain::pagination::{create_paginated_response, PagedResponse};
use crate::infrastructure::course::Upserted;

fn courses_route(author_id: &str) -> String {
    format!("{}/{}/courses", AUTHORS_ROUTE, author_id)
}

fn course_location(base: &BaseUri, course: &Course) -> String {
    base.join(&format!("{}/{}", courses_route(course.author_id().as_str()), course.id()))
}

fn upserted(base: &BaseUri, result: Upserted) -> axum::response::Response {
    match result {
        Upserted::Created(course) => (
            StatusCode::CREATED,
            [(header::LOCATION, course_location(base, &course))],
            Json(CourseDto::from(&course)),
        )
            .into_response(),
        Upserted::Updated(_) => StatusCode::NO_CONTENT.into_response(),
    }
}

/// GET /api/authors/{author_id}/courses
pub async fn list_courses(
    State(state): State<AppState>,
    base: BaseUri,
    Path(author_id): Path<String>,
    Query(params): Query<PageParameters>,
) -> Result<Json<PagedResponse<CourseDto>>, ApiError> {
    let page = params.filter(state.settings.default_page);

    debug!(
        author_id = %author_id,
        page_number = page.page_number(),
        page_size = page.page_size(),
        "Listing courses"
    );

    let courses = state.course_service.list(&author_id, Some(page)).await?;
    let data = courses.iter().map(CourseDto::from).collect();

    Ok(Json(create_paginated_response(
        &base.collection(courses_route(&author_id)),
        &page,
        data,
    )))
}

/// GET /api/authors/{author_id}/courses/{course_id}
pub async fn get_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(String, String)>,
) -> Result<Json<Response<CourseDto>>, ApiError> {
    debug!(author_id = %author_id, course_id = %course_id, "Getting course");

    let course = state
        .course_service
        .get(&author_id, &course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Course '{}' not found", course_id)))?;

    Ok(Json(Response::new(CourseDto::from(&course))))
}

/// POST /api/authors/{author_id}/courses
pub async fn create_course(
    State(state): State<AppState>,
    base: BaseUri,
    Path(author_id): Path<String>,
    Json(body): Json<CourseForCreation>,
) -> Result<impl IntoResponse, ApiError> {
    let course = state.course_service.create(&author_id, body.into()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, course_location(&base, &course))],
        Json(CourseDto::from(&course)),
    ))
}

/// PUT /api/authors/{author_id}/courses/{course_id}
pub async fn update_course(
    State(state): State<AppState>,
    base: BaseUri,
    Path((author_id, course_id)): Path<(String, String)>,
    Json(body): Json<CourseForUpdate>,
) -> Result<axum::response::Response, ApiError> {
    let result = state
        .course_service
        .upsert(&author_id, &course_id, body.into())
        .await?;

    Ok(upserted(&base, result))
}

/// PATCH /api/authors/{author_id}/courses/{course_id}
///
/// An absent course is patched from an empty document and then created.
pub async fn patch_course(
    State(state): State<AppState>,
    base: BaseUri,
    Path((author_id, course_id)): Path<(String, String)>,
    Json(patch): Json<JsonPatch>,
) -> Result<axum::response::Response, ApiError> {
    let current = state
        .course_service
        .get(&author_id, &course_id)
        .await?
        .map(|course| CourseForUpdate::from(&course))
        .unwrap_or_default();

    let mut document = current.to_document();
    patch.apply(&mut document)?;
    let patched = CourseForUpdate::from_document(document)?;

    let result = state
        .course_service
        .upsert(&author_id, &course_id, patched.into())
        .await?;

    Ok(upserted(&base, result))
}

/// DELETE /api/authors/{author_id}/courses/{course_id}
pub async fn delete_course(
    State(state): State<AppState>,
    Path((author_id, course_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    if state.course_service.delete(&author_id, &course_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("Course '{}' not found", course_id)))
    }
}

/// OPTIONS /courses/options
pub async fn courses_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, "GET,POST,OPTIONS")])
}
