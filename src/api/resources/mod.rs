//! Author and course resources

pub mod authors;
pub mod courses;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, options},
    Router,
};

use super::middleware::{cache_responses, ResponseCacheState};
use super::state::AppState;

/// Routes mounted under `/api`
pub fn create_resource_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/authors",
            get(authors::list_authors)
                .post(authors::create_author)
                .options(authors::authors_options),
        )
        .route(
            "/authors/{author_id}",
            get(authors::get_author).delete(authors::delete_author),
        )
        .merge(create_course_router(state))
}

/// Course routes; the read endpoints go through the response cache when one is configured
fn create_course_router(state: &AppState) -> Router<AppState> {
    let mut list = get(courses::list_courses);
    let mut item = get(courses::get_course);

    if let Some(service) = &state.response_cache {
        let layer = from_fn_with_state(
            ResponseCacheState::new(service.clone(), state.settings.cache_ttl)
                .with_public_base_url(state.settings.public_base_url.clone()),
            cache_responses,
        );

        list = list.layer(layer.clone());
        item = item.layer(layer);
    }

    Router::new()
        .route(
            "/authors/{author_id}/courses",
            list.post(courses::create_course),
        )
        .route(
            "/authors/{author_id}/courses/{course_id}",
            item.put(courses::update_course)
                .patch(courses::patch_course)
                .delete(courses::delete_course),
        )
}

/// Root-level routes outside `/api`
pub fn create_root_router() -> Router<AppState> {
    Router::new().route("/courses/options", options(courses::courses_options))
}
