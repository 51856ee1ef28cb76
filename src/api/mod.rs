use axum::Json;
use axum::extract::Query;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::*;
use crate::services::filter_courses;
use crate::state::AppState;

#[derive(Deserialize)]
struct CourseQueryParams {
    #[serde(default)]
    q: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses))
        .route("/courses/adapt", post(adapt_courses))
        .route("/instructor/courses", get(instructor_courses))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Json<Vec<CourseRecord>> {
    let catalog = state.catalog.borrow().clone();
    Json(filter_courses(&catalog, &params.q))
}

async fn adapt_courses(
    State(state): State<AppState>,
    Json(dtos): Json<Vec<CourseDto>>,
) -> Result<Json<Vec<CourseUiModel>>, AppError> {
    let models = state.courses.adapter().to_ui_models(&dtos)?;
    Ok(Json(models))
}

async fn instructor_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseUiModel>>, AppError> {
    let models = state
        .courses
        .instructor_courses()
        .await
        .ok_or_else(|| AppError::Upstream("instructor courses unavailable".to_string()))?;
    Ok(Json(models))
}
