#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Response;
use course_catalog::{
    api::router,
    client::CourseApi,
    error::AppError,
    models::{CourseDto, CourseRecord},
    services::{CatalogSnapshot, CourseAdapter, CourseService},
    state::AppState,
};
use tokio::sync::watch;

/// Backend double returning fixed data, or failing when `fail` is set.
pub struct StaticCourseApi {
    pub courses: Vec<CourseRecord>,
    pub instructor_courses: Vec<CourseDto>,
    pub fail: bool,
}

#[async_trait]
impl CourseApi for StaticCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, AppError> {
        if self.fail {
            return Err(AppError::Upstream("backend down".to_string()));
        }
        Ok(self.courses.clone())
    }

    async fn fetch_instructor_courses(&self) -> Result<Vec<CourseDto>, AppError> {
        if self.fail {
            return Err(AppError::Upstream("backend down".to_string()));
        }
        Ok(self.instructor_courses.clone())
    }
}

pub fn sample_catalog() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new(1, "React Basics")
            .with_instructor("John")
            .with_category("Web"),
        CourseRecord::new(2, "Data Science")
            .with_instructor("Jane")
            .with_category("ML"),
    ]
}

pub fn service(api: StaticCourseApi) -> CourseService {
    CourseService::new(Arc::new(api), CourseAdapter::default())
}

pub fn build_test_app(catalog: Vec<CourseRecord>, api: StaticCourseApi) -> Router {
    let (_tx, rx) = watch::channel::<CatalogSnapshot>(Arc::new(catalog));
    router(AppState {
        catalog: rx,
        courses: service(api),
    })
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
