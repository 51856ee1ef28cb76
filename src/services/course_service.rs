use std::sync::Arc;

use tracing::warn;

use crate::client::CourseApi;
use crate::models::{CourseRecord, CourseUiModel};
use crate::services::course_adapter::CourseAdapter;

/// Fetch-and-map wrappers over the course backend.
///
/// Failures are logged and turned into `None`; callers decide how to present them.
#[derive(Clone)]
pub struct CourseService {
    api: Arc<dyn CourseApi>,
    adapter: CourseAdapter,
}

impl CourseService {
    pub fn new(api: Arc<dyn CourseApi>, adapter: CourseAdapter) -> Self {
        Self { api, adapter }
    }

    pub fn adapter(&self) -> &CourseAdapter {
        &self.adapter
    }

    pub async fn catalog(&self) -> Option<Vec<CourseRecord>> {
        match self.api.fetch_courses().await {
            Ok(courses) => Some(courses),
            Err(e) => {
                warn!("Failed to fetch course catalog: {}", e);
                None
            }
        }
    }

    /// Instructor dashboard rows, most recently updated first.
    pub async fn instructor_courses(&self) -> Option<Vec<CourseUiModel>> {
        let dtos = match self.api.fetch_instructor_courses().await {
            Ok(dtos) => dtos,
            Err(e) => {
                warn!("Failed to fetch instructor courses: {}", e);
                return None;
            }
        };

        match self.adapter.to_ui_models(&dtos) {
            Ok(mut models) => {
                sort_by_last_updated(&mut models);
                Some(models)
            }
            Err(e) => {
                warn!("Backend sent an invalid instructor course: {}", e);
                None
            }
        }
    }
}

/// Newest first; rows whose timestamp does not parse go last in their original order.
pub fn sort_by_last_updated(models: &mut [CourseUiModel]) {
    models.sort_by(|a, b| b.last_updated_at().cmp(&a.last_updated_at()));
}
