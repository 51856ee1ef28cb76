use tokio::sync::watch;

use crate::services::{CatalogSnapshot, CourseService};

#[derive(Clone)]
pub struct AppState {
    pub catalog: watch::Receiver<CatalogSnapshot>,
    pub courses: CourseService,
}
