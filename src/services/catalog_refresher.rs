use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use crate::models::CourseRecord;
use crate::services::course_service::CourseService;

pub type CatalogSnapshot = Arc<Vec<CourseRecord>>;

/// Periodically reloads the course catalog into a shared snapshot.
pub struct CatalogRefresher {
    service: CourseService,
    catalog: watch::Sender<CatalogSnapshot>,
    interval: Duration,
}

impl CatalogRefresher {
    pub fn new(service: CourseService, catalog: watch::Sender<CatalogSnapshot>, interval_secs: u64) -> Self {
        Self {
            service,
            catalog,
            interval: Duration::from_secs(interval_secs),
        }
    }

    /// Replaces the snapshot on success; keeps the previous one otherwise.
    pub async fn refresh_once(&self) -> bool {
        match self.service.catalog().await {
            Some(courses) => {
                info!("Catalog refreshed: {} courses", courses.len());
                self.catalog.send_replace(Arc::new(courses));
                true
            }
            None => false,
        }
    }

    /// Loops forever; a failed refresh does not stop the loop.
    pub async fn start(self) {
        info!("Starting catalog refresher (interval: {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            if !self.refresh_once().await {
                tracing::warn!("Catalog refresh failed, keeping previous snapshot");
            }
        }
    }
}
