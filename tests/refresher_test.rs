mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{StaticCourseApi, sample_catalog, service};
use course_catalog::client::NoopCourseApi;
use course_catalog::models::CourseRecord;
use course_catalog::services::{CatalogRefresher, CatalogSnapshot, CourseAdapter, CourseService};
use tokio::sync::watch;

#[tokio::test]
async fn test_refresh_once_replaces_snapshot() {
    let (tx, rx) = watch::channel::<CatalogSnapshot>(Arc::new(Vec::new()));
    let refresher = CatalogRefresher::new(
        service(StaticCourseApi {
            courses: sample_catalog(),
            instructor_courses: Vec::new(),
            fail: false,
        }),
        tx,
        60,
    );

    assert!(refresher.refresh_once().await);
    assert_eq!(rx.borrow().as_slice(), sample_catalog().as_slice());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let previous = vec![CourseRecord::new(42, "Cached")];
    let (tx, rx) = watch::channel::<CatalogSnapshot>(Arc::new(previous.clone()));
    let refresher = CatalogRefresher::new(
        service(StaticCourseApi {
            courses: Vec::new(),
            instructor_courses: Vec::new(),
            fail: true,
        }),
        tx,
        60,
    );

    assert!(!refresher.refresh_once().await);
    assert_eq!(rx.borrow().as_slice(), previous.as_slice());
}

#[tokio::test]
async fn test_refresher_loop_publishes_updates() {
    let (tx, mut rx) = watch::channel::<CatalogSnapshot>(Arc::new(Vec::new()));
    let refresher = CatalogRefresher::new(
        service(StaticCourseApi {
            courses: sample_catalog(),
            instructor_courses: Vec::new(),
            fail: false,
        }),
        tx,
        1,
    );

    let task = tokio::spawn(refresher.start());

    tokio::time::timeout(Duration::from_secs(5), rx.changed())
        .await
        .expect("refresher did not publish in time")
        .expect("sender dropped");
    assert_eq!(rx.borrow().len(), 2);

    task.abort();
}

#[tokio::test]
async fn test_noop_backend_yields_empty_catalog() {
    let (tx, rx) = watch::channel::<CatalogSnapshot>(Arc::new(vec![CourseRecord::new(1, "Stale")]));
    let refresher = CatalogRefresher::new(
        CourseService::new(Arc::new(NoopCourseApi), CourseAdapter::default()),
        tx,
        60,
    );

    assert!(refresher.refresh_once().await);
    assert!(rx.borrow().is_empty());
}
