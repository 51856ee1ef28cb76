use tokio::sync::watch;
use tracing::debug;

use crate::models::CourseRecord;

/// Returns the records whose name, instructor or category contains `query`,
/// ignoring case. A blank query keeps every record.
///
/// Order of the input is preserved.
pub fn filter_courses(records: &[CourseRecord], query: &str) -> Vec<CourseRecord> {
    if query.trim().is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|course| course.matches(&needle))
        .cloned()
        .collect()
}

/// One published result of a `CourseFilter`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCourses {
    pub revision: u64,
    pub query: String,
    pub courses: Vec<CourseRecord>,
}

/// Keeps a filtered view up to date as the records or the query change.
///
/// Every change bumps the revision and replaces the published snapshot, so a
/// subscriber only ever sees the latest result.
pub struct CourseFilter {
    records: Vec<CourseRecord>,
    query: String,
    revision: u64,
    tx: watch::Sender<FilteredCourses>,
}

impl CourseFilter {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        let courses = records.clone();
        let (tx, _rx) = watch::channel(FilteredCourses {
            revision: 0,
            query: String::new(),
            courses,
        });

        Self {
            records,
            query: String::new(),
            revision: 0,
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FilteredCourses> {
        self.tx.subscribe()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the latest result.
    pub fn current(&self) -> FilteredCourses {
        self.tx.borrow().clone()
    }

    pub fn is_current(&self, snapshot: &FilteredCourses) -> bool {
        snapshot.revision == self.revision
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.recompute();
    }

    pub fn set_records(&mut self, records: Vec<CourseRecord>) {
        self.records = records;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.revision += 1;
        let courses = filter_courses(&self.records, &self.query);
        debug!(
            "filter revision {}: {} of {} courses match {:?}",
            self.revision,
            courses.len(),
            self.records.len(),
            self.query
        );

        self.tx.send_replace(FilteredCourses {
            revision: self.revision,
            query: self.query.clone(),
            courses,
        });
    }
}
