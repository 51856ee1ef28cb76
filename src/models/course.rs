use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Course as listed in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub image: String,
    /// Backend fields this crate does not interpret, kept so they survive a round trip.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CourseRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            instructor: None,
            category: None,
            progress: 0.0,
            image: String::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(&self.name)
            || self.instructor.as_deref().is_some_and(contains)
            || self.category.as_deref().is_some_and(contains)
    }
}

/// Backend course payload used by the instructor dashboard.
///
/// Every field is optional on the wire; `CourseAdapter` decides which ones are required.
/// Required fields stay untyped so a wrong JSON type is reported per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub total_student: Option<u64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Pending,
    Published,
    Rejected,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Draft => "DRAFT",
            CourseStatus::Pending => "PENDING",
            CourseStatus::Published => "PUBLISHED",
            CourseStatus::Rejected => "REJECTED",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, CourseStatus::Published)
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl FromStr for CourseStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(CourseStatus::Draft),
            "PENDING" => Ok(CourseStatus::Pending),
            "PUBLISHED" => Ok(CourseStatus::Published),
            "REJECTED" => Ok(CourseStatus::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Dashboard row with every optional backend field already defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUiModel {
    pub id: u64,
    pub title: String,
    pub students: u64,
    pub rating: f64,
    pub income: f64,
    pub status: CourseStatus,
    pub published: bool,
    pub last_updated: String,
    pub thumbnail: String,
}

impl CourseUiModel {
    pub fn last_updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}
