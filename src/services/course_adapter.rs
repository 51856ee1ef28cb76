use crate::error::{BatchValidationError, ValidationError};
use serde_json::Value;

use crate::models::{CourseDto, CourseStatus, CourseUiModel};

pub const PLACEHOLDER_THUMBNAIL: &str = "/images/course-placeholder.png";

/// Where a dashboard row's `income` comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncomePolicy {
    /// `price`, or 0 when the backend omits it.
    #[default]
    FromPrice,
    /// Always 0.
    Zero,
}

/// Converts backend `CourseDto`s into `CourseUiModel`s.
#[derive(Debug, Clone)]
pub struct CourseAdapter {
    pub income: IncomePolicy,
    pub placeholder: String,
}

impl Default for CourseAdapter {
    fn default() -> Self {
        Self {
            income: IncomePolicy::default(),
            placeholder: PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }
}

/// Result of `CourseAdapter::partition`: every good row plus the position of every bad one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionedCourses {
    pub models: Vec<CourseUiModel>,
    pub failures: Vec<BatchValidationError>,
}

impl CourseAdapter {
    pub fn new(income: IncomePolicy, placeholder: impl Into<String>) -> Self {
        Self {
            income,
            placeholder: placeholder.into(),
        }
    }

    pub fn to_ui_model(&self, dto: &CourseDto) -> Result<CourseUiModel, ValidationError> {
        let id = match required(&dto.id, "id")? {
            Value::Number(n) => match n.as_u64() {
                Some(0) => return Err(malformed("id", "must be greater than 0")),
                Some(id) => id,
                None => return Err(malformed("id", format!("expected a positive integer, got {}", n))),
            },
            other => return Err(malformed("id", format!("expected an integer, got {}", other))),
        };

        let title = match required(&dto.name, "name")? {
            Value::String(name) if name.trim().is_empty() => {
                return Err(malformed("name", "must not be blank"));
            }
            Value::String(name) => name.clone(),
            other => return Err(malformed("name", format!("expected a string, got {}", other))),
        };

        let status = match required(&dto.status, "status")? {
            Value::String(raw) => raw.parse::<CourseStatus>().map_err(|e| {
                malformed("status", format!("unknown course status {:?}", e.0))
            })?,
            other => return Err(malformed("status", format!("expected a string, got {}", other))),
        };

        let income = match self.income {
            IncomePolicy::FromPrice => dto.price.unwrap_or(0.0),
            IncomePolicy::Zero => 0.0,
        };

        let last_updated = dto
            .updated_date
            .clone()
            .or_else(|| dto.created_date.clone())
            .unwrap_or_default();

        let thumbnail = dto
            .image
            .clone()
            .unwrap_or_else(|| self.placeholder.clone());

        Ok(CourseUiModel {
            id,
            title,
            students: dto.total_student.unwrap_or(0),
            rating: dto.rating.unwrap_or(0.0),
            income,
            status,
            published: status.is_published(),
            last_updated,
            thumbnail,
        })
    }

    /// Maps the whole batch or fails on the first invalid element.
    pub fn to_ui_models(&self, dtos: &[CourseDto]) -> Result<Vec<CourseUiModel>, BatchValidationError> {
        dtos.iter()
            .enumerate()
            .map(|(index, dto)| {
                self.to_ui_model(dto)
                    .map_err(|source| BatchValidationError { index, source })
            })
            .collect()
    }

    /// Maps what it can and reports the rest instead of stopping.
    pub fn partition(&self, dtos: &[CourseDto]) -> PartitionedCourses {
        let mut out = PartitionedCourses::default();

        for (index, dto) in dtos.iter().enumerate() {
            match self.to_ui_model(dto) {
                Ok(model) => out.models.push(model),
                Err(source) => out.failures.push(BatchValidationError { index, source }),
            }
        }

        out
    }
}

fn required<'a>(value: &'a Option<Value>, field: &'static str) -> Result<&'a Value, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

fn malformed(field: &'static str, reason: impl Into<String>) -> ValidationError {
    ValidationError::MalformedField {
        field,
        reason: reason.into(),
    }
}

pub fn to_ui_model(dto: &CourseDto) -> Result<CourseUiModel, ValidationError> {
    CourseAdapter::default().to_ui_model(dto)
}

pub fn to_ui_models(dtos: &[CourseDto]) -> Result<Vec<CourseUiModel>, BatchValidationError> {
    CourseAdapter::default().to_ui_models(dtos)
}

pub fn partition_ui_models(dtos: &[CourseDto]) -> PartitionedCourses {
    CourseAdapter::default().partition(dtos)
}
