pub mod course;

pub use course::{CourseDto, CourseRecord, CourseStatus, CourseUiModel, UnknownStatus};
