pub mod catalog_refresher;
pub mod course_adapter;
pub mod course_service;
pub mod filter;

pub use catalog_refresher::{CatalogRefresher, CatalogSnapshot};
pub use course_adapter::{
    CourseAdapter, IncomePolicy, PartitionedCourses, PLACEHOLDER_THUMBNAIL, partition_ui_models,
    to_ui_model, to_ui_models,
};
pub use course_service::{CourseService, sort_by_last_updated};
pub use filter::{CourseFilter, FilteredCourses, filter_courses};
