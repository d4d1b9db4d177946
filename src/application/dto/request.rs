//! Request DTOs
//!
//! Data structures for API request parameters.

use serde::Deserialize;
use validator::Validate;

/// Course name path segment of `/api/student/course/{courseName}`
#[derive(Debug, Deserialize, Validate)]
pub struct CoursePath {
    #[serde(rename = "courseName")]
    #[validate(length(min = 1, max = 255, message = "Course name must be 1-255 characters"))]
    pub course_name: String,
}
