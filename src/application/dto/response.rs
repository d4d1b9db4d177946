//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::{Deserialize, Serialize};

use crate::application::services::CourseDto;

/// Course as returned by the listing endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course_name: String,
    pub course_content: Option<String>,
    pub course_location: Option<String>,
    pub teacher_id: Option<i64>,
}

impl From<CourseDto> for CourseResponse {
    fn from(dto: CourseDto) -> Self {
        Self {
            course_name: dto.course_name,
            course_content: dto.course_content,
            course_location: dto.course_location,
            teacher_id: dto.teacher_id,
        }
    }
}
