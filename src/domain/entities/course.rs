//! Course entity and catalog trait.
//!
//! Maps to the `course` table. The catalog is read only from the point of view
//! of this service: courses are created and edited elsewhere.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A catalog entry.
///
/// Maps to the `course` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - course_name: VARCHAR(255) NOT NULL UNIQUE
/// - course_location: VARCHAR(255) NULL
/// - course_content: TEXT NULL
/// - teacher_id: BIGINT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Primary key, never exposed through the API
    pub id: i64,

    /// Unique course name, used as the public identifier
    pub course_name: String,

    /// Where the course takes place
    pub course_location: Option<String>,

    /// Description of the course content
    pub course_content: Option<String>,

    /// Reference to the teaching user
    pub teacher_id: Option<i64>,
}

impl Course {
    /// Create a course with only its identity set.
    pub fn new(id: i64, course_name: impl Into<String>) -> Self {
        Self {
            id,
            course_name: course_name.into(),
            course_location: None,
            course_content: None,
            teacher_id: None,
        }
    }
}

/// Repository trait for the course catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its unique name.
    async fn find_by_name(&self, course_name: &str) -> Result<Option<Course>, AppError>;

    /// List every course in the catalog's natural order.
    async fn list_all(&self) -> Result<Vec<Course>, AppError>;
}
