//! Course Repository Implementation
//!
//! PostgreSQL implementation of the CourseRepository trait over the `course` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Course, CourseRepository};
use crate::shared::error::AppError;

/// Database row representation of the course table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct CourseRow {
    pub(crate) id: i64,
    pub(crate) course_name: String,
    pub(crate) course_location: Option<String>,
    pub(crate) course_content: Option<String>,
    pub(crate) teacher_id: Option<i64>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id,
            course_name: row.course_name,
            course_location: row.course_location,
            course_content: row.course_content,
            teacher_id: row.teacher_id,
        }
    }
}

/// PostgreSQL course catalog.
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_by_name(&self, course_name: &str) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, course_name, course_location, course_content, teacher_id
            FROM course
            WHERE course_name = $1
            "#,
        )
        .bind(course_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Course::from))
    }

    async fn list_all(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, course_name, course_location, course_content, teacher_id
            FROM course
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_course() {
        let course = Course::from(CourseRow {
            id: 5,
            course_name: "CS101".into(),
            course_location: Some("Hall A".into()),
            course_content: None,
            teacher_id: Some(9),
        });

        assert_eq!(course.id, 5);
        assert_eq!(course.course_name, "CS101");
        assert_eq!(course.course_location.as_deref(), Some("Hall A"));
        assert_eq!(course.course_content, None);
        assert_eq!(course.teacher_id, Some(9));
    }
}
