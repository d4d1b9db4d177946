//! Enrollment Repository Implementation
//!
//! PostgreSQL implementation of the EnrollmentRepository trait.
//! Enrollments live in the `user_course` junction table, which carries a
//! `UNIQUE (user_id, course_id)` constraint. Concurrent enrolls for the same
//! pair are settled by that constraint, not by the service-level check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::course_repository::CourseRow;
use crate::domain::{Course, Enrollment, EnrollmentRepository};
use crate::shared::error::AppError;

/// Database row of the user_course table.
#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i64,
    user_id: i64,
    course_id: i64,
    enrolled_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment {
            id: row.id,
            user_id: row.user_id,
            course_id: row.course_id,
            enrolled_at: row.enrolled_at,
            course: None,
        }
    }
}

/// user_course row left-joined with its course.
#[derive(Debug, sqlx::FromRow)]
struct EnrolledCourseRow {
    id: i64,
    user_id: i64,
    course_id: i64,
    enrolled_at: DateTime<Utc>,
    course_name: Option<String>,
    course_location: Option<String>,
    course_content: Option<String>,
    teacher_id: Option<i64>,
}

impl EnrolledCourseRow {
    /// Convert to an Enrollment; the course is `None` when the join found no row.
    fn into_enrollment(self) -> Enrollment {
        let course = self.course_name.map(|course_name| {
            Course::from(CourseRow {
                id: self.course_id,
                course_name,
                course_location: self.course_location,
                course_content: self.course_content,
                teacher_id: self.teacher_id,
            })
        });

        Enrollment {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            enrolled_at: self.enrolled_at,
            course,
        }
    }
}

/// PostgreSQL enrollment repository implementation.
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    /// Create a new PgEnrollmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<Enrollment>, AppError> {
        let rows = sqlx::query_as::<_, EnrolledCourseRow>(
            r#"
            SELECT uc.id, uc.user_id, uc.course_id, uc.enrolled_at,
                   c.course_name, c.course_location, c.course_content, c.teacher_id
            FROM user_course uc
            LEFT JOIN course c ON c.id = uc.course_id
            WHERE uc.user_id = $1
            ORDER BY uc.enrolled_at ASC, uc.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EnrolledCourseRow::into_enrollment).collect())
    }

    async fn find_one_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>, AppError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, user_id, course_id, enrolled_at
            FROM user_course
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Enrollment::from))
    }

    async fn save(&self, enrollment: &Enrollment) -> Result<Enrollment, AppError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            INSERT INTO user_course (user_id, course_id, enrolled_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, course_id, enrolled_at
            "#,
        )
        .bind(enrollment.user_id)
        .bind(enrollment.course_id)
        .bind(enrollment.enrolled_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_sqlx_unique(
                e,
                format!(
                    "User {} is already enrolled in course {}",
                    enrollment.user_id, enrollment.course_id
                ),
            )
        })?;

        Ok(row.into())
    }

    async fn delete_by_user_and_course(&self, user_id: i64, course_id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM user_course
            WHERE user_id = $1 AND course_id = $2
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(user_id, course_id, "No enrollment to delete");
        }

        Ok(())
    }
}
