//! Enrollment entity and repository trait.
//!
//! Maps to the `user_course` junction table. An enrollment is a first-class
//! record with its own id, tying one user to one course. The pair
//! `(user_id, course_id)` is unique.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::course::Course;
use crate::shared::error::AppError;

/// A user's active registration in a course.
///
/// Maps to the `user_course` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - user_id: BIGINT NOT NULL REFERENCES users(id)
/// - course_id: BIGINT NOT NULL REFERENCES course(id)
/// - enrolled_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - UNIQUE (user_id, course_id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Primary key (0 until persisted)
    pub id: i64,

    /// Enrolled user
    pub user_id: i64,

    /// Course the user is enrolled in
    pub course_id: i64,

    /// When the enrollment was created
    pub enrolled_at: DateTime<Utc>,

    /// Joined course row, populated by listing queries.
    /// `None` when the course could not be loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

impl Enrollment {
    /// Create a new, not yet persisted enrollment.
    pub fn new(user_id: i64, course_id: i64) -> Self {
        Self {
            id: 0,
            user_id,
            course_id,
            enrolled_at: Utc::now(),
            course: None,
        }
    }

    /// Attach the joined course row.
    pub fn with_course(mut self, course: Option<Course>) -> Self {
        self.course = course;
        self
    }
}

/// Enrollment state of a single (user, course) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentState {
    NotEnrolled,
    Enrolled,
}

/// Rejected state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("already enrolled")]
    AlreadyEnrolled,
}

impl EnrollmentState {
    /// State derived from an existing-enrollment lookup.
    pub fn of(existing: Option<&Enrollment>) -> Self {
        match existing {
            Some(_) => Self::Enrolled,
            None => Self::NotEnrolled,
        }
    }

    /// `NotEnrolled -> Enrolled`. Enrolling twice is rejected.
    pub fn enroll(self) -> Result<Self, TransitionError> {
        match self {
            Self::NotEnrolled => Ok(Self::Enrolled),
            Self::Enrolled => Err(TransitionError::AlreadyEnrolled),
        }
    }

    /// `Enrolled -> NotEnrolled`. Dropping is always allowed.
    pub fn drop_course(self) -> Self {
        Self::NotEnrolled
    }
}

/// Repository trait for enrollment persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// All enrollments of a user, oldest first, with their course joined.
    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<Enrollment>, AppError>;

    /// The enrollment for a (user, course) pair, if any.
    async fn find_one_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>, AppError>;

    /// Persist a new enrollment.
    ///
    /// Returns `AppError::Conflict` when the pair is already enrolled.
    async fn save(&self, enrollment: &Enrollment) -> Result<Enrollment, AppError>;

    /// Delete the enrollment for a (user, course) pair.
    /// Succeeds when there is nothing to delete.
    async fn delete_by_user_and_course(&self, user_id: i64, course_id: i64) -> Result<(), AppError>;
}
