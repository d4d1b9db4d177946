//! Course Service
//!
//! Enrollment operations over users, the course catalog and the enrollment
//! store. This is where the one-enrollment-per-pair rule is enforced.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    Course, CourseRepository, Enrollment, EnrollmentRepository, EnrollmentState, User,
    UserRepository,
};
use crate::shared::error::AppError;

/// Course service trait
#[async_trait]
pub trait CourseService: Send + Sync {
    /// List every course in the catalog
    async fn list_all_courses(&self) -> Result<Vec<CourseDto>, CourseError>;

    /// Enroll a user in a course
    async fn enroll_course(&self, login: &str, course_name: &str) -> Result<(), CourseError>;

    /// List the courses a user is enrolled in
    async fn get_enrolled_courses(&self, login: &str) -> Result<Vec<CourseDto>, CourseError>;

    /// Drop a course. Dropping a course the user is not enrolled in succeeds.
    async fn drop_course(&self, login: &str, course_name: &str) -> Result<(), CourseError>;
}

/// Course data transfer object. The internal id is not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDto {
    pub course_name: String,
    pub course_content: Option<String>,
    pub course_location: Option<String>,
    pub teacher_id: Option<i64>,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            course_name: course.course_name,
            course_content: course.course_content,
            course_location: course.course_location,
            teacher_id: course.teacher_id,
        }
    }
}

/// Map a collection of possibly missing courses, skipping the missing ones.
pub fn map_courses<I>(courses: I) -> Vec<CourseDto>
where
    I: IntoIterator,
    I::Item: Into<Option<Course>>,
{
    courses
        .into_iter()
        .filter_map(Into::<Option<Course>>::into)
        .map(CourseDto::from)
        .collect()
}

/// Course service errors
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("No such user: {0}")]
    UserNotFound(String),

    #[error("No such course: {0}")]
    CourseNotFound(String),

    #[error("User {login} is already enrolled in {course_name}")]
    AlreadyEnrolled { login: String, course_name: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CourseError> for AppError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::UserNotFound(_) | CourseError::CourseNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            CourseError::AlreadyEnrolled { .. } => AppError::Conflict(err.to_string()),
            CourseError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// CourseService implementation
pub struct CourseServiceImpl<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    user_repo: Arc<U>,
    course_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<U, C, E> CourseServiceImpl<U, C, E>
where
    U: UserRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub fn new(user_repo: Arc<U>, course_repo: Arc<C>, enrollment_repo: Arc<E>) -> Self {
        Self {
            user_repo,
            course_repo,
            enrollment_repo,
        }
    }

    async fn user_by_login(&self, login: &str) -> Result<User, CourseError> {
        self.user_repo
            .find_by_login(login)
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?
            .ok_or_else(|| CourseError::UserNotFound(login.to_string()))
    }

    async fn course_by_name(&self, course_name: &str) -> Result<Course, CourseError> {
        self.course_repo
            .find_by_name(course_name)
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?
            .ok_or_else(|| CourseError::CourseNotFound(course_name.to_string()))
    }
}

#[async_trait]
impl<U, C, E> CourseService for CourseServiceImpl<U, C, E>
where
    U: UserRepository + 'static,
    C: CourseRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn list_all_courses(&self) -> Result<Vec<CourseDto>, CourseError> {
        let courses = self
            .course_repo
            .list_all()
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?;

        Ok(map_courses(courses))
    }

    async fn enroll_course(&self, login: &str, course_name: &str) -> Result<(), CourseError> {
        tracing::debug!(login, course_name, "Enrolling");

        let user = self.user_by_login(login).await?;
        let course = self.course_by_name(course_name).await?;

        let already_enrolled = || CourseError::AlreadyEnrolled {
            login: login.to_string(),
            course_name: course_name.to_string(),
        };

        let existing = self
            .enrollment_repo
            .find_one_by_user_and_course(user.id, course.id)
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?;

        if let Err(e) = EnrollmentState::of(existing.as_ref()).enroll() {
            tracing::warn!(login, course_name, "Enroll rejected: {}", e);
            return Err(already_enrolled());
        }

        // The store's unique (user, course) constraint decides concurrent enrolls
        match self.enrollment_repo.save(&Enrollment::new(user.id, course.id)).await {
            Ok(saved) => {
                tracing::info!(login, course_name, enrollment_id = saved.id, "Enrolled");
                Ok(())
            }
            Err(AppError::Conflict(_)) => {
                tracing::warn!(login, course_name, "Enroll lost race to a concurrent request");
                Err(already_enrolled())
            }
            Err(e) => Err(CourseError::Internal(e.to_string())),
        }
    }

    async fn get_enrolled_courses(&self, login: &str) -> Result<Vec<CourseDto>, CourseError> {
        let user = self.user_by_login(login).await?;

        let enrollments = self
            .enrollment_repo
            .find_all_by_user(user.id)
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?;

        Ok(map_courses(enrollments.into_iter().map(|e| e.course)))
    }

    async fn drop_course(&self, login: &str, course_name: &str) -> Result<(), CourseError> {
        tracing::debug!(login, course_name, "Dropping");

        let user = self.user_by_login(login).await?;
        let course = self.course_by_name(course_name).await?;

        self.enrollment_repo
            .delete_by_user_and_course(user.id, course.id)
            .await
            .map_err(|e| CourseError::Internal(e.to_string()))?;

        tracing::info!(login, course_name, "Dropped");
        Ok(())
    }
}
