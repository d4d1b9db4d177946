//! Course Handlers
//!
//! Routes map one to one onto `CourseService` operations. The list endpoints
//! answer `202 Accepted`, enroll answers `201 Created` and drop `204 No Content`.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::CoursePath;
use crate::application::dto::response::CourseResponse;
use crate::application::services::CourseError;
use crate::infrastructure::metrics;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

/// Metrics outcome label of an enroll or drop
fn outcome(result: &Result<(), CourseError>) -> &'static str {
    match result {
        Ok(()) => "success",
        Err(CourseError::AlreadyEnrolled { .. }) => "conflict",
        Err(CourseError::UserNotFound(_) | CourseError::CourseNotFound(_)) => "not_found",
        Err(CourseError::Internal(_)) => "error",
    }
}

/// List every course in the catalog
pub async fn list_all_courses(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), AppError> {
    let courses = state.course_service.list_all_courses().await?;

    let responses: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();

    Ok((StatusCode::ACCEPTED, Json(responses)))
}

/// Enroll the caller in a course
pub async fn enroll_course(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(path): Path<CoursePath>,
) -> Result<StatusCode, AppError> {
    path.validate().map_err(validation_error)?;

    let result = state
        .course_service
        .enroll_course(&auth.login, &path.course_name)
        .await;
    metrics::record_enrollment_operation("enroll", outcome(&result));
    result?;

    Ok(StatusCode::CREATED)
}

/// List the caller's enrolled courses
pub async fn get_enrolled_courses(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), AppError> {
    let courses = state
        .course_service
        .get_enrolled_courses(&auth.login)
        .await?;

    let responses: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();

    Ok((StatusCode::ACCEPTED, Json(responses)))
}

/// Drop one of the caller's courses
pub async fn drop_course(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(path): Path<CoursePath>,
) -> Result<StatusCode, AppError> {
    path.validate().map_err(validation_error)?;

    let result = state
        .course_service
        .drop_course(&auth.login, &path.course_name)
        .await;
    metrics::record_enrollment_operation("drop", outcome(&result));
    result?;

    Ok(StatusCode::NO_CONTENT)
}
