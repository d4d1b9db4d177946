//! Course API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::common::{course_names, json_body, token_for, TestApp};

#[tokio::test]
async fn test_list_all_courses_is_public() {
    let app = TestApp::seeded().await;

    let response = app.request("GET", "/api/allCourses").await;

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let json = json_body(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            {
                "courseName": "Math",
                "courseContent": "Algebra",
                "courseLocation": "Room 1",
                "teacherId": 7
            },
            {
                "courseName": "Physics",
                "courseContent": null,
                "courseLocation": null,
                "teacherId": null
            }
        ])
    );
}

#[tokio::test]
async fn test_list_all_courses_empty_catalog() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/allCourses").await;

    assert_eq!(course_names(response).await, Vec::<String>::new());
}

#[tokio::test]
async fn test_enroll_list_drop_scenario() {
    let app = TestApp::seeded().await;
    let token = token_for("alice");

    let response = app
        .request_auth("POST", "/api/student/course/Math", &token)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token)
        .await;
    assert_eq!(course_names(response).await, vec!["Math"]);

    let response = app
        .request_auth("DELETE", "/api/student/course/Math", &token)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token)
        .await;
    assert_eq!(course_names(response).await, Vec::<String>::new());
}

#[tokio::test]
async fn test_enrolled_courses_keep_enrollment_order() {
    let app = TestApp::seeded().await;
    let token = token_for("alice");

    for course in ["Physics", "Math"] {
        let response = app
            .request_auth("POST", &format!("/api/student/course/{}", course), &token)
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token)
        .await;
    assert_eq!(course_names(response).await, vec!["Physics", "Math"]);
}

#[tokio::test]
async fn test_duplicate_enrollment_conflicts() {
    let app = TestApp::seeded().await;
    let token = token_for("alice");

    let first = app
        .request_auth("POST", "/api/student/course/Math", &token)
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .request_auth("POST", "/api/student/course/Math", &token)
        .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = json_body(second).await;
    assert_eq!(json["code"], 10005);

    assert_eq!(app.store.total_enrollments(), 1);
}

#[tokio::test]
async fn test_drop_without_enrollment_succeeds() {
    let app = TestApp::seeded().await;

    let response = app
        .request_auth("DELETE", "/api/student/course/Physics", &token_for("alice"))
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.store.total_enrollments(), 0);
}

#[tokio::test]
async fn test_unknown_course_is_not_found() {
    let app = TestApp::seeded().await;
    let token = token_for("alice");

    let enroll = app
        .request_auth("POST", "/api/student/course/Chemistry", &token)
        .await;
    assert_eq!(enroll.status(), StatusCode::NOT_FOUND);
    let json = json_body(enroll).await;
    assert_eq!(json["code"], 10001);

    let drop = app
        .request_auth("DELETE", "/api/student/course/Chemistry", &token)
        .await;
    assert_eq!(drop.status(), StatusCode::NOT_FOUND);
}

#[test_case("POST", "/api/student/course/Math" ; "enroll")]
#[test_case("GET", "/api/student/enrolledCourses" ; "enrolled courses")]
#[test_case("DELETE", "/api/student/course/Math" ; "drop")]
#[tokio::test]
async fn test_unknown_user_is_not_found(method: &str, uri: &str) {
    let app = TestApp::seeded().await;

    let response = app.request_auth(method, uri, &token_for("mallory")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test_case("POST", "/api/student/course/Math" ; "enroll")]
#[test_case("GET", "/api/student/enrolledCourses" ; "enrolled courses")]
#[test_case("DELETE", "/api/student/course/Math" ; "drop")]
#[tokio::test]
async fn test_student_routes_require_token(method: &str, uri: &str) {
    let app = TestApp::seeded().await;

    let response = app.request(method, uri).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = json_body(response).await;
    assert_eq!(json["code"], 10003);
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized() {
    let app = TestApp::seeded().await;

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", "not-a-jwt")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_course_name_is_percent_decoded() {
    let app = TestApp::seeded().await;
    app.store
        .add_course(course_enrollment::domain::Course::new(0, "Data Science"));
    let token = token_for("alice");

    let response = app
        .request_auth("POST", "/api/student/course/Data%20Science", &token)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token)
        .await;
    assert_eq!(course_names(response).await, vec!["Data Science"]);
}

#[tokio::test]
async fn test_removed_course_is_skipped_in_enrolled_list() {
    let app = TestApp::seeded().await;
    let token = token_for("alice");

    for course in ["Math", "Physics"] {
        app.request_auth("POST", &format!("/api/student/course/{}", course), &token)
            .await;
    }
    app.store.remove_course("Math");

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token)
        .await;
    assert_eq!(course_names(response).await, vec!["Physics"]);
}

#[tokio::test]
async fn test_enrollments_are_per_user() {
    let app = TestApp::seeded().await;
    app.store.add_user("bob");

    app.request_auth("POST", "/api/student/course/Math", &token_for("alice"))
        .await;
    let response = app
        .request_auth("POST", "/api/student/course/Math", &token_for("bob"))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request_auth("GET", "/api/student/enrolledCourses", &token_for("bob"))
        .await;
    assert_eq!(course_names(response).await, vec!["Math"]);
    assert_eq!(app.store.total_enrollments(), 2);
}
