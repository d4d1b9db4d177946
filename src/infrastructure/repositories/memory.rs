//! In-Memory Store
//!
//! Process-local implementation of the user directory, the course catalog and
//! the enrollment store. Used by the integration tests and for running the
//! router without PostgreSQL.
//!
//! All three tables sit behind one `RwLock`, so the uniqueness check of
//! `save` and the insert happen under the same write guard, mirroring the
//! `UNIQUE (user_id, course_id)` constraint of the SQL schema.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{
    Course, CourseRepository, Enrollment, EnrollmentRepository, User, UserRepository,
};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    next_enrollment_id: i64,
}

/// Shared in-memory store. Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user, assigning the next id. Returns the stored user.
    pub fn add_user(&self, login: &str) -> User {
        let mut tables = self.tables.write();
        let id = tables.users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::new(id, login);
        tables.users.push(user.clone());
        user
    }

    /// Add a course to the catalog, assigning the next id. Returns the stored course.
    pub fn add_course(&self, mut course: Course) -> Course {
        let mut tables = self.tables.write();
        course.id = tables.courses.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        tables.courses.push(course.clone());
        course
    }

    /// Remove a course from the catalog, leaving its enrollments dangling.
    pub fn remove_course(&self, course_name: &str) {
        self.tables
            .write()
            .courses
            .retain(|c| c.course_name != course_name);
    }

    /// Number of stored enrollments for a pair.
    pub fn enrollment_count(&self, user_id: i64, course_id: i64) -> usize {
        self.tables
            .read()
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id && e.course_id == course_id)
            .count()
    }

    /// Total number of stored enrollments.
    pub fn total_enrollments(&self) -> usize {
        self.tables.read().enrollments.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .tables
            .read()
            .users
            .iter()
            .find(|u| u.login == login)
            .cloned())
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn find_by_name(&self, course_name: &str) -> Result<Option<Course>, AppError> {
        Ok(self
            .tables
            .read()
            .courses
            .iter()
            .find(|c| c.course_name == course_name)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.tables.read().courses.clone())
    }
}

#[async_trait]
impl EnrollmentRepository for MemoryStore {
    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<Enrollment>, AppError> {
        let tables = self.tables.read();
        Ok(tables
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| {
                let course = tables.courses.iter().find(|c| c.id == e.course_id).cloned();
                e.clone().with_course(course)
            })
            .collect())
    }

    async fn find_one_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>, AppError> {
        Ok(self
            .tables
            .read()
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn save(&self, enrollment: &Enrollment) -> Result<Enrollment, AppError> {
        let mut tables = self.tables.write();

        let duplicate = tables
            .enrollments
            .iter()
            .any(|e| e.user_id == enrollment.user_id && e.course_id == enrollment.course_id);
        if duplicate {
            return Err(AppError::Conflict(format!(
                "User {} is already enrolled in course {}",
                enrollment.user_id, enrollment.course_id
            )));
        }

        tables.next_enrollment_id += 1;
        let stored = Enrollment {
            id: tables.next_enrollment_id,
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            enrolled_at: Utc::now(),
            course: None,
        };
        tables.enrollments.push(stored.clone());

        Ok(stored)
    }

    async fn delete_by_user_and_course(&self, user_id: i64, course_id: i64) -> Result<(), AppError> {
        self.tables
            .write()
            .enrollments
            .retain(|e| !(e.user_id == user_id && e.course_id == course_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_rejects_duplicate_pair() {
        let store = MemoryStore::new();
        let user = store.add_user("alice");
        let course = store.add_course(Course::new(0, "CS101"));

        let first = store.save(&Enrollment::new(user.id, course.id)).await.unwrap();
        let second = store.save(&Enrollment::new(user.id, course.id)).await;

        assert_eq!(first.id, 1);
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(store.enrollment_count(user.id, course.id), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let user = store.add_user("alice");
        let course = store.add_course(Course::new(0, "CS101"));
        store.save(&Enrollment::new(user.id, course.id)).await.unwrap();

        store.delete_by_user_and_course(user.id, course.id).await.unwrap();
        store.delete_by_user_and_course(user.id, course.id).await.unwrap();

        assert_eq!(store.total_enrollments(), 0);
    }

    #[tokio::test]
    async fn test_find_all_by_user_joins_course() {
        let store = MemoryStore::new();
        let alice = store.add_user("alice");
        let bob = store.add_user("bob");
        let cs101 = store.add_course(Course::new(0, "CS101"));
        let cs102 = store.add_course(Course::new(0, "CS102"));
        store.save(&Enrollment::new(alice.id, cs101.id)).await.unwrap();
        store.save(&Enrollment::new(bob.id, cs102.id)).await.unwrap();

        let enrollments = store.find_all_by_user(alice.id).await.unwrap();

        assert_eq!(enrollments.len(), 1);
        assert_eq!(enrollments[0].course.as_ref(), Some(&cs101));
    }

    #[tokio::test]
    async fn test_removed_course_leaves_dangling_enrollment() {
        let store = MemoryStore::new();
        let alice = store.add_user("alice");
        let cs101 = store.add_course(Course::new(0, "CS101"));
        store.save(&Enrollment::new(alice.id, cs101.id)).await.unwrap();

        store.remove_course("CS101");
        let enrollments = store.find_all_by_user(alice.id).await.unwrap();

        assert_eq!(enrollments.len(), 1);
        assert!(enrollments[0].course.is_none());
    }
}
