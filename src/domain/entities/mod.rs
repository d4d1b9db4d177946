//! # Domain Entities
//!
//! Core domain entities of the enrollment service. All entities map directly
//! to their corresponding database tables.
//!
//! - **User**: an account that can enroll (read only here)
//! - **Course**: a catalog entry (read only here)
//! - **Enrollment**: the user/course association, unique per pair
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod course;
mod enrollment;
mod user;

pub use course::{Course, CourseRepository};
pub use enrollment::{Enrollment, EnrollmentRepository, EnrollmentState, TransitionError};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use course::MockCourseRepository;
#[cfg(test)]
pub use enrollment::MockEnrollmentRepository;
#[cfg(test)]
pub use user::MockUserRepository;
