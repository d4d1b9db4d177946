//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - user lookup by login
//! - **PgCourseRepository** - course catalog reads
//! - **PgEnrollmentRepository** - the `user_course` junction table
//! - **MemoryStore** - all three traits in process memory
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgCourseRepository, PgEnrollmentRepository, PgUserRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let course_repo = PgCourseRepository::new(pool.clone());
//!     let enrollment_repo = PgEnrollmentRepository::new(pool);
//! }
//! ```

pub mod course_repository;
pub mod enrollment_repository;
pub mod memory;
pub mod user_repository;

pub use course_repository::PgCourseRepository;
pub use enrollment_repository::PgEnrollmentRepository;
pub use memory::MemoryStore;
pub use user_repository::PgUserRepository;
