//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CourseService**: course listing, enrollment and dropping

pub mod course_service;

// Re-export course service types
pub use course_service::{map_courses, CourseDto, CourseError, CourseService, CourseServiceImpl};
