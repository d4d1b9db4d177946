//! # Domain Layer
//!
//! The domain layer contains the enrollment rules of the service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - The enrollment state machine encodes the one-enrollment-per-pair rule

pub mod entities;

// Re-export commonly used types
pub use entities::*;
