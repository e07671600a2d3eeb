//! # LearnTrack Core
//!
//! Core library for LearnTrack - an in-memory student and course management
//! system.
//!
//! This crate provides the domain model, validation rules, id allocation, and
//! the repository/service layers, independent of the interactive shell.
//!
//! ## Architecture
//!
//! - **domain**: Student, Course, and Enrollment records
//! - **validate**: pure input validation predicates
//! - **ids**: monotonic per-entity id allocation
//! - **repository**: in-memory storage, one repository per entity
//! - **service**: business rules layered over the repositories
//!
//! All state is memory-resident and discarded at process exit. The crate is
//! single-caller by design: nothing here is synchronized, and nothing needs to
//! be for the interactive single-user scope.

pub mod domain;
pub mod error;
pub mod ids;
pub mod repository;
pub mod service;
pub mod validate;

pub use domain::{Course, Enrollment, EnrollmentStatus, Student};
pub use error::{LearnTrackError, Result};
pub use ids::IdAllocator;
pub use service::{CourseService, EnrollmentService, StudentService};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
