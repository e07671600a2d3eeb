//! In-memory repositories, one per entity type.
//!
//! Each repository owns the canonical collection for its entity as an
//! append-only `Vec` with in-place replacement on update. Every operation is a
//! linear scan: the system is single-user and unbounded scale is out of scope,
//! so no secondary index is kept.
//!
//! Repositories never hand out references into their storage. Lookups return
//! owned clones; the only way a mutation takes effect is an explicit `update`
//! call with the full record.

mod course;
mod enrollment;
mod student;

pub use course::CourseRepository;
pub use enrollment::EnrollmentRepository;
pub use student::StudentRepository;
