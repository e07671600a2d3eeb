//! Business rules layered over the repositories.
//!
//! Each service validates inputs, enforces its entity-level invariants, and
//! delegates storage to its repository. Ids are minted from an
//! [`IdAllocator`](crate::ids::IdAllocator) borrowed from the caller, so no
//! service carries hidden global state. The enrollment service additionally
//! borrows the student and course services to check cross-entity state before
//! touching its own repository.

mod course;
mod enrollment;
mod student;

pub use course::CourseService;
pub use enrollment::{CourseEnrollmentStats, EnrollmentService, StudentEnrollmentStats};
pub use student::StudentService;
