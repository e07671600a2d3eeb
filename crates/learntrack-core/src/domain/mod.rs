//! Domain records for students, courses, and enrollments.
//!
//! Plain data types with no behavior beyond accessors and display formatting.
//! Ids are assigned at creation by the [`IdAllocator`](crate::ids::IdAllocator)
//! and are the only immutable field on each record.

mod course;
mod enrollment;
mod student;

pub use course::Course;
pub use enrollment::{Enrollment, EnrollmentStatus};
pub use student::Student;
