//! Monotonic per-entity id allocation.
//!
//! One allocator instance is owned by the top-level application context and
//! passed into service operations that mint ids. Counters never roll back
//! during normal operation; [`IdAllocator::reset`] exists for test isolation
//! only. Nothing here is synchronized - the allocator is a plain value with a
//! single caller.

/// First student id is `STUDENT_ID_START + 1`.
pub const STUDENT_ID_START: u32 = 1000;

/// First course id is `COURSE_ID_START + 1`.
pub const COURSE_ID_START: u32 = 2000;

/// First enrollment id is `ENROLLMENT_ID_START + 1`.
pub const ENROLLMENT_ID_START: u32 = 3000;

/// Mints unique ids for each entity type from independent counters.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    student: u32,
    course: u32,
    enrollment: u32,
}

impl IdAllocator {
    /// Create an allocator with all counters at their start offsets.
    pub fn new() -> Self {
        Self {
            student: STUDENT_ID_START,
            course: COURSE_ID_START,
            enrollment: ENROLLMENT_ID_START,
        }
    }

    /// Mint the next student id.
    pub fn next_student_id(&mut self) -> u32 {
        self.student += 1;
        self.student
    }

    /// Mint the next course id.
    pub fn next_course_id(&mut self) -> u32 {
        self.course += 1;
        self.course
    }

    /// Mint the next enrollment id.
    pub fn next_enrollment_id(&mut self) -> u32 {
        self.enrollment += 1;
        self.enrollment
    }

    /// Restore all counters to their start offsets.
    ///
    /// Intended for test setup. Already-minted ids become mintable again, so
    /// never call this against populated repositories.
    pub fn reset(&mut self) {
        self.student = STUDENT_ID_START;
        self.course = COURSE_ID_START;
        self.enrollment = ENROLLMENT_ID_START;
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
