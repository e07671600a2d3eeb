//! Enrollment storage.

use crate::domain::{Enrollment, EnrollmentStatus};

/// In-memory store for [`Enrollment`] records, insertion order preserved.
///
/// The (student id, course id) pair is not unique here: a student can hold
/// multiple historical enrollments for the same course. The service layer
/// guarantees at most one of them is ACTIVE at a time.
#[derive(Debug, Default)]
pub struct EnrollmentRepository {
    enrollments: Vec<Enrollment>,
}

impl EnrollmentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new enrollment. The caller guarantees the id was freshly minted.
    pub fn save(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    /// Find an enrollment by id. Returns a clone, never a reference into storage.
    pub fn find_by_id(&self, id: u32) -> Option<Enrollment> {
        self.enrollments.iter().find(|e| e.id == id).cloned()
    }

    /// All enrollments, in insertion order.
    pub fn find_all(&self) -> Vec<Enrollment> {
        self.enrollments.clone()
    }

    /// All enrollments for the given student.
    pub fn find_by_student_id(&self, student_id: u32) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect()
    }

    /// All enrollments for the given course.
    pub fn find_by_course_id(&self, course_id: u32) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .cloned()
            .collect()
    }

    /// ACTIVE enrollments for the given student.
    pub fn find_active_by_student_id(&self, student_id: u32) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id && e.status == EnrollmentStatus::Active)
            .cloned()
            .collect()
    }

    /// All enrollments with the given status.
    pub fn find_by_status(&self, status: EnrollmentStatus) -> Vec<Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect()
    }

    /// Whether the student has an ACTIVE enrollment for the course.
    pub fn is_actively_enrolled(&self, student_id: u32, course_id: u32) -> bool {
        self.enrollments.iter().any(|e| {
            e.student_id == student_id
                && e.course_id == course_id
                && e.status == EnrollmentStatus::Active
        })
    }

    /// Replace the stored record with the same id wholesale. No-op if absent.
    pub fn update(&mut self, enrollment: Enrollment) {
        if let Some(existing) = self.enrollments.iter_mut().find(|e| e.id == enrollment.id) {
            *existing = enrollment;
        }
    }

    /// Remove the enrollment with the given id. Returns whether a match existed.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.enrollments.iter().position(|e| e.id == id) {
            Some(index) => {
                self.enrollments.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total number of enrollments.
    pub fn count(&self) -> usize {
        self.enrollments.len()
    }

    /// Number of ACTIVE enrollments.
    pub fn count_active(&self) -> usize {
        self.enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Active)
            .count()
    }

    /// Number of COMPLETED enrollments.
    pub fn count_completed(&self) -> usize {
        self.enrollments
            .iter()
            .filter(|e| e.status == EnrollmentStatus::Completed)
            .count()
    }

    /// Whether an enrollment with the given id exists.
    pub fn exists(&self, id: u32) -> bool {
        self.enrollments.iter().any(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_student_course_and_status() {
        let mut repo = EnrollmentRepository::new();
        repo.save(Enrollment::new(3001, 1001, 2001));
        repo.save(Enrollment::new(3002, 1001, 2002));
        repo.save(Enrollment::new(3003, 1002, 2001));

        assert_eq!(repo.find_by_student_id(1001).len(), 2);
        assert_eq!(repo.find_by_course_id(2001).len(), 2);
        assert_eq!(repo.find_by_status(EnrollmentStatus::Active).len(), 3);
        assert!(repo.find_by_status(EnrollmentStatus::Dropped).is_empty());
    }

    #[test]
    fn test_actively_enrolled_ignores_closed_records() {
        let mut repo = EnrollmentRepository::new();
        let mut enrollment = Enrollment::new(3001, 1001, 2001);
        repo.save(enrollment.clone());
        assert!(repo.is_actively_enrolled(1001, 2001));

        enrollment.status = EnrollmentStatus::Cancelled;
        repo.update(enrollment);
        assert!(!repo.is_actively_enrolled(1001, 2001));
    }

    #[test]
    fn test_same_pair_can_recur_in_history() {
        let mut repo = EnrollmentRepository::new();
        let mut first = Enrollment::new(3001, 1001, 2001);
        first.status = EnrollmentStatus::Dropped;
        repo.save(first);
        repo.save(Enrollment::new(3002, 1001, 2001));

        assert_eq!(repo.find_by_student_id(1001).len(), 2);
        assert_eq!(repo.find_active_by_student_id(1001).len(), 1);
    }

    #[test]
    fn test_status_counts() {
        let mut repo = EnrollmentRepository::new();
        repo.save(Enrollment::new(3001, 1001, 2001));
        let mut done = Enrollment::new(3002, 1001, 2002);
        done.status = EnrollmentStatus::Completed;
        repo.save(done);

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.count_active(), 1);
        assert_eq!(repo.count_completed(), 1);
    }

    #[test]
    fn test_delete_and_exists() {
        let mut repo = EnrollmentRepository::new();
        repo.save(Enrollment::new(3001, 1001, 2001));
        assert!(repo.exists(3001));
        assert!(repo.delete(3001));
        assert!(!repo.exists(3001));
        assert!(!repo.delete(3001));
    }
}
