//! Enrollment business logic.
//!
//! The one place in the system with cross-entity rules: enrolling requires an
//! existing, active student and an existing, active course, and at most one
//! ACTIVE enrollment may exist per (student, course) pair. The student and
//! course services are borrowed per call rather than owned, so there is a
//! single owner for each repository.

use std::fmt;

use crate::domain::{Enrollment, EnrollmentStatus};
use crate::error::{LearnTrackError, Result};
use crate::ids::IdAllocator;
use crate::repository::EnrollmentRepository;
use crate::service::{CourseService, StudentService};

/// Per-status tallies for one student's enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEnrollmentStats {
    /// Student display name, e.g. "Jane Doe (ID: 1001)"
    pub student: String,
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl fmt::Display for StudentEnrollmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}\nTotal Enrollments: {}\nActive: {}\nCompleted: {}\nCancelled: {}",
            self.student, self.total, self.active, self.completed, self.cancelled
        )
    }
}

/// Per-status tallies for one course's enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEnrollmentStats {
    /// Course name
    pub course: String,
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl fmt::Display for CourseEnrollmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course: {}\nTotal Enrollments: {}\nActive: {}\nCompleted: {}",
            self.course, self.total, self.active, self.completed
        )
    }
}

/// Enforces enrollment rules and coordinates with [`EnrollmentRepository`].
#[derive(Debug, Default)]
pub struct EnrollmentService {
    repository: EnrollmentRepository,
}

impl EnrollmentService {
    /// Create a service over an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll a student in a course.
    ///
    /// Both parents must exist and be active, and the pair must not already
    /// hold an ACTIVE enrollment. On success the new enrollment is ACTIVE and
    /// dated today.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the student or course does not
    /// exist, and `LearnTrackError::InvalidInput` if either is inactive or the
    /// pair is already actively enrolled.
    pub fn enroll_student(
        &mut self,
        ids: &mut IdAllocator,
        students: &StudentService,
        courses: &CourseService,
        student_id: u32,
        course_id: u32,
    ) -> Result<Enrollment> {
        let student = students.find_student_by_id(student_id)?;
        if !student.active {
            return Err(LearnTrackError::InvalidInput(
                "Cannot enroll inactive student".into(),
            ));
        }

        let course = courses.find_course_by_id(course_id)?;
        if !course.active {
            return Err(LearnTrackError::InvalidInput(
                "Cannot enroll in inactive course".into(),
            ));
        }

        if self.repository.is_actively_enrolled(student_id, course_id) {
            return Err(LearnTrackError::InvalidInput(
                "Student is already enrolled in this course".into(),
            ));
        }

        let id = ids.next_enrollment_id();
        let enrollment = Enrollment::new(id, student_id, course_id);
        self.repository.save(enrollment.clone());
        Ok(enrollment)
    }

    /// All enrollments for a student.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the student does not exist.
    pub fn get_enrollments_by_student(
        &self,
        students: &StudentService,
        student_id: u32,
    ) -> Result<Vec<Enrollment>> {
        students.find_student_by_id(student_id)?;
        Ok(self.repository.find_by_student_id(student_id))
    }

    /// ACTIVE enrollments for a student.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the student does not exist.
    pub fn get_active_enrollments_by_student(
        &self,
        students: &StudentService,
        student_id: u32,
    ) -> Result<Vec<Enrollment>> {
        students.find_student_by_id(student_id)?;
        Ok(self.repository.find_active_by_student_id(student_id))
    }

    /// All enrollments for a course.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the course does not exist.
    pub fn get_enrollments_by_course(
        &self,
        courses: &CourseService,
        course_id: u32,
    ) -> Result<Vec<Enrollment>> {
        courses.find_course_by_id(course_id)?;
        Ok(self.repository.find_by_course_id(course_id))
    }

    /// All enrollments in the system.
    pub fn get_all_enrollments(&self) -> Vec<Enrollment> {
        self.repository.find_all()
    }

    /// All enrollments with the given status.
    pub fn get_enrollments_by_status(&self, status: EnrollmentStatus) -> Vec<Enrollment> {
        self.repository.find_by_status(status)
    }

    /// Set an enrollment's status from a storage-layer token.
    ///
    /// Accepts any of the four recognized statuses regardless of the current
    /// one; closed enrollments are not treated as terminal here. The token is
    /// case-sensitive - callers normalize user input to upper case.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no enrollment has the id, or
    /// `LearnTrackError::InvalidInput` for an unrecognized token.
    pub fn update_enrollment_status(&mut self, id: u32, status: &str) -> Result<Enrollment> {
        let mut enrollment = self
            .repository
            .find_by_id(id)
            .ok_or_else(|| LearnTrackError::not_found("Enrollment", id))?;

        enrollment.status = status.parse::<EnrollmentStatus>()?;
        self.repository.update(enrollment.clone());
        Ok(enrollment)
    }

    /// Mark an enrollment COMPLETED.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no enrollment has the id.
    pub fn complete_enrollment(&mut self, id: u32) -> Result<Enrollment> {
        self.update_enrollment_status(id, "COMPLETED")
    }

    /// Mark an enrollment CANCELLED.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no enrollment has the id.
    pub fn cancel_enrollment(&mut self, id: u32) -> Result<Enrollment> {
        self.update_enrollment_status(id, "CANCELLED")
    }

    /// Mark an enrollment DROPPED.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no enrollment has the id.
    pub fn drop_enrollment(&mut self, id: u32) -> Result<Enrollment> {
        self.update_enrollment_status(id, "DROPPED")
    }

    /// Permanently delete an enrollment. Returns whether anything was removed.
    pub fn delete_enrollment(&mut self, id: u32) -> bool {
        self.repository.delete(id)
    }

    /// Total enrollment count.
    pub fn get_total_enrollment_count(&self) -> usize {
        self.repository.count()
    }

    /// ACTIVE enrollment count.
    pub fn get_active_enrollment_count(&self) -> usize {
        self.repository.count_active()
    }

    /// COMPLETED enrollment count.
    pub fn get_completed_enrollment_count(&self) -> usize {
        self.repository.count_completed()
    }

    /// Tally a student's enrollments per status. Pure reporting, no mutation.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the student does not exist.
    pub fn get_student_enrollment_stats(
        &self,
        students: &StudentService,
        student_id: u32,
    ) -> Result<StudentEnrollmentStats> {
        let student = students.find_student_by_id(student_id)?;
        let enrollments = self.repository.find_by_student_id(student_id);

        let mut stats = StudentEnrollmentStats {
            student: student.display_name(),
            total: enrollments.len(),
            active: 0,
            completed: 0,
            cancelled: 0,
        };
        for enrollment in &enrollments {
            match enrollment.status {
                EnrollmentStatus::Active => stats.active += 1,
                EnrollmentStatus::Completed => stats.completed += 1,
                EnrollmentStatus::Cancelled => stats.cancelled += 1,
                EnrollmentStatus::Dropped => {}
            }
        }
        Ok(stats)
    }

    /// Tally a course's enrollments per status. Pure reporting, no mutation.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if the course does not exist.
    pub fn get_course_enrollment_stats(
        &self,
        courses: &CourseService,
        course_id: u32,
    ) -> Result<CourseEnrollmentStats> {
        let course = courses.find_course_by_id(course_id)?;
        let enrollments = self.repository.find_by_course_id(course_id);

        let mut stats = CourseEnrollmentStats {
            course: course.name,
            total: enrollments.len(),
            active: 0,
            completed: 0,
        };
        for enrollment in &enrollments {
            match enrollment.status {
                EnrollmentStatus::Active => stats.active += 1,
                EnrollmentStatus::Completed => stats.completed += 1,
                _ => {}
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        ids: IdAllocator,
        students: StudentService,
        courses: CourseService,
        enrollments: EnrollmentService,
        student_id: u32,
        course_id: u32,
    }

    fn fixture() -> Fixture {
        let mut ids = IdAllocator::new();
        let mut students = StudentService::new();
        let mut courses = CourseService::new();
        let student_id = students
            .add_student(&mut ids, "Jane", "Doe", "jane@example.com", "Batch-A")
            .unwrap()
            .id;
        let course_id = courses
            .add_course(&mut ids, "Rust Fundamentals", "Ownership", 8)
            .unwrap()
            .id;
        Fixture {
            ids,
            students,
            courses,
            enrollments: EnrollmentService::new(),
            student_id,
            course_id,
        }
    }

    impl Fixture {
        fn enroll(&mut self) -> Result<Enrollment> {
            self.enrollments.enroll_student(
                &mut self.ids,
                &self.students,
                &self.courses,
                self.student_id,
                self.course_id,
            )
        }
    }

    #[test]
    fn test_enroll_creates_active_enrollment() {
        let mut fx = fixture();
        let enrollment = fx.enroll().unwrap();
        assert_eq!(enrollment.status, EnrollmentStatus::Active);
        assert_eq!(enrollment.student_id, fx.student_id);
        assert_eq!(enrollment.course_id, fx.course_id);
        assert_eq!(fx.enrollments.get_active_enrollment_count(), 1);
    }

    #[test]
    fn test_duplicate_active_enrollment_rejected() {
        let mut fx = fixture();
        fx.enroll().unwrap();
        let err = fx.enroll().unwrap_err();
        assert!(matches!(err, LearnTrackError::InvalidInput(_)));
        assert_eq!(fx.enrollments.get_total_enrollment_count(), 1);
    }

    #[test]
    fn test_reenroll_allowed_after_cancellation() {
        let mut fx = fixture();
        let first = fx.enroll().unwrap();
        fx.enrollments.cancel_enrollment(first.id).unwrap();

        let second = fx.enroll().unwrap();
        assert!(second.id > first.id);
        assert_eq!(fx.enrollments.get_total_enrollment_count(), 2);
        assert_eq!(fx.enrollments.get_active_enrollment_count(), 1);
    }

    #[test]
    fn test_inactive_student_cannot_enroll() {
        let mut fx = fixture();
        fx.students.deactivate_student(fx.student_id).unwrap();
        assert!(matches!(fx.enroll(), Err(LearnTrackError::InvalidInput(_))));
    }

    #[test]
    fn test_inactive_course_cannot_be_enrolled_in() {
        let mut fx = fixture();
        fx.courses.toggle_course_status(fx.course_id).unwrap();
        assert!(matches!(fx.enroll(), Err(LearnTrackError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_parent_is_not_found() {
        let mut fx = fixture();
        let missing_student = fx.enrollments.enroll_student(
            &mut fx.ids,
            &fx.students,
            &fx.courses,
            9999,
            fx.course_id,
        );
        assert!(matches!(missing_student, Err(LearnTrackError::NotFound(_))));

        let missing_course = fx.enrollments.enroll_student(
            &mut fx.ids,
            &fx.students,
            &fx.courses,
            fx.student_id,
            9999,
        );
        assert!(matches!(missing_course, Err(LearnTrackError::NotFound(_))));
    }

    #[test]
    fn test_status_update_validates_token() {
        let mut fx = fixture();
        let enrollment = fx.enroll().unwrap();

        let updated = fx
            .enrollments
            .update_enrollment_status(enrollment.id, "DROPPED")
            .unwrap();
        assert_eq!(updated.status, EnrollmentStatus::Dropped);

        assert!(matches!(
            fx.enrollments.update_enrollment_status(enrollment.id, "PAUSED"),
            Err(LearnTrackError::InvalidInput(_))
        ));
        assert!(matches!(
            fx.enrollments.update_enrollment_status(9999, "ACTIVE"),
            Err(LearnTrackError::NotFound(_))
        ));
    }

    #[test]
    fn test_transitions_are_unrestricted() {
        let mut fx = fixture();
        let enrollment = fx.enroll().unwrap();
        fx.enrollments.complete_enrollment(enrollment.id).unwrap();
        // No terminal-state enforcement on the generic path.
        let reopened = fx
            .enrollments
            .update_enrollment_status(enrollment.id, "ACTIVE")
            .unwrap();
        assert_eq!(reopened.status, EnrollmentStatus::Active);
    }

    #[test]
    fn test_listings_validate_parent_existence() {
        let fx = fixture();
        assert!(fx
            .enrollments
            .get_enrollments_by_student(&fx.students, 9999)
            .is_err());
        assert!(fx
            .enrollments
            .get_enrollments_by_course(&fx.courses, 9999)
            .is_err());
        assert_eq!(
            fx.enrollments
                .get_enrollments_by_student(&fx.students, fx.student_id)
                .unwrap()
                .len(),
            0
        );
    }

    #[test]
    fn test_parent_deletion_leaves_history() {
        let mut fx = fixture();
        let enrollment = fx.enroll().unwrap();
        assert!(fx.students.delete_student(fx.student_id));
        // No cascade: the record survives, lookups by parent now fail NotFound.
        assert!(fx.enrollments.repository.exists(enrollment.id));
        assert!(fx
            .enrollments
            .get_enrollments_by_student(&fx.students, fx.student_id)
            .is_err());
    }

    #[test]
    fn test_student_stats_tally_per_status() {
        let mut fx = fixture();
        let second_course = fx
            .courses
            .add_course(&mut fx.ids, "Advanced Rust", "", 12)
            .unwrap()
            .id;
        let first = fx.enroll().unwrap();
        fx.enrollments
            .enroll_student(
                &mut fx.ids,
                &fx.students,
                &fx.courses,
                fx.student_id,
                second_course,
            )
            .unwrap();
        fx.enrollments.complete_enrollment(first.id).unwrap();

        let stats = fx
            .enrollments
            .get_student_enrollment_stats(&fx.students, fx.student_id)
            .unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 0);
        assert!(stats.to_string().contains("Total Enrollments: 2"));
    }

    #[test]
    fn test_course_stats_tally_per_status() {
        let mut fx = fixture();
        fx.enroll().unwrap();
        let stats = fx
            .enrollments
            .get_course_enrollment_stats(&fx.courses, fx.course_id)
            .unwrap();
        assert_eq!(stats.course, "Rust Fundamentals");
        assert_eq!(stats.total, 1);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 0);
    }
}
