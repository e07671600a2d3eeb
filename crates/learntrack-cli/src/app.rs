//! Application context for the LearnTrack shell.
//!
//! Bundles the id allocator, the three services, and the UI context behind one
//! struct so handler functions take a single parameter. The allocator lives
//! here and is lent to service calls that mint ids; the enrollment wrappers
//! route the multi-service borrows in one place.

use learntrack_core::service::{CourseEnrollmentStats, StudentEnrollmentStats};
use learntrack_core::{
    Course, CourseService, Enrollment, EnrollmentService, IdAllocator, Result, Student,
    StudentService,
};

use crate::ui::UiContext;

/// Application context owning all in-memory state for one session.
pub struct AppContext {
    ids: IdAllocator,
    pub students: StudentService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
    pub ui: UiContext,
    pub quiet: bool,
}

impl AppContext {
    /// Create a fresh context with empty repositories.
    pub fn new(ui: UiContext, quiet: bool) -> Self {
        Self {
            ids: IdAllocator::new(),
            students: StudentService::new(),
            courses: CourseService::new(),
            enrollments: EnrollmentService::new(),
            ui,
            quiet,
        }
    }

    /// Add a student, minting its id from the context's allocator.
    pub fn add_student(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        batch: &str,
    ) -> Result<Student> {
        self.students
            .add_student(&mut self.ids, first_name, last_name, email, batch)
    }

    /// Add a course, minting its id from the context's allocator.
    pub fn add_course(&mut self, name: &str, description: &str, weeks: u32) -> Result<Course> {
        self.courses.add_course(&mut self.ids, name, description, weeks)
    }

    /// Enroll a student in a course, checking cross-entity state.
    pub fn enroll(&mut self, student_id: u32, course_id: u32) -> Result<Enrollment> {
        self.enrollments.enroll_student(
            &mut self.ids,
            &self.students,
            &self.courses,
            student_id,
            course_id,
        )
    }

    /// All enrollments for a student (student must exist).
    pub fn enrollments_by_student(&self, student_id: u32) -> Result<Vec<Enrollment>> {
        self.enrollments
            .get_enrollments_by_student(&self.students, student_id)
    }

    /// ACTIVE enrollments for a student (student must exist).
    pub fn active_enrollments_by_student(&self, student_id: u32) -> Result<Vec<Enrollment>> {
        self.enrollments
            .get_active_enrollments_by_student(&self.students, student_id)
    }

    /// All enrollments for a course (course must exist).
    pub fn enrollments_by_course(&self, course_id: u32) -> Result<Vec<Enrollment>> {
        self.enrollments
            .get_enrollments_by_course(&self.courses, course_id)
    }

    /// Per-status tallies for a student.
    pub fn student_stats(&self, student_id: u32) -> Result<StudentEnrollmentStats> {
        self.enrollments
            .get_student_enrollment_stats(&self.students, student_id)
    }

    /// Per-status tallies for a course.
    pub fn course_stats(&self, course_id: u32) -> Result<CourseEnrollmentStats> {
        self.enrollments
            .get_course_enrollment_stats(&self.courses, course_id)
    }

    /// Load the bundled sample students and courses.
    ///
    /// Sample input is known-valid; a failure here is a programming error in
    /// the samples themselves, so it propagates.
    pub fn load_sample_data(&mut self) -> Result<()> {
        self.add_student("John", "Doe", "john.doe@example.com", "Batch-2024-A")?;
        self.add_student("Jane", "Smith", "jane.smith@example.com", "Batch-2024-A")?;
        self.add_student("Robert", "Johnson", "robert.j@example.com", "Batch-2024-B")?;

        self.add_course("Java Fundamentals", "Core Java Programming Concepts", 8)?;
        self.add_course("Spring Boot", "Backend Development with Spring", 12)?;
        self.add_course("React Basics", "Frontend Development with React", 10)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;

    fn context() -> AppContext {
        let ui = UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        };
        AppContext::new(ui, true)
    }

    #[test]
    fn test_sample_data_loads_three_of_each() {
        let mut ctx = context();
        ctx.load_sample_data().unwrap();
        assert_eq!(ctx.students.get_total_student_count(), 3);
        assert_eq!(ctx.courses.get_total_course_count(), 3);
        assert_eq!(ctx.enrollments.get_total_enrollment_count(), 0);
    }

    #[test]
    fn test_enroll_wrapper_routes_through_services() {
        let mut ctx = context();
        ctx.load_sample_data().unwrap();
        let enrollment = ctx.enroll(1001, 2001).unwrap();
        assert_eq!(ctx.enrollments_by_student(1001).unwrap().len(), 1);
        assert_eq!(ctx.enrollments_by_course(2001).unwrap().len(), 1);
        assert_eq!(ctx.active_enrollments_by_student(1001).unwrap()[0], enrollment);
    }

    #[test]
    fn test_stats_wrappers() {
        let mut ctx = context();
        ctx.load_sample_data().unwrap();
        ctx.enroll(1001, 2001).unwrap();
        assert_eq!(ctx.student_stats(1001).unwrap().active, 1);
        assert_eq!(ctx.course_stats(2001).unwrap().total, 1);
    }
}
