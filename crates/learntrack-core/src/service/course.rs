//! Course business logic.

use crate::domain::Course;
use crate::error::{LearnTrackError, Result};
use crate::ids::IdAllocator;
use crate::repository::CourseRepository;
use crate::validate;

/// Validates course input and coordinates with [`CourseRepository`].
#[derive(Debug, Default)]
pub struct CourseService {
    repository: CourseRepository,
}

impl CourseService {
    /// Create a service over an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new course.
    ///
    /// The name must be 2-50 characters and the duration 1-52 weeks. The
    /// description is unchecked free text.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::InvalidInput` naming the violated rule.
    pub fn add_course(
        &mut self,
        ids: &mut IdAllocator,
        name: &str,
        description: &str,
        duration_weeks: u32,
    ) -> Result<Course> {
        if !validate::is_valid_name(name) {
            return Err(LearnTrackError::InvalidInput(
                "Course name must be between 2-50 characters".into(),
            ));
        }
        if !validate::is_valid_duration(duration_weeks) {
            return Err(LearnTrackError::InvalidInput(
                "Duration must be between 1 and 52 weeks".into(),
            ));
        }

        let id = ids.next_course_id();
        let course = Course::new(id, name, description, duration_weeks);
        self.repository.save(course.clone());
        Ok(course)
    }

    /// Find a course by id.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no course has the id.
    pub fn find_course_by_id(&self, id: u32) -> Result<Course> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| LearnTrackError::not_found("Course", id))
    }

    /// All courses in the system.
    pub fn get_all_courses(&self) -> Vec<Course> {
        self.repository.find_all()
    }

    /// All active courses.
    pub fn get_active_courses(&self) -> Vec<Course> {
        self.repository.find_all_active()
    }

    /// Courses whose name contains the given term, case-insensitive.
    pub fn get_courses_by_name(&self, name: &str) -> Vec<Course> {
        self.repository.find_by_name(name)
    }

    /// Courses with exactly the given duration.
    pub fn get_courses_by_duration(&self, weeks: u32) -> Vec<Course> {
        self.repository.find_by_duration(weeks)
    }

    /// Update course fields.
    ///
    /// `None` (or an empty string for text fields) leaves the existing value
    /// untouched. All supplied fields are validated before any is applied.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no course has the id, or
    /// `LearnTrackError::InvalidInput` if any supplied field fails validation.
    pub fn update_course(
        &mut self,
        id: u32,
        name: Option<&str>,
        description: Option<&str>,
        duration_weeks: Option<u32>,
    ) -> Result<Course> {
        let mut course = self.find_course_by_id(id)?;

        let name = name.filter(|s| !s.is_empty());
        let description = description.filter(|s| !s.is_empty());

        if let Some(name) = name {
            if !validate::is_valid_name(name) {
                return Err(LearnTrackError::InvalidInput(
                    "Course name must be between 2-50 characters".into(),
                ));
            }
        }
        if let Some(weeks) = duration_weeks {
            if !validate::is_valid_duration(weeks) {
                return Err(LearnTrackError::InvalidInput(
                    "Duration must be between 1 and 52 weeks".into(),
                ));
            }
        }

        if let Some(name) = name {
            course.name = name.to_string();
        }
        if let Some(description) = description {
            course.description = description.to_string();
        }
        if let Some(weeks) = duration_weeks {
            course.duration_weeks = weeks;
        }

        self.repository.update(course.clone());
        Ok(course)
    }

    /// Flip the course's active flag. Returns the updated course.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no course has the id.
    pub fn toggle_course_status(&mut self, id: u32) -> Result<Course> {
        let mut course = self.find_course_by_id(id)?;
        course.active = !course.active;
        self.repository.update(course.clone());
        Ok(course)
    }

    /// Permanently delete a course. Returns whether anything was removed.
    ///
    /// Existing enrollments referencing the course are left in place.
    pub fn delete_course(&mut self, id: u32) -> bool {
        self.repository.delete(id)
    }

    /// Total course count.
    pub fn get_total_course_count(&self) -> usize {
        self.repository.count()
    }

    /// Active course count.
    pub fn get_active_course_count(&self) -> usize {
        self.repository.count_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_course_validates_name_and_duration() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        assert!(service.add_course(&mut ids, "R", "", 8).is_err());
        assert!(service.add_course(&mut ids, "Rust", "", 0).is_err());
        assert!(service.add_course(&mut ids, "Rust", "", 53).is_err());

        let course = service.add_course(&mut ids, "Rust", "Systems programming", 8).unwrap();
        assert_eq!(course.id, 2001);
        assert!(course.active);
    }

    #[test]
    fn test_update_changes_only_supplied_fields() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        let course = service.add_course(&mut ids, "Rust", "Systems programming", 8).unwrap();

        let updated = service
            .update_course(course.id, Some("New Name"), None, None)
            .unwrap();
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.description, "Systems programming");
        assert_eq!(updated.duration_weeks, 8);
        assert_eq!(service.find_course_by_id(course.id).unwrap(), updated);
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        let course = service.add_course(&mut ids, "Rust", "desc", 8).unwrap();

        let err = service
            .update_course(course.id, Some("New Name"), None, Some(99))
            .unwrap_err();
        assert!(matches!(err, LearnTrackError::InvalidInput(_)));
        let stored = service.find_course_by_id(course.id).unwrap();
        assert_eq!(stored.name, "Rust");
        assert_eq!(stored.duration_weeks, 8);
    }

    #[test]
    fn test_toggle_flips_active_flag() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        let course = service.add_course(&mut ids, "Rust", "", 8).unwrap();

        assert!(!service.toggle_course_status(course.id).unwrap().active);
        assert_eq!(service.get_active_course_count(), 0);
        assert!(service.toggle_course_status(course.id).unwrap().active);
        assert_eq!(service.get_active_course_count(), 1);
    }

    #[test]
    fn test_delete_and_counts() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        let course = service.add_course(&mut ids, "Rust", "", 8).unwrap();
        assert_eq!(service.get_total_course_count(), 1);
        assert!(service.delete_course(course.id));
        assert!(!service.delete_course(course.id));
        assert_eq!(service.get_total_course_count(), 0);
    }

    #[test]
    fn test_search_filters() {
        let mut ids = IdAllocator::new();
        let mut service = CourseService::new();
        service.add_course(&mut ids, "Rust Fundamentals", "", 8).unwrap();
        service.add_course(&mut ids, "Advanced Rust", "", 12).unwrap();
        assert_eq!(service.get_courses_by_name("rust").len(), 2);
        assert_eq!(service.get_courses_by_duration(12).len(), 1);
    }
}
