//! Course storage.

use crate::domain::Course;

/// In-memory store for [`Course`] records, insertion order preserved.
#[derive(Debug, Default)]
pub struct CourseRepository {
    courses: Vec<Course>,
}

impl CourseRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new course. The caller guarantees the id was freshly minted.
    pub fn save(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Find a course by id. Returns a clone, never a reference into storage.
    pub fn find_by_id(&self, id: u32) -> Option<Course> {
        self.courses.iter().find(|c| c.id == id).cloned()
    }

    /// All courses, in insertion order.
    pub fn find_all(&self) -> Vec<Course> {
        self.courses.clone()
    }

    /// All courses with the active flag set.
    pub fn find_all_active(&self) -> Vec<Course> {
        self.courses.iter().filter(|c| c.active).cloned().collect()
    }

    /// Courses whose name contains the given term, case-insensitive.
    pub fn find_by_name(&self, name: &str) -> Vec<Course> {
        let term = name.to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Courses with exactly the given duration.
    pub fn find_by_duration(&self, weeks: u32) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| c.duration_weeks == weeks)
            .cloned()
            .collect()
    }

    /// Replace the stored record with the same id wholesale. No-op if absent.
    pub fn update(&mut self, course: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course;
        }
    }

    /// Remove the course with the given id. Returns whether a match existed.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.courses.iter().position(|c| c.id == id) {
            Some(index) => {
                self.courses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total number of courses.
    pub fn count(&self) -> usize {
        self.courses.len()
    }

    /// Number of courses with the active flag set.
    pub fn count_active(&self) -> usize {
        self.courses.iter().filter(|c| c.active).count()
    }

    /// Whether a course with the given id exists.
    pub fn exists(&self, id: u32) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_search_is_case_insensitive_substring() {
        let mut repo = CourseRepository::new();
        repo.save(Course::new(2001, "Rust Fundamentals", "", 8));
        repo.save(Course::new(2002, "Advanced Rust", "", 12));
        repo.save(Course::new(2003, "Databases", "", 6));

        assert_eq!(repo.find_by_name("rust").len(), 2);
        assert_eq!(repo.find_by_name("FUNDAMENTALS").len(), 1);
        assert!(repo.find_by_name("haskell").is_empty());
    }

    #[test]
    fn test_duration_filter_is_exact() {
        let mut repo = CourseRepository::new();
        repo.save(Course::new(2001, "A", "", 8));
        repo.save(Course::new(2002, "B", "", 8));
        repo.save(Course::new(2003, "C", "", 12));

        assert_eq!(repo.find_by_duration(8).len(), 2);
        assert!(repo.find_by_duration(9).is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let mut repo = CourseRepository::new();
        repo.save(Course::new(2001, "A", "desc", 8));
        let mut changed = repo.find_by_id(2001).unwrap();
        changed.duration_weeks = 10;
        repo.update(changed);
        assert_eq!(repo.find_by_id(2001).unwrap().duration_weeks, 10);

        assert!(repo.delete(2001));
        assert!(!repo.exists(2001));
        assert!(!repo.delete(2001));
    }

    #[test]
    fn test_active_counts() {
        let mut repo = CourseRepository::new();
        repo.save(Course::new(2001, "A", "", 8));
        let mut inactive = Course::new(2002, "B", "", 8);
        inactive.active = false;
        repo.save(inactive);

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.count_active(), 1);
        assert_eq!(repo.find_all_active().len(), 1);
    }
}
