//! Student business logic.

use crate::domain::Student;
use crate::error::{LearnTrackError, Result};
use crate::ids::IdAllocator;
use crate::repository::StudentRepository;
use crate::validate;

/// Validates student input and coordinates with [`StudentRepository`].
#[derive(Debug, Default)]
pub struct StudentService {
    repository: StudentRepository,
}

impl StudentService {
    /// Create a service over an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new student.
    ///
    /// First and last name must be 2-50 characters. The email is optional:
    /// empty means none, anything else must match the email shape. The batch
    /// label is unchecked free text.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::InvalidInput` naming the violated rule.
    pub fn add_student(
        &mut self,
        ids: &mut IdAllocator,
        first_name: &str,
        last_name: &str,
        email: &str,
        batch: &str,
    ) -> Result<Student> {
        if !validate::is_valid_name(first_name) {
            return Err(LearnTrackError::InvalidInput(
                "First name must be between 2-50 characters".into(),
            ));
        }
        if !validate::is_valid_name(last_name) {
            return Err(LearnTrackError::InvalidInput(
                "Last name must be between 2-50 characters".into(),
            ));
        }
        if !email.is_empty() && !validate::is_valid_email(email) {
            return Err(LearnTrackError::InvalidInput("Invalid email format".into()));
        }

        let id = ids.next_student_id();
        let student = Student::new(id, first_name, last_name, email, batch);
        self.repository.save(student.clone());
        Ok(student)
    }

    /// Find a student by id.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no student has the id.
    pub fn find_student_by_id(&self, id: u32) -> Result<Student> {
        self.repository
            .find_by_id(id)
            .ok_or_else(|| LearnTrackError::not_found("Student", id))
    }

    /// All students in the system.
    pub fn get_all_students(&self) -> Vec<Student> {
        self.repository.find_all()
    }

    /// All active students.
    pub fn get_active_students(&self) -> Vec<Student> {
        self.repository.find_all_active()
    }

    /// Students in the given batch.
    pub fn get_students_by_batch(&self, batch: &str) -> Vec<Student> {
        self.repository.find_by_batch(batch)
    }

    /// Update student fields.
    ///
    /// `None` or an empty string leaves the existing value untouched. All
    /// supplied fields are validated before any is applied, so a rejected
    /// update changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no student has the id, or
    /// `LearnTrackError::InvalidInput` if any supplied field fails validation.
    pub fn update_student(
        &mut self,
        id: u32,
        first_name: Option<&str>,
        last_name: Option<&str>,
        email: Option<&str>,
        batch: Option<&str>,
    ) -> Result<Student> {
        let mut student = self.find_student_by_id(id)?;

        let first_name = first_name.filter(|s| !s.is_empty());
        let last_name = last_name.filter(|s| !s.is_empty());
        let email = email.filter(|s| !s.is_empty());
        let batch = batch.filter(|s| !s.is_empty());

        // Validate everything up front; a failure must not apply any field.
        if let Some(name) = first_name {
            if !validate::is_valid_name(name) {
                return Err(LearnTrackError::InvalidInput(
                    "First name must be between 2-50 characters".into(),
                ));
            }
        }
        if let Some(name) = last_name {
            if !validate::is_valid_name(name) {
                return Err(LearnTrackError::InvalidInput(
                    "Last name must be between 2-50 characters".into(),
                ));
            }
        }
        if let Some(email) = email {
            if !validate::is_valid_email(email) {
                return Err(LearnTrackError::InvalidInput("Invalid email format".into()));
            }
        }

        if let Some(name) = first_name {
            student.first_name = name.to_string();
        }
        if let Some(name) = last_name {
            student.last_name = name.to_string();
        }
        if let Some(email) = email {
            student.email = email.to_string();
        }
        if let Some(batch) = batch {
            student.batch = batch.to_string();
        }

        self.repository.update(student.clone());
        Ok(student)
    }

    /// Deactivate a student (soft delete).
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no student has the id.
    pub fn deactivate_student(&mut self, id: u32) -> Result<()> {
        let mut student = self.find_student_by_id(id)?;
        student.active = false;
        self.repository.update(student);
        Ok(())
    }

    /// Reactivate a previously deactivated student.
    ///
    /// # Errors
    ///
    /// Returns `LearnTrackError::NotFound` if no student has the id.
    pub fn activate_student(&mut self, id: u32) -> Result<()> {
        let mut student = self.find_student_by_id(id)?;
        student.active = true;
        self.repository.update(student);
        Ok(())
    }

    /// Permanently delete a student. Returns whether anything was removed.
    ///
    /// Existing enrollments referencing the student are left in place.
    pub fn delete_student(&mut self, id: u32) -> bool {
        self.repository.delete(id)
    }

    /// Total student count.
    pub fn get_total_student_count(&self) -> usize {
        self.repository.count()
    }

    /// Active student count.
    pub fn get_active_student_count(&self) -> usize {
        self.repository.count_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_one(ids: &mut IdAllocator) -> (StudentService, Student) {
        let mut service = StudentService::new();
        let student = service
            .add_student(ids, "Jane", "Doe", "jane.doe@example.com", "Batch-2024-A")
            .unwrap();
        (service, student)
    }

    #[test]
    fn test_add_student_mints_increasing_ids() {
        let mut ids = IdAllocator::new();
        let mut service = StudentService::new();
        let first = service.add_student(&mut ids, "Jane", "Doe", "", "B").unwrap();
        let second = service.add_student(&mut ids, "John", "Doe", "", "B").unwrap();
        assert!(second.id > first.id);
        assert_eq!(service.find_student_by_id(first.id).unwrap(), first);
    }

    #[test]
    fn test_add_student_rejects_short_first_name() {
        let mut ids = IdAllocator::new();
        let mut service = StudentService::new();
        let err = service.add_student(&mut ids, "A", "Valid", "", "B").unwrap_err();
        assert!(matches!(err, LearnTrackError::InvalidInput(_)));
        assert_eq!(service.get_total_student_count(), 0);
    }

    #[test]
    fn test_add_student_rejects_bad_email_but_allows_empty() {
        let mut ids = IdAllocator::new();
        let mut service = StudentService::new();
        assert!(service
            .add_student(&mut ids, "Jane", "Doe", "not-an-email", "B")
            .is_err());
        assert!(service.add_student(&mut ids, "Jane", "Doe", "", "B").is_ok());
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut ids = IdAllocator::new();
        let (mut service, student) = service_with_one(&mut ids);
        let updated = service
            .update_student(student.id, Some("Janet"), None, Some(""), None)
            .unwrap();
        assert_eq!(updated.first_name, "Janet");
        assert_eq!(updated.last_name, "Doe");
        assert_eq!(updated.email, "jane.doe@example.com");
        assert_eq!(updated.batch, "Batch-2024-A");
        assert_eq!(service.find_student_by_id(student.id).unwrap(), updated);
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut ids = IdAllocator::new();
        let (mut service, student) = service_with_one(&mut ids);
        // Valid first name but invalid email: neither may be applied.
        let err = service
            .update_student(student.id, Some("Janet"), None, Some("broken"), None)
            .unwrap_err();
        assert!(matches!(err, LearnTrackError::InvalidInput(_)));
        let stored = service.find_student_by_id(student.id).unwrap();
        assert_eq!(stored.first_name, "Jane");
        assert_eq!(stored.email, "jane.doe@example.com");
    }

    #[test]
    fn test_update_missing_student_is_not_found() {
        let mut ids = IdAllocator::new();
        let (mut service, _) = service_with_one(&mut ids);
        assert!(matches!(
            service.update_student(9999, Some("Janet"), None, None, None),
            Err(LearnTrackError::NotFound(_))
        ));
    }

    #[test]
    fn test_activate_deactivate_round_trip() {
        let mut ids = IdAllocator::new();
        let (mut service, student) = service_with_one(&mut ids);

        service.deactivate_student(student.id).unwrap();
        assert!(!service.find_student_by_id(student.id).unwrap().active);
        assert_eq!(service.get_active_student_count(), 0);

        service.activate_student(student.id).unwrap();
        assert!(service.find_student_by_id(student.id).unwrap().active);
        assert_eq!(service.get_active_student_count(), 1);
    }

    #[test]
    fn test_delete_student() {
        let mut ids = IdAllocator::new();
        let (mut service, student) = service_with_one(&mut ids);
        assert!(!service.delete_student(9999));
        assert_eq!(service.get_total_student_count(), 1);

        assert!(service.delete_student(student.id));
        assert!(matches!(
            service.find_student_by_id(student.id),
            Err(LearnTrackError::NotFound(_))
        ));
    }

    #[test]
    fn test_batch_filter() {
        let mut ids = IdAllocator::new();
        let mut service = StudentService::new();
        service.add_student(&mut ids, "Jane", "Doe", "", "Batch-A").unwrap();
        service.add_student(&mut ids, "John", "Doe", "", "Batch-B").unwrap();
        assert_eq!(service.get_students_by_batch("Batch-A").len(), 1);
    }
}
