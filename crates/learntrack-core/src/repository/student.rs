//! Student storage.

use crate::domain::Student;

/// In-memory store for [`Student`] records, insertion order preserved.
#[derive(Debug, Default)]
pub struct StudentRepository {
    students: Vec<Student>,
}

impl StudentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new student. The caller guarantees the id was freshly minted.
    pub fn save(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Find a student by id. Returns a clone, never a reference into storage.
    pub fn find_by_id(&self, id: u32) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    /// All students, in insertion order.
    pub fn find_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// All students with the active flag set.
    pub fn find_all_active(&self) -> Vec<Student> {
        self.students.iter().filter(|s| s.active).cloned().collect()
    }

    /// All students with the given batch label (exact match).
    pub fn find_by_batch(&self, batch: &str) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| s.batch == batch)
            .cloned()
            .collect()
    }

    /// Replace the stored record with the same id wholesale. No-op if absent.
    pub fn update(&mut self, student: Student) {
        if let Some(existing) = self.students.iter_mut().find(|s| s.id == student.id) {
            *existing = student;
        }
    }

    /// Remove the student with the given id. Returns whether a match existed.
    pub fn delete(&mut self, id: u32) -> bool {
        match self.students.iter().position(|s| s.id == id) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total number of students.
    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Number of students with the active flag set.
    pub fn count_active(&self) -> usize {
        self.students.iter().filter(|s| s.active).count()
    }

    /// Whether a student with the given id exists.
    pub fn exists(&self, id: u32) -> bool {
        self.students.iter().any(|s| s.id == id)
    }
}
