use indexmap::IndexMap;

use crate::model::Student;

/// Registered students keyed by id, in registration order
#[derive(Debug, Default)]
pub struct StudentRegistry {
    students: IndexMap<String, Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student, keeping any earlier record for the same id
    ///
    /// Returns `true` if the student was not known before.
    pub fn register(&mut self, student: Student) -> bool {
        if self.students.contains_key(&student.id) {
            return false;
        }
        self.students.insert(student.id.clone(), student);
        true
    }

    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn contains(&self, student_id: &str) -> bool {
        self.students.contains_key(student_id)
    }

    /// Students in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
