use serde::{Deserialize, Serialize};

/// A registered student. Never changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier
    pub id: String,
    /// Display name
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A course offered in the catalog
///
/// The course code is the only key the catalog orders by. The enrolled
/// student list keeps insertion order and is only touched by the registrar,
/// in lock-step with the student's own enrollment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    code: String,
    name: String,
    schedule: String,
    max_enrollment: u32,
    enrolled: Vec<String>,
}

impl Course {
    /// Create a course with no enrolled students
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        schedule: impl Into<String>,
        max_enrollment: u32,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            schedule: schedule.into(),
            max_enrollment,
            enrolled: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw schedule descriptor, e.g. "Monday 9:00 AM"
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_enrollment(&self) -> u32 {
        self.max_enrollment
    }

    /// Enrolled student ids in enrollment order
    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled
    }

    pub fn enrolled_count(&self) -> usize {
        self.enrolled.len()
    }

    pub fn is_full(&self) -> bool {
        self.enrolled.len() >= self.max_enrollment as usize
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == student_id)
    }

    pub(crate) fn push_student(&mut self, student_id: String) {
        self.enrolled.push(student_id);
    }

    /// Remove a student, returning whether they were present
    pub(crate) fn remove_student(&mut self, student_id: &str) -> bool {
        match self.enrolled.iter().position(|id| id == student_id) {
            Some(index) => {
                self.enrolled.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_course_capacity_tracking() {
        let mut course = Course::new("CS101", "Intro", "Monday 9:00 AM", 2);
        assert!(!course.is_full());

        course.push_student("S1".to_string());
        course.push_student("S2".to_string());
        assert!(course.is_full());
        assert_eq!(course.enrolled_students(), &["S1", "S2"]);

        assert!(course.remove_student("S1"));
        assert!(!course.remove_student("S1"));
        assert_eq!(course.enrolled_count(), 1);
        assert!(course.has_student("S2"));
    }
}
