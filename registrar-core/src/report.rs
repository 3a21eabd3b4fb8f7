//! Read-only views produced by the registrar reports

use serde::Serialize;

/// One line of a student's schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub course_code: String,
    pub course_name: String,
    pub schedule: String,
}

/// A student on a course roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterMember {
    pub student_id: String,
    pub student_name: String,
}

/// The full roster of a course, reached through one of its students
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRoster {
    pub course_code: String,
    pub course_name: String,
    /// Student whose enrollment list produced this roster
    pub via_student: String,
    pub students: Vec<RosterMember>,
}

impl CourseRoster {
    pub fn contains(&self, student_id: &str) -> bool {
        self.students.iter().any(|m| m.student_id == student_id)
    }
}
