//! Registrar error types
//!
//! Every variant here is an expected outcome of a request, not a fault.
//! Callers match on them to decide what to tell the user.

use thiserror::Error;

/// Rejections reported by the registrar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    /// Either the student id or the course code is unknown
    #[error("Student or course not found")]
    StudentOrCourseNotFound,

    /// The student id is unknown
    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },

    /// The student already holds this course
    #[error("Student {student_id} is already enrolled in course {course_code}")]
    AlreadyEnrolled {
        student_id: String,
        course_code: String,
    },

    /// The course overlaps one the student already holds
    #[error("Course {course_code} conflicts with enrolled course {conflicting_code}")]
    ScheduleConflict {
        course_code: String,
        conflicting_code: String,
    },

    /// The course has reached its maximum enrollment
    #[error("Course {course_code} is full ({max_enrollment} seats)")]
    CourseFull {
        course_code: String,
        max_enrollment: u32,
    },

    /// The student has never enrolled in anything
    #[error("Student {student_id} has no enrollment record")]
    NoEnrollmentRecord { student_id: String },

    /// The student's record does not contain this course
    #[error("Student {student_id} is not enrolled in course {course_code}")]
    NotEnrolledInCourse {
        student_id: String,
        course_code: String,
    },

    /// The student exists but holds no courses
    #[error("Student {student_id} is not enrolled in any courses")]
    NoCourses { student_id: String },

    /// A course was declared with zero seats
    #[error("Course {course_code} must allow at least one student")]
    InvalidCapacity { course_code: String },
}

impl RegistrarError {
    /// Stable machine-readable tag for this outcome
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrarError::StudentOrCourseNotFound => "student_or_course_not_found",
            RegistrarError::StudentNotFound { .. } => "student_not_found",
            RegistrarError::AlreadyEnrolled { .. } => "already_enrolled",
            RegistrarError::ScheduleConflict { .. } => "schedule_conflict",
            RegistrarError::CourseFull { .. } => "course_full",
            RegistrarError::NoEnrollmentRecord { .. } => "no_enrollment_record",
            RegistrarError::NotEnrolledInCourse { .. } => "not_enrolled_in_course",
            RegistrarError::NoCourses { .. } => "no_courses",
            RegistrarError::InvalidCapacity { .. } => "invalid_capacity",
        }
    }
}

/// Why a schedule descriptor could not be read
///
/// These never reach a caller of the registrar: the conflict check treats
/// an unreadable schedule as "no conflict".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    /// The descriptor did not split into day, clock time and meridiem
    #[error("Malformed schedule '{descriptor}': expected 3 tokens, found {tokens}")]
    Malformed { descriptor: String, tokens: usize },

    /// The clock time and meridiem did not form a 12-hour time
    #[error("Invalid time '{time}' in schedule")]
    InvalidTime { time: String },
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
