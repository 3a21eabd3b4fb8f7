//! The registrar facade
//!
//! Owns the catalog, the student registry and the enrollment ledger, and is
//! the only place where a course's student list and a student's course list
//! are changed. Each enroll or drop updates both or neither.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{RegistrarError, Result};
use crate::ledger::Ledger;
use crate::model::{Course, Student};
use crate::registry::StudentRegistry;
use crate::report::{CourseRoster, RosterMember, ScheduleEntry};
use crate::schedule::courses_conflict;

/// Result of registering a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Registration {
    Created,
    /// The id was taken; the earlier record is kept
    AlreadyRegistered,
}

/// Result of adding a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseInsert {
    Inserted,
    /// The code was taken; the earlier course is kept
    Duplicate,
}

/// A completed enroll or drop, with display names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentChange {
    pub student_id: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
}

impl EnrollmentChange {
    fn new(student: &Student, course: &Course) -> Self {
        Self {
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            course_code: course.code().to_string(),
            course_name: course.name().to_string(),
        }
    }
}

/// Course catalog and enrollment manager
#[derive(Debug, Default)]
pub struct Registrar {
    catalog: Catalog,
    students: StudentRegistry,
    ledger: Ledger,
}

impl Registrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a student
    pub fn add_student(&mut self, student_id: &str, name: &str) -> Registration {
        if self.students.register(Student::new(student_id, name)) {
            info!(student_id, "Registered student");
            Registration::Created
        } else {
            debug!(student_id, "Student id already registered, keeping existing record");
            Registration::AlreadyRegistered
        }
    }

    /// Add a course to the catalog
    ///
    /// `max_enrollment` must be at least 1. A code already in the catalog
    /// leaves the existing course untouched.
    pub fn add_course(
        &mut self,
        course_code: &str,
        name: &str,
        schedule: &str,
        max_enrollment: u32,
    ) -> Result<CourseInsert> {
        if max_enrollment == 0 {
            return Err(RegistrarError::InvalidCapacity {
                course_code: course_code.to_string(),
            });
        }

        let course = Course::new(course_code, name, schedule, max_enrollment);
        if self.catalog.insert(course) {
            Ok(CourseInsert::Inserted)
        } else {
            Ok(CourseInsert::Duplicate)
        }
    }

    /// Enroll a student in a course
    ///
    /// Checks run in order and stop at the first failure: both parties
    /// exist, the student does not already hold the course, no held course
    /// meets at an overlapping time, and a seat is free.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        let change = self.check_enrollment(student_id, course_code).map_err(|err| {
            debug!(student_id, course_code, reason = err.kind(), "Enrollment rejected");
            err
        })?;

        let course = self
            .catalog
            .search_mut(course_code)
            .ok_or(RegistrarError::StudentOrCourseNotFound)?;
        course.push_student(student_id.to_string());
        self.ledger
            .open_record(student_id)
            .push(course_code.to_string());

        info!(student_id, course_code, "Enrolled student");
        Ok(change)
    }

    fn check_enrollment(&mut self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        let (Some(student), Some(course)) = (
            self.students.get(student_id),
            self.catalog.search(course_code),
        ) else {
            return Err(RegistrarError::StudentOrCourseNotFound);
        };

        let held = self.ledger.open_record(student_id);

        if held.iter().any(|code| code == course_code) {
            return Err(RegistrarError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let conflicting = held.iter().find(|code| {
            self.catalog
                .search(code)
                .is_some_and(|other| courses_conflict(course, other))
        });
        if let Some(conflicting) = conflicting {
            return Err(RegistrarError::ScheduleConflict {
                course_code: course_code.to_string(),
                conflicting_code: conflicting.clone(),
            });
        }

        if course.is_full() {
            return Err(RegistrarError::CourseFull {
                course_code: course_code.to_string(),
                max_enrollment: course.max_enrollment(),
            });
        }

        Ok(EnrollmentChange::new(student, course))
    }

    /// Drop a student from a course
    pub fn drop_course(&mut self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        let result = self.withdraw(student_id, course_code);
        match &result {
            Ok(_) => info!(student_id, course_code, "Dropped student from course"),
            Err(err) => debug!(student_id, course_code, reason = err.kind(), "Drop rejected"),
        }
        result
    }

    fn withdraw(&mut self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        let (Some(student), Some(course)) = (
            self.students.get(student_id),
            self.catalog.search_mut(course_code),
        ) else {
            return Err(RegistrarError::StudentOrCourseNotFound);
        };

        let record = self.ledger.record_mut(student_id).ok_or_else(|| {
            RegistrarError::NoEnrollmentRecord {
                student_id: student_id.to_string(),
            }
        })?;

        let position = record
            .iter()
            .position(|code| code == course_code)
            .ok_or_else(|| RegistrarError::NotEnrolledInCourse {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            })?;

        if !course.remove_student(student_id) {
            warn!(
                student_id,
                course_code,
                "Ledger lists a course whose roster lacks the student"
            );
            return Err(RegistrarError::NotEnrolledInCourse {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }
        record.remove(position);

        Ok(EnrollmentChange::new(student, course))
    }

    /// A student's courses in enrollment order
    pub fn student_schedule(&self, student_id: &str) -> Result<Vec<ScheduleEntry>> {
        if !self.students.contains(student_id) {
            return Err(RegistrarError::StudentNotFound {
                student_id: student_id.to_string(),
            });
        }

        let codes = self.ledger.courses(student_id).unwrap_or_default();
        if codes.is_empty() {
            return Err(RegistrarError::NoCourses {
                student_id: student_id.to_string(),
            });
        }

        Ok(codes
            .iter()
            .filter_map(|code| self.catalog.search(code))
            .map(|course| ScheduleEntry {
                course_code: course.code().to_string(),
                course_name: course.name().to_string(),
                schedule: course.schedule().to_string(),
            })
            .collect())
    }

    /// Rosters for every course held by every registered student
    ///
    /// Walks students in registration order. A course appears once for each
    /// student holding it; courses nobody holds do not appear.
    pub fn course_rosters(&self) -> Vec<CourseRoster> {
        let mut rosters = Vec::new();

        for student in self.students.iter() {
            let Some(codes) = self.ledger.courses(&student.id) else {
                continue;
            };

            for course in codes.iter().filter_map(|code| self.catalog.search(code)) {
                let students = course
                    .enrolled_students()
                    .iter()
                    .filter_map(|id| self.students.get(id))
                    .map(|member| RosterMember {
                        student_id: member.id.clone(),
                        student_name: member.name.clone(),
                    })
                    .collect();

                rosters.push(CourseRoster {
                    course_code: course.code().to_string(),
                    course_name: course.name().to_string(),
                    via_student: student.id.clone(),
                    students,
                });
            }
        }

        rosters
    }

    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    pub fn course(&self, course_code: &str) -> Option<&Course> {
        self.catalog.search(course_code)
    }

    /// Course codes the student currently holds; empty if none
    pub fn enrolled_courses(&self, student_id: &str) -> &[String] {
        self.ledger.courses(student_id).unwrap_or_default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn students(&self) -> &StudentRegistry {
        &self.students
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
