//! Text rendering of registrar outcomes
//!
//! The core returns structured results; every user-facing sentence lives here.

use registrar_core::report::{CourseRoster, ScheduleEntry};
use registrar_core::{Course, EnrollmentChange, Registrar, RegistrarError};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

fn student_name<'a>(registrar: &'a Registrar, student_id: &'a str) -> &'a str {
    registrar
        .student(student_id)
        .map_or(student_id, |student| student.name.as_str())
}

fn course_name<'a>(registrar: &'a Registrar, course_code: &'a str) -> &'a str {
    registrar
        .course(course_code)
        .map_or(course_code, |course| course.name())
}

pub fn enrollment_outcome(
    registrar: &Registrar,
    result: &Result<EnrollmentChange, RegistrarError>,
) -> String {
    match result {
        Ok(change) => format!(
            "Enrollment successful: Student {} enrolled in course {}",
            change.student_name, change.course_name
        ),
        Err(RegistrarError::AlreadyEnrolled {
            student_id,
            course_code,
        }) => format!(
            "Enrollment failed: Student {} is already enrolled in course {}",
            student_name(registrar, student_id),
            course_name(registrar, course_code)
        ),
        Err(RegistrarError::ScheduleConflict {
            conflicting_code, ..
        }) => format!(
            "Enrollment failed: Schedule conflict with another course ({}).",
            conflicting_code
        ),
        Err(RegistrarError::CourseFull { course_code, .. }) => format!(
            "Enrollment failed: Course {} is full.",
            course_name(registrar, course_code)
        ),
        Err(RegistrarError::StudentOrCourseNotFound) => {
            "Enrollment failed: Student or course not found.".to_string()
        }
        Err(other) => format!("Enrollment failed: {}", other),
    }
}

pub fn drop_outcome(
    registrar: &Registrar,
    result: &Result<EnrollmentChange, RegistrarError>,
) -> String {
    match result {
        Ok(change) => format!(
            "Course dropped: Student {} dropped course {}",
            change.student_name, change.course_name
        ),
        Err(RegistrarError::StudentOrCourseNotFound) => {
            "Drop failed: Student or course not found.".to_string()
        }
        Err(RegistrarError::NoEnrollmentRecord { student_id }) => format!(
            "Drop failed: Student {} is not enrolled in any courses.",
            student_name(registrar, student_id)
        ),
        Err(RegistrarError::NotEnrolledInCourse {
            student_id,
            course_code,
        }) => format!(
            "Drop failed: Student {} is not enrolled in course {}",
            student_name(registrar, student_id),
            course_name(registrar, course_code)
        ),
        Err(other) => format!("Drop failed: {}", other),
    }
}

pub fn schedule(
    registrar: &Registrar,
    student_id: &str,
    result: &Result<Vec<ScheduleEntry>, RegistrarError>,
) -> String {
    match result {
        Ok(entries) => {
            let mut out = format!(
                "Schedule for Student {}:\n",
                student_name(registrar, student_id)
            );
            for entry in entries {
                out.push_str(&format!(
                    "Course Code: {}\nCourse Name: {}\nSchedule: {}\n\n",
                    entry.course_code, entry.course_name, entry.schedule
                ));
            }
            out
        }
        Err(RegistrarError::StudentNotFound { .. }) => "Student not found.\n".to_string(),
        Err(RegistrarError::NoCourses { student_id }) => format!(
            "Student {} is not enrolled in any courses.\n",
            student_name(registrar, student_id)
        ),
        Err(other) => format!("{}\n", other),
    }
}

pub fn rosters(rosters: &[CourseRoster]) -> String {
    if rosters.is_empty() {
        return "No students enrolled in any course.\n".to_string();
    }

    let mut out = String::new();
    for roster in rosters {
        out.push_str(&format!(
            "Course Code: {}\nCourse Name: {}\nEnrolled Students:\n",
            roster.course_code, roster.course_name
        ));
        for member in &roster.students {
            out.push_str(&format!(
                "Student ID: {}\nStudent Name: {}\n\n",
                member.student_id, member.student_name
            ));
        }
    }
    out
}

pub fn catalog<'a>(courses: impl IntoIterator<Item = &'a Course>) -> String {
    let mut out = String::new();
    for course in courses {
        out.push_str(&format!(
            "Course Code: {}\nCourse Name: {}\nSchedule: {}\n\n",
            course.code(),
            course.name(),
            course.schedule()
        ));
    }
    if out.is_empty() {
        out.push_str("No courses in the catalog.\n");
    }
    out
}

#[derive(Tabled)]
struct CourseTableRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Schedule")]
    schedule: String,
    #[tabled(rename = "Seats")]
    seats: String,
}

pub fn catalog_table<'a>(courses: impl IntoIterator<Item = &'a Course>) -> String {
    let rows: Vec<CourseTableRow> = courses
        .into_iter()
        .map(|course| CourseTableRow {
            code: course.code().to_string(),
            name: course.name().to_string(),
            schedule: course.schedule().to_string(),
            seats: format!("{}/{}", course.enrolled_count(), course.max_enrollment()),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[derive(Tabled)]
struct ScheduleTableRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Schedule")]
    schedule: String,
}

pub fn schedule_table(entries: &[ScheduleEntry]) -> String {
    let rows: Vec<ScheduleTableRow> = entries
        .iter()
        .map(|entry| ScheduleTableRow {
            code: entry.course_code.clone(),
            name: entry.course_name.clone(),
            schedule: entry.schedule.clone(),
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registrar() -> Registrar {
        let mut registrar = Registrar::new();
        registrar.add_student("S1", "Ada");
        registrar.add_student("S2", "Grace");
        registrar
            .add_course("CS101", "Intro to CS", "Monday 9:00 AM", 1)
            .unwrap();
        registrar
            .add_course("CS102", "Data Structures", "Monday 9:00 AM", 5)
            .unwrap();
        registrar
    }

    #[test]
    fn test_enrollment_messages() {
        let mut registrar = registrar();

        let ok = registrar.enroll("S1", "CS101");
        assert_eq!(
            enrollment_outcome(&registrar, &ok),
            "Enrollment successful: Student Ada enrolled in course Intro to CS"
        );

        let full = registrar.enroll("S2", "CS101");
        assert_eq!(
            enrollment_outcome(&registrar, &full),
            "Enrollment failed: Course Intro to CS is full."
        );

        let again = registrar.enroll("S1", "CS101");
        assert_eq!(
            enrollment_outcome(&registrar, &again),
            "Enrollment failed: Student Ada is already enrolled in course Intro to CS"
        );

        let clash = registrar.enroll("S1", "CS102");
        assert_eq!(
            enrollment_outcome(&registrar, &clash),
            "Enrollment failed: Schedule conflict with another course (CS101)."
        );

        let missing = registrar.enroll("S9", "CS101");
        assert_eq!(
            enrollment_outcome(&registrar, &missing),
            "Enrollment failed: Student or course not found."
        );
    }

    #[test]
    fn test_drop_messages() {
        let mut registrar = registrar();

        let no_record = registrar.drop_course("S1", "CS101");
        assert_eq!(
            drop_outcome(&registrar, &no_record),
            "Drop failed: Student Ada is not enrolled in any courses."
        );

        registrar.enroll("S1", "CS102").unwrap();
        let wrong_course = registrar.drop_course("S1", "CS101");
        assert_eq!(
            drop_outcome(&registrar, &wrong_course),
            "Drop failed: Student Ada is not enrolled in course Intro to CS"
        );

        let ok = registrar.drop_course("S1", "CS102");
        assert_eq!(
            drop_outcome(&registrar, &ok),
            "Course dropped: Student Ada dropped course Data Structures"
        );
    }

    #[test]
    fn test_schedule_text() {
        let mut registrar = registrar();
        assert_eq!(
            schedule(&registrar, "S9", &registrar.student_schedule("S9")),
            "Student not found.\n"
        );
        assert_eq!(
            schedule(&registrar, "S1", &registrar.student_schedule("S1")),
            "Student Ada is not enrolled in any courses.\n"
        );

        registrar.enroll("S1", "CS101").unwrap();
        assert_eq!(
            schedule(&registrar, "S1", &registrar.student_schedule("S1")),
            "Schedule for Student Ada:\nCourse Code: CS101\nCourse Name: Intro to CS\nSchedule: Monday 9:00 AM\n\n"
        );
    }

    #[test]
    fn test_rosters_text() {
        let mut registrar = registrar();
        assert_eq!(rosters(&registrar.course_rosters()), "No students enrolled in any course.\n");

        registrar.enroll("S2", "CS102").unwrap();
        assert_eq!(
            rosters(&registrar.course_rosters()),
            "Course Code: CS102\nCourse Name: Data Structures\nEnrolled Students:\nStudent ID: S2\nStudent Name: Grace\n\n"
        );
    }

    #[test]
    fn test_catalog_table_lists_seats() {
        let mut registrar = registrar();
        registrar.enroll("S1", "CS102").unwrap();
        let table = catalog_table(registrar.catalog());
        assert!(table.contains("CS101"));
        assert!(table.contains("1/5"));
    }
}
