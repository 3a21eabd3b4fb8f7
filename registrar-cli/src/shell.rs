//! Interactive menu loop
//!
//! Reads choices and arguments line by line and prints the outcome of each
//! operation. End of input behaves like choosing Exit.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use registrar_core::{CourseInsert, Registrar, Registration};

use crate::render;

const MENU: &str = "\nStudent Course Management System
1. Add Student ID
2. Add Course
3. Enroll Student in Course
4. Drop Student from Course
5. View Student Schedule
6. Generate Course Rosters
7. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddStudent,
    AddCourse,
    Enroll,
    Drop,
    ViewSchedule,
    Rosters,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddStudent),
            "2" => Some(MenuChoice::AddCourse),
            "3" => Some(MenuChoice::Enroll),
            "4" => Some(MenuChoice::Drop),
            "5" => Some(MenuChoice::ViewSchedule),
            "6" => Some(MenuChoice::Rosters),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    registrar: Registrar,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registrar: Registrar, input: R, output: W) -> Self {
        Self {
            registrar,
            input,
            output,
        }
    }

    /// Run until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice. Please enter a valid option.")?;
                continue;
            };
            debug!(?choice, "Menu selection");

            let keep_going = match choice {
                MenuChoice::AddStudent => self.add_student()?,
                MenuChoice::AddCourse => self.add_course()?,
                MenuChoice::Enroll => self.enroll()?,
                MenuChoice::Drop => self.drop_course()?,
                MenuChoice::ViewSchedule => self.view_schedule()?,
                MenuChoice::Rosters => {
                    let rosters = self.registrar.course_rosters();
                    write!(self.output, "{}", render::rosters(&rosters))?;
                    true
                }
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting the program.")?;
                    false
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_registrar(self) -> Registrar {
        self.registrar
    }

    /// Print `label` and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read a positive seat count, asking again on bad input
    fn prompt_capacity(&mut self) -> Result<Option<u32>> {
        loop {
            let Some(line) = self.prompt("Enter maximum enrollment for the course: ")? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(seats) if seats > 0 => return Ok(Some(seats)),
                _ => writeln!(self.output, "Please enter a whole number greater than zero.")?,
            }
        }
    }

    fn add_student(&mut self) -> Result<bool> {
        let Some(id) = self.prompt("Enter student ID: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(false);
        };

        match self.registrar.add_student(&id, &name) {
            Registration::Created => writeln!(self.output, "Student added.")?,
            Registration::AlreadyRegistered => {
                writeln!(self.output, "Student {} is already registered.", id)?
            }
        }
        Ok(true)
    }

    fn add_course(&mut self) -> Result<bool> {
        let Some(code) = self.prompt("Enter course code: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt("Enter course name: ")? else {
            return Ok(false);
        };
        let Some(schedule) = self.prompt("Enter course schedule (e.g., 'Monday 9:00 AM'): ")?
        else {
            return Ok(false);
        };
        let Some(seats) = self.prompt_capacity()? else {
            return Ok(false);
        };

        match self.registrar.add_course(&code, &name, &schedule, seats) {
            Ok(CourseInsert::Inserted) => writeln!(self.output, "Course added.")?,
            Ok(CourseInsert::Duplicate) => writeln!(
                self.output,
                "Course {} already exists; existing course kept.",
                code
            )?,
            Err(err) => writeln!(self.output, "Course not added: {}", err)?,
        }
        Ok(true)
    }

    fn enroll(&mut self) -> Result<bool> {
        let Some((student_id, course_code)) = self.prompt_pair()? else {
            return Ok(false);
        };
        let result = self.registrar.enroll(&student_id, &course_code);
        writeln!(
            self.output,
            "{}",
            render::enrollment_outcome(&self.registrar, &result)
        )?;
        Ok(true)
    }

    fn drop_course(&mut self) -> Result<bool> {
        let Some((student_id, course_code)) = self.prompt_pair()? else {
            return Ok(false);
        };
        let result = self.registrar.drop_course(&student_id, &course_code);
        writeln!(
            self.output,
            "{}",
            render::drop_outcome(&self.registrar, &result)
        )?;
        Ok(true)
    }

    fn view_schedule(&mut self) -> Result<bool> {
        let Some(student_id) = self.prompt("Enter student ID: ")? else {
            return Ok(false);
        };
        let result = self.registrar.student_schedule(&student_id);
        write!(
            self.output,
            "{}",
            render::schedule(&self.registrar, &student_id, &result)
        )?;
        Ok(true)
    }

    fn prompt_pair(&mut self) -> Result<Option<(String, String)>> {
        let Some(student_id) = self.prompt("Enter student ID: ")? else {
            return Ok(None);
        };
        let Some(course_code) = self.prompt("Enter course code: ")? else {
            return Ok(None);
        };
        Ok(Some((student_id, course_code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_session(script: &str) -> (Registrar, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(Registrar::new(), Cursor::new(script.to_string()), &mut output);
        shell.run().unwrap();
        let registrar = shell.into_registrar();
        (registrar, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Enroll));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("enroll"), None);
    }

    #[test]
    fn test_full_session() {
        let script = "\
1\nS1\nAda\n\
2\nCS101\nIntro to CS\nMonday 9:00 AM\n1\n\
2\nCS102\nData Structures\nMonday 9:00 AM\n5\n\
3\nS1\nCS101\n\
3\nS1\nCS102\n\
5\nS1\n\
6\n\
7\n";
        let (registrar, output) = run_session(script);

        assert!(output.contains("Student added."));
        assert!(output.contains("Course added."));
        assert!(output.contains("Enrollment successful: Student Ada enrolled in course Intro to CS"));
        assert!(output.contains("Enrollment failed: Schedule conflict with another course (CS101)."));
        assert!(output.contains("Schedule for Student Ada:"));
        assert!(output.contains("Student ID: S1"));
        assert!(output.ends_with("Exiting the program.\n"));
        assert_eq!(registrar.enrolled_courses("S1"), &["CS101"]);
    }

    #[test]
    fn test_bad_capacity_reprompts() {
        let script = "2\nCS101\nIntro\nMonday 9:00 AM\nmany\n0\n12\n7\n";
        let (registrar, output) = run_session(script);

        assert_eq!(
            output
                .matches("Please enter a whole number greater than zero.")
                .count(),
            2
        );
        assert_eq!(registrar.course("CS101").map(|c| c.max_enrollment()), Some(12));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (_, output) = run_session("42\n");
        assert!(output.contains("Invalid choice. Please enter a valid option."));
        assert!(!output.contains("Exiting the program."));
    }

    #[test]
    fn test_eof_mid_prompt_stops_cleanly() {
        let (registrar, _) = run_session("1\nS1\n");
        assert!(registrar.students().is_empty());
    }
}
