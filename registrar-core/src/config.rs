//! Seed file - students, courses and enrollments to start from
//!
//! The seed is only ever read. Nothing the registrar does is written back.
//!
//! ```yaml
//! students:
//!   - id: S1
//!     name: Ada Lovelace
//! courses:
//!   - code: CS101
//!     name: Intro to CS
//!     schedule: Monday 9:00 AM
//!     max_enrollment: 30
//! enrollments:
//!   - student: S1
//!     course: CS101
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::RegistrarError;
use crate::model::Student;
use crate::registrar::Registrar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSeed {
    pub code: String,
    pub name: String,
    pub schedule: String,
    pub max_enrollment: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentSeed {
    pub student: String,
    pub course: String,
}

/// Parsed seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub students: Vec<Student>,

    #[serde(default)]
    pub courses: Vec<CourseSeed>,

    #[serde(default)]
    pub enrollments: Vec<EnrollmentSeed>,
}

/// A seed enrollment the registrar turned down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEnrollment {
    pub seed: EnrollmentSeed,
    pub reason: RegistrarError,
}

impl SeedConfig {
    /// Load a seed from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading seed from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let seed: SeedConfig =
            serde_yaml_ng::from_str(content).context("Failed to parse seed YAML")?;
        Ok(seed)
    }

    /// Populate `registrar` from this seed
    ///
    /// Students and courses are added first, then each enrollment goes
    /// through the normal enrollment checks. Rejected enrollments are
    /// returned, not treated as errors. A course with no seats is an error.
    pub fn apply(&self, registrar: &mut Registrar) -> Result<Vec<RejectedEnrollment>> {
        for student in &self.students {
            registrar.add_student(&student.id, &student.name);
        }

        for course in &self.courses {
            registrar
                .add_course(
                    &course.code,
                    &course.name,
                    &course.schedule,
                    course.max_enrollment,
                )
                .with_context(|| format!("Invalid course {} in seed", course.code))?;
        }

        let mut rejected = Vec::new();
        for seed in &self.enrollments {
            if let Err(reason) = registrar.enroll(&seed.student, &seed.course) {
                warn!(
                    student = %seed.student,
                    course = %seed.course,
                    "Seed enrollment rejected: {}",
                    reason
                );
                rejected.push(RejectedEnrollment {
                    seed: seed.clone(),
                    reason,
                });
            }
        }

        info!(
            students = registrar.students().len(),
            courses = registrar.catalog().len(),
            rejected = rejected.len(),
            "Seed applied"
        );
        Ok(rejected)
    }

    /// Build a fresh registrar from this seed
    pub fn build(&self) -> Result<(Registrar, Vec<RejectedEnrollment>)> {
        let mut registrar = Registrar::new();
        let rejected = self.apply(&mut registrar)?;
        Ok((registrar, rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const SEED: &str = r#"
students:
  - id: S1
    name: Ada
  - id: S2
    name: Grace
courses:
  - code: CS101
    name: Intro to CS
    schedule: Monday 9:00 AM
    max_enrollment: 1
  - code: CS102
    name: Data Structures
    schedule: Monday 9:30 AM
    max_enrollment: 5
enrollments:
  - student: S1
    course: CS101
  - student: S2
    course: CS101
  - student: S1
    course: CS102
"#;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let seed = SeedConfig::from_yaml("students: []").unwrap();
        assert_eq!(seed, SeedConfig::default());
    }

    #[test]
    fn test_apply_reports_rejections() {
        let seed = SeedConfig::from_yaml(SEED).unwrap();
        let (registrar, rejected) = seed.build().unwrap();

        assert_eq!(registrar.enrolled_courses("S1"), &["CS101"]);
        let reasons: Vec<_> = rejected.iter().map(|r| r.reason.kind()).collect();
        assert_eq!(reasons, vec!["course_full", "schedule_conflict"]);
    }

    #[test]
    fn test_zero_capacity_course_is_an_error() {
        let seed = SeedConfig::from_yaml(
            "courses:\n  - code: X1\n    name: Nothing\n    schedule: Monday 9:00 AM\n    max_enrollment: 0\n",
        )
        .unwrap();
        let err = seed.build().unwrap_err();
        assert!(err.to_string().contains("Invalid course X1"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.yml");
        fs::write(&path, SEED).unwrap();

        let seed = SeedConfig::load(&path).unwrap();
        assert_eq!(seed.students.len(), 2);
        assert_eq!(seed.courses[1].schedule, "Monday 9:30 AM");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = SeedConfig::load(temp_dir.path().join("absent.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read seed file"));
    }
}
