//! Thread-safe handle around a [`Registrar`]
//!
//! One coarse lock guards catalog, registry and ledger together, so every
//! operation is observed either fully applied or not at all.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::Result;
use crate::registrar::{CourseInsert, EnrollmentChange, Registrar, Registration};
use crate::report::{CourseRoster, ScheduleEntry};

#[derive(Debug, Clone, Default)]
pub struct SharedRegistrar {
    inner: Arc<RwLock<Registrar>>,
}

impl SharedRegistrar {
    pub fn new(registrar: Registrar) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registrar)),
        }
    }

    pub fn add_student(&self, student_id: &str, name: &str) -> Registration {
        self.inner.write().add_student(student_id, name)
    }

    pub fn add_course(
        &self,
        course_code: &str,
        name: &str,
        schedule: &str,
        max_enrollment: u32,
    ) -> Result<CourseInsert> {
        self.inner
            .write()
            .add_course(course_code, name, schedule, max_enrollment)
    }

    pub fn enroll(&self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        self.inner.write().enroll(student_id, course_code)
    }

    pub fn drop_course(&self, student_id: &str, course_code: &str) -> Result<EnrollmentChange> {
        self.inner.write().drop_course(student_id, course_code)
    }

    pub fn student_schedule(&self, student_id: &str) -> Result<Vec<ScheduleEntry>> {
        self.inner.read().student_schedule(student_id)
    }

    pub fn course_rosters(&self) -> Vec<CourseRoster> {
        self.inner.read().course_rosters()
    }

    /// Run a read-only closure against a consistent snapshot
    pub fn with<R>(&self, f: impl FnOnce(&Registrar) -> R) -> R {
        f(&self.inner.read())
    }
}
