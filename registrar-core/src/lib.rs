//! Registrar library exports

pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod registrar;
pub mod registry;
pub mod report;
pub mod schedule;
pub mod shared;

pub use catalog::Catalog;
pub use error::{RegistrarError, Result, ScheduleParseError};
pub use model::{Course, Student};
pub use registrar::{CourseInsert, EnrollmentChange, Registrar, Registration};
pub use shared::SharedRegistrar;
