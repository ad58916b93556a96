//! Domain types shared between the store and its callers.
//!
//! All persisted shapes serialize with camelCase field names, matching the
//! JSON layout the original client left behind in local storage.

mod appointment;
mod health;
mod user;

pub use appointment::{Appointment, AppointmentStatus, AppointmentType};
pub use health::{Doctor, HealthMetric, HealthRecord, LabResult, LabStatus, MetricKind};
pub use user::{User, UserRole};
