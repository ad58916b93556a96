use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    Video,
    Offline,
}

/// Status transitions are one-directional: `Upcoming -> Completed` (driven
/// externally, never by this client) and `Upcoming -> Cancelled` (via
/// [`crate::store::AppStore::cancel_appointment`]). Nothing transitions out
/// of `Completed` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// A booked consultation slot.
///
/// Doctor/patient names and specialization are denormalized at booking time
/// and are not kept in sync with later profile edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub doctor_specialization: String,
    pub patient_name: String,
    pub date: NaiveDate,
    /// Display string, e.g. "10:30 AM". Not parsed by the core.
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_link: Option<String>,
}
