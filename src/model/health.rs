use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Weight,
    BloodPressure,
    HeartRate,
    Glucose,
}

/// A single self-reported reading. The list is append-only.
///
/// `value` is a free-form payload: blood pressure is a composite
/// `"systolic/diastolic"` string, the other kinds are plain numeric strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MetricKind,
    pub value: String,
    pub date: NaiveDate,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Normal,
    Abnormal,
}

/// Read-only lab result, seed-provided only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    pub id: String,
    pub test_name: String,
    pub date: NaiveDate,
    pub result: String,
    pub normal_range: String,
    pub status: LabStatus,
    pub doctor_name: String,
}

/// Read-only medical record entry, seed-provided only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub description: String,
    pub doctor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

/// A doctor-directory entry, seed-provided only. The booking flow looks one
/// up by id to denormalize name and specialization into the appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub experience: u32,
    pub rating: f64,
    pub avatar: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_available: Option<String>,
    pub consultation_fee: u32,
}
