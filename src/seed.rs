//! Static fallback datasets.
//!
//! Used only when a storage key has nothing persisted yet; never written
//! back by the core. Content mirrors the demo accounts (`patient1` /
//! `doctor1`) so a fresh install has something coherent to show.

use chrono::NaiveDate;

use crate::model::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, HealthMetric, HealthRecord,
    LabResult, LabStatus, MetricKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date is valid")
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "apt_seed_1".to_string(),
            patient_id: "patient1".to_string(),
            doctor_id: "doctor1".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            doctor_specialization: "Cardiologist".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2025, 1, 20),
            time: "10:30 AM".to_string(),
            kind: AppointmentType::Video,
            status: AppointmentStatus::Upcoming,
            notes: Some("Follow-up on blood pressure readings".to_string()),
            call_link: Some("https://meet.telecare.example/apt_seed_1".to_string()),
        },
        Appointment {
            id: "apt_seed_2".to_string(),
            patient_id: "patient1".to_string(),
            doctor_id: "doctor2".to_string(),
            doctor_name: "Dr. Emily Rodriguez".to_string(),
            doctor_specialization: "General Physician".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2025, 1, 10),
            time: "2:00 PM".to_string(),
            kind: AppointmentType::Offline,
            status: AppointmentStatus::Completed,
            notes: Some("Annual physical examination".to_string()),
            call_link: None,
        },
        Appointment {
            id: "apt_seed_3".to_string(),
            patient_id: "patient1".to_string(),
            doctor_id: "doctor1".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            doctor_specialization: "Cardiologist".to_string(),
            patient_name: "John Doe".to_string(),
            date: date(2024, 12, 15),
            time: "11:00 AM".to_string(),
            kind: AppointmentType::Video,
            status: AppointmentStatus::Cancelled,
            notes: None,
            call_link: None,
        },
    ]
}

pub fn health_metrics() -> Vec<HealthMetric> {
    vec![
        HealthMetric {
            id: "1".to_string(),
            kind: MetricKind::Weight,
            value: "75".to_string(),
            date: date(2025, 1, 14),
            unit: "kg".to_string(),
        },
        HealthMetric {
            id: "2".to_string(),
            kind: MetricKind::BloodPressure,
            value: "120/80".to_string(),
            date: date(2025, 1, 14),
            unit: "mmHg".to_string(),
        },
        HealthMetric {
            id: "3".to_string(),
            kind: MetricKind::HeartRate,
            value: "72".to_string(),
            date: date(2025, 1, 14),
            unit: "bpm".to_string(),
        },
        HealthMetric {
            id: "4".to_string(),
            kind: MetricKind::Glucose,
            value: "95".to_string(),
            date: date(2025, 1, 14),
            unit: "mg/dL".to_string(),
        },
    ]
}

pub fn lab_results() -> Vec<LabResult> {
    vec![
        LabResult {
            id: "1".to_string(),
            test_name: "Complete Blood Count (CBC)".to_string(),
            date: date(2025, 1, 10),
            result: "Normal".to_string(),
            normal_range: "4.5-11.0 x10^9/L".to_string(),
            status: LabStatus::Normal,
            doctor_name: "Dr. Sarah Johnson".to_string(),
        },
        LabResult {
            id: "2".to_string(),
            test_name: "Lipid Profile".to_string(),
            date: date(2025, 1, 8),
            result: "Cholesterol: 210 mg/dL".to_string(),
            normal_range: "<200 mg/dL".to_string(),
            status: LabStatus::Abnormal,
            doctor_name: "Dr. Sarah Johnson".to_string(),
        },
        LabResult {
            id: "3".to_string(),
            test_name: "Blood Glucose".to_string(),
            date: date(2025, 1, 5),
            result: "95 mg/dL".to_string(),
            normal_range: "70-100 mg/dL".to_string(),
            status: LabStatus::Normal,
            doctor_name: "Dr. Emily Rodriguez".to_string(),
        },
    ]
}

pub fn health_records() -> Vec<HealthRecord> {
    vec![
        HealthRecord {
            id: "1".to_string(),
            date: date(2025, 1, 10),
            title: "Annual Physical Examination".to_string(),
            description: "Routine checkup. All vitals normal. Continue current medications."
                .to_string(),
            doctor_name: "Dr. Emily Rodriguez".to_string(),
            files: None,
        },
        HealthRecord {
            id: "2".to_string(),
            date: date(2025, 1, 5),
            title: "Cardiology Consultation".to_string(),
            description:
                "Heart rate and blood pressure within normal limits. ECG shows normal sinus rhythm."
                    .to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            files: None,
        },
        HealthRecord {
            id: "3".to_string(),
            date: date(2024, 12, 20),
            title: "Vaccination Record".to_string(),
            description: "Flu vaccine administered. No adverse reactions observed.".to_string(),
            doctor_name: "Dr. Emily Rodriguez".to_string(),
            files: None,
        },
    ]
}

pub fn doctor_directory() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "doctor1".to_string(),
            name: "Dr. Sarah Johnson".to_string(),
            specialization: "Cardiologist".to_string(),
            experience: 12,
            rating: 4.8,
            avatar: "https://i.pravatar.cc/150?img=1".to_string(),
            available: true,
            next_available: Some("Today, 4:00 PM".to_string()),
            consultation_fee: 120,
        },
        Doctor {
            id: "doctor2".to_string(),
            name: "Dr. Emily Rodriguez".to_string(),
            specialization: "General Physician".to_string(),
            experience: 8,
            rating: 4.6,
            avatar: "https://i.pravatar.cc/150?img=5".to_string(),
            available: true,
            next_available: Some("Tomorrow, 9:00 AM".to_string()),
            consultation_fee: 80,
        },
        Doctor {
            id: "doctor3".to_string(),
            name: "Dr. Michael Chen".to_string(),
            specialization: "Dermatologist".to_string(),
            experience: 15,
            rating: 4.9,
            avatar: "https://i.pravatar.cc/150?img=11".to_string(),
            available: false,
            next_available: Some("Mon, 10:00 AM".to_string()),
            consultation_fee: 150,
        },
    ]
}

/// Directory lookup used by the booking flow to denormalize doctor fields
/// into a new appointment. A dangling id simply yields `None`.
pub fn doctor_by_id(id: &str) -> Option<Doctor> {
    doctor_directory().into_iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_ids_are_unique_within_each_dataset() {
        let appts = appointments();
        let mut ids: Vec<_> = appts.iter().map(|a| a.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), appts.len());
    }

    #[test]
    fn directory_lookup_finds_known_doctor() {
        let doc = doctor_by_id("doctor1").unwrap();
        assert_eq!(doc.name, "Dr. Sarah Johnson");
        assert_eq!(doctor_by_id("doctor99"), None);
    }

    #[test]
    fn seed_appointments_belong_to_demo_patient() {
        assert!(appointments().iter().all(|a| a.patient_id == "patient1"));
    }
}
