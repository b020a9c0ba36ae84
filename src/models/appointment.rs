use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Resource;

/// Appointment record. Patient and doctor names are denormalized display
/// copies and are not kept in sync with the patient store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub date: String,
    pub time: String,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    #[default]
    Checkup,
    Consultation,
    Followup,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

/// Payload for `POST /appointments`. Patient id, doctor id, date and time
/// are required; the rest defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub doctor_id: Option<String>,
    pub doctor_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AppointmentType>,
    pub status: Option<AppointmentStatus>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn from_new(new: NewAppointment, now: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            patient_id: new.patient_id.unwrap_or_default(),
            patient_name: new
                .patient_name
                .unwrap_or_else(|| "Unknown Patient".to_string()),
            doctor_id: new.doctor_id.unwrap_or_default(),
            doctor_name: new
                .doctor_name
                .unwrap_or_else(|| "Unknown Doctor".to_string()),
            kind: new.kind.unwrap_or_default(),
            status: new.status.unwrap_or_default(),
            date: new.date.unwrap_or_default(),
            time: new.time.unwrap_or_default(),
            duration: new.duration.unwrap_or(30),
            notes: new.notes,
            created_at: now,
        }
    }
}

impl Resource for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
