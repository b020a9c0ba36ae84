use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Resource;

/// Patient record as served over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    pub medical_history: Vec<String>,
    pub current_medications: Vec<Medication>,
    pub allergies: Vec<String>,
    pub blood_type: String,
    pub insurance_provider: String,
    pub insurance_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub prescribed_by: String,
}

/// Payload for `POST /patients`.
///
/// Only first name, last name and email are required; everything else
/// defaults to empty values on create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<Gender>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_history: Option<Vec<String>>,
    pub current_medications: Option<Vec<Medication>>,
    pub allergies: Option<Vec<String>>,
    pub blood_type: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_number: Option<String>,
}

/// Payload for `PUT /patients/{id}`: any subset of fields, shallow-merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<Gender>,
    pub address: Option<Address>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_history: Option<Vec<String>>,
    pub current_medications: Option<Vec<Medication>>,
    pub allergies: Option<Vec<String>>,
    pub blood_type: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_number: Option<String>,
}

impl Patient {
    /// Build a full record from a create payload. The id is assigned by the
    /// store; missing optional fields default to empty values.
    pub fn from_new(new: NewPatient, now: DateTime<Utc>) -> Self {
        Self {
            id: String::new(),
            first_name: new.first_name.unwrap_or_default(),
            last_name: new.last_name.unwrap_or_default(),
            email: new.email.unwrap_or_default(),
            phone: new.phone.unwrap_or_default(),
            date_of_birth: new.date_of_birth.unwrap_or_default(),
            gender: new.gender.unwrap_or_default(),
            address: new.address.unwrap_or_default(),
            emergency_contact: new.emergency_contact.unwrap_or_default(),
            medical_history: new.medical_history.unwrap_or_default(),
            current_medications: new.current_medications.unwrap_or_default(),
            allergies: new.allergies.unwrap_or_default(),
            blood_type: new.blood_type.unwrap_or_default(),
            insurance_provider: new.insurance_provider.unwrap_or_default(),
            insurance_number: new.insurance_number.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow-merge an update into this record. The id and `createdAt` are
    /// immutable; `updatedAt` is always restamped, even for an empty update.
    pub fn apply(&mut self, update: PatientUpdate, now: DateTime<Utc>) {
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.email {
            self.email = v;
        }
        if let Some(v) = update.phone {
            self.phone = v;
        }
        if let Some(v) = update.date_of_birth {
            self.date_of_birth = v;
        }
        if let Some(v) = update.gender {
            self.gender = v;
        }
        if let Some(v) = update.address {
            self.address = v;
        }
        if let Some(v) = update.emergency_contact {
            self.emergency_contact = v;
        }
        if let Some(v) = update.medical_history {
            self.medical_history = v;
        }
        if let Some(v) = update.current_medications {
            self.current_medications = v;
        }
        if let Some(v) = update.allergies {
            self.allergies = v;
        }
        if let Some(v) = update.blood_type {
            self.blood_type = v;
        }
        if let Some(v) = update.insurance_provider {
            self.insurance_provider = v;
        }
        if let Some(v) = update.insurance_number {
            self.insurance_number = v;
        }
        self.updated_at = now;
    }
}

impl Resource for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
