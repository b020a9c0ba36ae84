//! Hardcoded mock dataset served on startup.
//!
//! All records are fictional. Appointment dates are generated relative to
//! the current day so the dashboard always has something to show.

use chrono::{Duration, Utc};

use crate::models::{
    Address, Appointment, AppointmentStatus, AppointmentType, EmergencyContact, Gender,
    Medication, Patient, Role, User,
};

pub fn patients() -> Vec<Patient> {
    let now = Utc::now();
    vec![
        Patient {
            id: "1".to_string(),
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            email: "emily.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            date_of_birth: "1985-03-15".to_string(),
            gender: Gender::Female,
            address: Address {
                street: "123 Main St".to_string(),
                city: "New York".to_string(),
                state: "NY".to_string(),
                zip_code: "10001".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "John Johnson".to_string(),
                relationship: "Spouse".to_string(),
                phone: "+1 (555) 123-4568".to_string(),
            },
            medical_history: vec!["Hypertension".to_string(), "Diabetes Type 2".to_string()],
            current_medications: vec![
                Medication {
                    id: "1".to_string(),
                    name: "Lisinopril".to_string(),
                    dosage: "10mg".to_string(),
                    frequency: "Once daily".to_string(),
                    start_date: "2023-01-15".to_string(),
                    end_date: None,
                    prescribed_by: "Dr. Sarah Wilson".to_string(),
                },
                Medication {
                    id: "2".to_string(),
                    name: "Metformin".to_string(),
                    dosage: "500mg".to_string(),
                    frequency: "Twice daily".to_string(),
                    start_date: "2023-01-15".to_string(),
                    end_date: None,
                    prescribed_by: "Dr. Sarah Wilson".to_string(),
                },
            ],
            allergies: vec!["Penicillin".to_string()],
            blood_type: "A+".to_string(),
            insurance_provider: "Blue Cross Blue Shield".to_string(),
            insurance_number: "BC123456789".to_string(),
            created_at: now - Duration::days(2),
            updated_at: now,
        },
        Patient {
            id: "2".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Brown".to_string(),
            email: "michael.brown@email.com".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            date_of_birth: "1978-07-22".to_string(),
            gender: Gender::Male,
            address: Address {
                street: "456 Oak Ave".to_string(),
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
                zip_code: "90210".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Sarah Brown".to_string(),
                relationship: "Spouse".to_string(),
                phone: "+1 (555) 234-5679".to_string(),
            },
            medical_history: vec!["Asthma".to_string()],
            current_medications: vec![Medication {
                id: "3".to_string(),
                name: "Albuterol".to_string(),
                dosage: "90mcg".to_string(),
                frequency: "As needed".to_string(),
                start_date: "2023-06-01".to_string(),
                end_date: None,
                prescribed_by: "Dr. James Miller".to_string(),
            }],
            allergies: vec![],
            blood_type: "O-".to_string(),
            insurance_provider: "Aetna".to_string(),
            insurance_number: "AET987654321".to_string(),
            created_at: now - Duration::days(1),
            updated_at: now,
        },
        Patient {
            id: "3".to_string(),
            first_name: "Lisa".to_string(),
            last_name: "Davis".to_string(),
            email: "lisa.davis@email.com".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            date_of_birth: "1992-11-08".to_string(),
            gender: Gender::Female,
            address: Address {
                street: "789 Pine St".to_string(),
                city: "Chicago".to_string(),
                state: "IL".to_string(),
                zip_code: "60601".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Robert Davis".to_string(),
                relationship: "Father".to_string(),
                phone: "+1 (555) 345-6790".to_string(),
            },
            medical_history: vec![],
            current_medications: vec![],
            allergies: vec!["Shellfish".to_string()],
            blood_type: "B+".to_string(),
            insurance_provider: "Cigna".to_string(),
            insurance_number: "CIG456789123".to_string(),
            created_at: now - Duration::days(4),
            updated_at: now,
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    let now = Utc::now();
    let today = now.date_naive().to_string();
    let yesterday = (now - Duration::days(1)).date_naive().to_string();
    let tomorrow = (now + Duration::days(1)).date_naive().to_string();

    vec![
        Appointment {
            id: "1".to_string(),
            patient_id: "1".to_string(),
            patient_name: "Emily Johnson".to_string(),
            doctor_id: "1".to_string(),
            doctor_name: "Dr. Sarah Wilson".to_string(),
            kind: AppointmentType::Checkup,
            status: AppointmentStatus::Confirmed,
            date: today.clone(),
            time: "09:00".to_string(),
            duration: 30,
            notes: Some("Regular checkup for diabetes management".to_string()),
            created_at: now - Duration::days(3),
        },
        Appointment {
            id: "2".to_string(),
            patient_id: "2".to_string(),
            patient_name: "Michael Brown".to_string(),
            doctor_id: "1".to_string(),
            doctor_name: "Dr. Sarah Wilson".to_string(),
            kind: AppointmentType::Consultation,
            status: AppointmentStatus::Scheduled,
            date: today.clone(),
            time: "10:30".to_string(),
            duration: 45,
            notes: Some("Asthma consultation and medication review".to_string()),
            created_at: now - Duration::days(3),
        },
        Appointment {
            id: "3".to_string(),
            patient_id: "3".to_string(),
            patient_name: "Lisa Davis".to_string(),
            doctor_id: "2".to_string(),
            doctor_name: "Dr. James Miller".to_string(),
            kind: AppointmentType::Followup,
            status: AppointmentStatus::Confirmed,
            date: today,
            time: "14:00".to_string(),
            duration: 20,
            notes: Some("Follow-up after recent blood work".to_string()),
            created_at: now - Duration::days(3),
        },
        Appointment {
            id: "4".to_string(),
            patient_id: "1".to_string(),
            patient_name: "Emily Johnson".to_string(),
            doctor_id: "2".to_string(),
            doctor_name: "Dr. James Miller".to_string(),
            kind: AppointmentType::Emergency,
            status: AppointmentStatus::Completed,
            date: yesterday,
            time: "16:30".to_string(),
            duration: 60,
            notes: Some("Emergency visit for chest pain - resolved".to_string()),
            created_at: now - Duration::days(4),
        },
        Appointment {
            id: "5".to_string(),
            patient_id: "2".to_string(),
            patient_name: "Michael Brown".to_string(),
            doctor_id: "1".to_string(),
            doctor_name: "Dr. Sarah Wilson".to_string(),
            kind: AppointmentType::Checkup,
            status: AppointmentStatus::Cancelled,
            date: tomorrow,
            time: "11:00".to_string(),
            duration: 30,
            notes: Some("Patient cancelled due to scheduling conflict".to_string()),
            created_at: now - Duration::days(2),
        },
    ]
}

pub fn users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "1".to_string(),
            username: "admin".to_string(),
            email: "admin@hospital.com".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            first_name: "John".to_string(),
            last_name: "Admin".to_string(),
            created_at: now,
        },
        User {
            id: "2".to_string(),
            username: "doctor".to_string(),
            email: "doctor@hospital.com".to_string(),
            password: "doctor123".to_string(),
            role: Role::Doctor,
            first_name: "Sarah".to_string(),
            last_name: "Wilson".to_string(),
            created_at: now,
        },
    ]
}
