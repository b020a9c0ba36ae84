//! In-memory resource stores backing the HTTP surface.
//!
//! One [`Collection`] per entity type, each behind its own async lock. Locks
//! are held only for the duration of a single synchronous operation; there
//! are no transactions and no cross-collection consistency guarantees.

mod collection;
mod seed;

pub use collection::{Collection, Resource};

use chrono::{Datelike, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    Appointment, AppointmentStatus, AuthResponse, DashboardStats, LoginRequest, NewAppointment,
    NewPatient, Patient, PatientUpdate, RegisterRequest, Role, User,
};

/// How many appointments/patients the dashboard previews.
const DASHBOARD_PREVIEW_LIMIT: usize = 5;

pub struct Store {
    patients: RwLock<Collection<Patient>>,
    appointments: RwLock<Collection<Appointment>>,
    users: RwLock<Collection<User>>,
}

impl Store {
    /// Empty store, used by tests.
    pub fn empty() -> Self {
        Self {
            patients: RwLock::new(Collection::new()),
            appointments: RwLock::new(Collection::new()),
            users: RwLock::new(Collection::new()),
        }
    }

    /// Store pre-populated with the mock dataset.
    pub fn seeded() -> Self {
        Self {
            patients: RwLock::new(Collection::seeded(seed::patients())),
            appointments: RwLock::new(Collection::seeded(seed::appointments())),
            users: RwLock::new(Collection::seeded(seed::users())),
        }
    }

    // ── Patients ──

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.patients.read().await.list()
    }

    pub async fn get_patient(&self, id: &str) -> Result<Patient, ApiError> {
        self.patients
            .read()
            .await
            .get(id)
            .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))
    }

    pub async fn create_patient(&self, new: NewPatient) -> Result<Patient, ApiError> {
        if is_blank(&new.first_name) || is_blank(&new.last_name) || is_blank(&new.email) {
            return Err(ApiError::Validation(
                "First name, last name, and email are required".to_string(),
            ));
        }

        let mut patients = self.patients.write().await;
        let email = new.email.as_deref().unwrap_or_default();
        if patients.find(|p| p.email == email).is_some() {
            return Err(ApiError::Conflict(
                "Patient with this email already exists".to_string(),
            ));
        }

        Ok(patients.insert(Patient::from_new(new, Utc::now())))
    }

    pub async fn update_patient(
        &self,
        id: &str,
        update: PatientUpdate,
    ) -> Result<Patient, ApiError> {
        self.patients
            .write()
            .await
            .update_with(id, |patient| patient.apply(update, Utc::now()))
            .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))
    }

    pub async fn delete_patient(&self, id: &str) -> Result<(), ApiError> {
        if self.patients.write().await.remove(id) {
            Ok(())
        } else {
            Err(ApiError::NotFound("Patient not found".to_string()))
        }
    }

    // ── Appointments ──

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.appointments.read().await.list()
    }

    pub async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment, ApiError> {
        if is_blank(&new.patient_id)
            || is_blank(&new.doctor_id)
            || is_blank(&new.date)
            || is_blank(&new.time)
        {
            return Err(ApiError::Validation(
                "Patient ID, doctor ID, date, and time are required".to_string(),
            ));
        }

        let mut appointments = self.appointments.write().await;
        Ok(appointments.insert(Appointment::from_new(new, Utc::now())))
    }

    // ── Auth ──

    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        if is_blank(&request.email) || is_blank(&request.password) {
            return Err(ApiError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        let email = request.email.as_deref().unwrap_or_default();
        let password = request.password.as_deref().unwrap_or_default();

        let user = self
            .users
            .read()
            .await
            .find(|u| u.email == email && u.password == password)
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        Ok(AuthResponse {
            success: true,
            user,
            token: issue_token(),
        })
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, ApiError> {
        if is_blank(&request.first_name)
            || is_blank(&request.last_name)
            || is_blank(&request.email)
            || is_blank(&request.password)
        {
            return Err(ApiError::Validation("All fields are required".to_string()));
        }
        let email = request.email.as_deref().unwrap_or_default().to_string();

        let mut users = self.users.write().await;
        if users.find(|u| u.email == email).is_some() {
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let username = email.split('@').next().unwrap_or_default().to_string();
        let user = users.insert(User {
            id: String::new(),
            username,
            email,
            password: request.password.unwrap_or_default(),
            role: request.role.unwrap_or(Role::Staff),
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            created_at: Utc::now(),
        });

        Ok(AuthResponse {
            success: true,
            user,
            token: issue_token(),
        })
    }

    // ── Dashboard ──

    pub async fn dashboard_stats(&self) -> DashboardStats {
        let patients = self.patients.read().await;
        let appointments = self.appointments.read().await;

        let now = Utc::now();
        let today = now.date_naive().to_string();

        let today_appointments = appointments
            .records()
            .iter()
            .filter(|a| a.date == today)
            .count();
        let pending_appointments = appointments
            .records()
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count();
        let completed_appointments = appointments
            .records()
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count();
        let new_patients_this_month = patients
            .records()
            .iter()
            .filter(|p| p.created_at.year() == now.year() && p.created_at.month() == now.month())
            .count();

        let mut upcoming: Vec<Appointment> = appointments
            .records()
            .iter()
            .filter(|a| {
                a.date.as_str() >= today.as_str()
                    && matches!(
                        a.status,
                        AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                    )
            })
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        upcoming.truncate(DASHBOARD_PREVIEW_LIMIT);

        let mut recent: Vec<Patient> = patients.records().to_vec();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(DASHBOARD_PREVIEW_LIMIT);

        DashboardStats {
            total_patients: patients.len(),
            today_appointments,
            pending_appointments,
            completed_appointments,
            new_patients_this_month,
            upcoming_appointments: upcoming,
            recent_patients: recent,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.is_empty())
}

/// Placeholder session token. Real token issuance is out of scope; the
/// client only needs an opaque string to carry around.
fn issue_token() -> String {
    format!("session-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_patient(first: &str, last: &str, email: &str) -> NewPatient {
        NewPatient {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }
    }

    fn new_appointment(patient_id: &str, date: &str, time: &str) -> NewAppointment {
        NewAppointment {
            patient_id: Some(patient_id.to_string()),
            doctor_id: Some("1".to_string()),
            date: Some(date.to_string()),
            time: Some(time.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_patient_requires_core_fields() {
        let store = Store::empty();
        let result = store
            .create_patient(NewPatient {
                first_name: Some("Emily".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(store.list_patients().await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_and_count_unchanged() {
        let store = Store::empty();
        store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();

        let result = store
            .create_patient(new_patient("Eve", "Jones", "emily@email.com"))
            .await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
        assert_eq!(store.list_patients().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_collection_unmodified() {
        let store = Store::empty();
        store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();
        let before = store.list_patients().await;

        let result = store.update_patient("42", PatientUpdate::default()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let after = store.list_patients().await;
        assert_eq!(
            serde_json::to_value(&before).unwrap(),
            serde_json::to_value(&after).unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_update_changes_only_updated_at() {
        let store = Store::empty();
        let created = store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();

        let updated = store
            .update_patient(&created.id, PatientUpdate::default())
            .await
            .unwrap();
        assert!(updated.updated_at >= created.updated_at);

        let before = serde_json::to_value(&created).unwrap();
        let after = serde_json::to_value(&updated).unwrap();
        for (key, value) in before.as_object().unwrap() {
            if key != "updatedAt" {
                assert_eq!(&after[key], value, "field {} changed", key);
            }
        }
    }

    #[tokio::test]
    async fn test_update_preserves_id() {
        let store = Store::empty();
        let created = store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();

        let updated = store
            .update_patient(
                &created.id,
                PatientUpdate {
                    first_name: Some("Emilia".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Emilia");
    }

    #[tokio::test]
    async fn test_delete_removes_one_and_second_delete_fails() {
        let store = Store::empty();
        let a = store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();
        store
            .create_patient(new_patient("Michael", "Brown", "michael@email.com"))
            .await
            .unwrap();

        store.delete_patient(&a.id).await.unwrap();
        assert_eq!(store.list_patients().await.len(), 1);

        let second = store.delete_patient(&a.id).await;
        assert!(matches!(second, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes_keeps_relative_order() {
        let store = Store::empty();
        let emails = ["a@x.com", "b@x.com", "c@x.com", "d@x.com", "e@x.com"];
        let mut ids = Vec::new();
        for email in emails {
            let created = store
                .create_patient(new_patient("P", "Q", email))
                .await
                .unwrap();
            ids.push(created.id);
        }
        store.delete_patient(&ids[1]).await.unwrap();
        store.delete_patient(&ids[3]).await.unwrap();

        let listed: Vec<String> = store
            .list_patients()
            .await
            .into_iter()
            .map(|p| p.email)
            .collect();
        assert_eq!(listed, vec!["a@x.com", "c@x.com", "e@x.com"]);
    }

    #[tokio::test]
    async fn test_patient_ids_unique_after_deletes() {
        let store = Store::empty();
        let a = store
            .create_patient(new_patient("A", "A", "a@x.com"))
            .await
            .unwrap();
        store.delete_patient(&a.id).await.unwrap();
        let b = store
            .create_patient(new_patient("B", "B", "b@x.com"))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_appointment_defaults_status_scheduled() {
        let store = Store::empty();
        let appointment = store
            .create_appointment(new_appointment("1", "2024-01-10", "09:00"))
            .await
            .unwrap();
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.patient_name, "Unknown Patient");
        assert_eq!(store.list_appointments().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_appointment_requires_core_fields() {
        let store = Store::empty();
        let result = store
            .create_appointment(NewAppointment {
                patient_id: Some("1".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(store.list_appointments().await.is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let store = Store::seeded();
        let result = store
            .login(LoginRequest {
                email: Some("admin@hospital.com".to_string()),
                password: Some("wrong".to_string()),
            })
            .await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let store = Store::seeded();
        let response = store
            .login(LoginRequest {
                email: Some("admin@hospital.com".to_string()),
                password: Some("admin123".to_string()),
            })
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.token.starts_with("session-"));
        assert_eq!(response.user.email, "admin@hospital.com");
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_validation_error() {
        let store = Store::seeded();
        let result = store
            .login(LoginRequest {
                email: Some("admin@hospital.com".to_string()),
                password: None,
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let store = Store::seeded();
        let result = store
            .register(RegisterRequest {
                first_name: Some("John".to_string()),
                last_name: Some("Admin".to_string()),
                email: Some("admin@hospital.com".to_string()),
                password: Some("pw".to_string()),
                role: None,
            })
            .await;
        assert!(matches!(result, Err(ApiError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_derives_username_and_default_role() {
        let store = Store::empty();
        let response = store
            .register(RegisterRequest {
                first_name: Some("Nina".to_string()),
                last_name: Some("Reyes".to_string()),
                email: Some("nina.reyes@hospital.com".to_string()),
                password: Some("pw".to_string()),
                role: None,
            })
            .await
            .unwrap();
        assert_eq!(response.user.username, "nina.reyes");
        assert_eq!(response.user.role, Role::Staff);
    }

    #[tokio::test]
    async fn test_dashboard_stats_counts() {
        let store = Store::empty();
        store
            .create_patient(new_patient("Emily", "Johnson", "emily@email.com"))
            .await
            .unwrap();
        let today = Utc::now().date_naive().to_string();
        store
            .create_appointment(new_appointment("1", &today, "09:00"))
            .await
            .unwrap();
        store
            .create_appointment(new_appointment("1", "2099-01-01", "10:00"))
            .await
            .unwrap();

        let stats = store.dashboard_stats().await;
        assert_eq!(stats.total_patients, 1);
        assert_eq!(stats.today_appointments, 1);
        assert_eq!(stats.pending_appointments, 2);
        assert_eq!(stats.completed_appointments, 0);
        assert_eq!(stats.new_patients_this_month, 1);
        assert_eq!(stats.upcoming_appointments.len(), 2);
        // soonest first
        assert_eq!(stats.upcoming_appointments[0].date, today);
        assert_eq!(stats.recent_patients.len(), 1);
    }

    #[tokio::test]
    async fn test_seeded_store_has_mock_dataset() {
        let store = Store::seeded();
        assert_eq!(store.list_patients().await.len(), 3);
        assert_eq!(store.list_appointments().await.len(), 5);

        // Seeded ids are taken, new records continue above them.
        let patient = store
            .create_patient(new_patient("New", "Patient", "new@email.com"))
            .await
            .unwrap();
        assert_eq!(patient.id, "4");
    }
}
