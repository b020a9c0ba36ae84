use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::error::ApiError;
use crate::models::{Appointment, NewAppointment};
use crate::store::Store;

pub async fn list_appointments(State(store): State<Arc<Store>>) -> Json<Vec<Appointment>> {
    Json(store.list_appointments().await)
}

pub async fn create_appointment(
    State(store): State<Arc<Store>>,
    Json(new): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let created = store.create_appointment(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
