use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::models::{NewPatient, Patient, PatientUpdate};
use crate::store::Store;

pub async fn list_patients(State(store): State<Arc<Store>>) -> Json<Vec<Patient>> {
    Json(store.list_patients().await)
}

pub async fn create_patient(
    State(store): State<Arc<Store>>,
    Json(new): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let created = store.create_patient(new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_patient(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(store.get_patient(&id).await?))
}

pub async fn update_patient(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
    Json(update): Json<PatientUpdate>,
) -> Result<Json<Patient>, ApiError> {
    Ok(Json(store.update_patient(&id, update).await?))
}

pub async fn delete_patient(
    State(store): State<Arc<Store>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    store.delete_patient(&id).await?;
    Ok(Json(json!({ "success": true })))
}
