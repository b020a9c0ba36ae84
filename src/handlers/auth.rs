use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::store::Store;

pub async fn login(
    State(store): State<Arc<Store>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = store.login(request).await?;
    Ok(Json(response))
}

pub async fn register(
    State(store): State<Arc<Store>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = store.register(request).await?;
    Ok(Json(response))
}
