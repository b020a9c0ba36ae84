use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::models::DashboardStats;
use crate::store::Store;

pub async fn dashboard_stats(State(store): State<Arc<Store>>) -> Json<DashboardStats> {
    Json(store.dashboard_stats().await)
}
