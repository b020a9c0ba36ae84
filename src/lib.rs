//! Mock backend for a clinic administration front end.
//!
//! Serves patients, appointments, users, dashboard statistics and period
//! reports from in-memory collections. Nothing is persisted; the process
//! starts with a seeded dataset and mutates it in place.

pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use store::Store;

/// Build the application router over the given store.
pub fn app(store: Arc<Store>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/patients",
            get(handlers::list_patients).post(handlers::create_patient),
        )
        .route(
            "/patients/:id",
            get(handlers::get_patient)
                .put(handlers::update_patient)
                .delete(handlers::delete_patient),
        )
        .route(
            "/appointments",
            get(handlers::list_appointments).post(handlers::create_appointment),
        )
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/dashboard/stats", get(handlers::dashboard_stats))
        .route("/reports", get(handlers::get_report))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
