pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod patients;
pub mod reports;

pub use appointments::*;
pub use auth::*;
pub use dashboard::*;
pub use patients::*;
pub use reports::*;

use axum::http::StatusCode;

/// Health check endpoint
pub async fn health() -> StatusCode {
    StatusCode::OK
}
