use axum::{extract::Query, response::Json};
use serde::Deserialize;

use crate::models::{Report, ReportPeriod};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    period: Option<String>,
}

pub async fn get_report(Query(query): Query<ReportQuery>) -> Json<Report> {
    let period = ReportPeriod::parse(query.period.as_deref());
    Json(Report::for_period(period))
}
