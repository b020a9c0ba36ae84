use serde::{Deserialize, Serialize};

use super::{Appointment, Patient};

/// Aggregated dashboard figures, computed live from the stores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: usize,
    pub today_appointments: usize,
    pub pending_appointments: usize,
    pub completed_appointments: usize,
    pub new_patients_this_month: usize,
    pub upcoming_appointments: Vec<Appointment>,
    pub recent_patients: Vec<Patient>,
}

/// Reporting period selected via `GET /reports?period=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    /// Unrecognized or missing values fall back to `month`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("week") => ReportPeriod::Week,
            Some("quarter") => ReportPeriod::Quarter,
            Some("year") => ReportPeriod::Year,
            _ => ReportPeriod::Month,
        }
    }
}

/// Canned report figures for one period. Values are display strings,
/// matching the mock dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_patients: String,
    pub total_appointments: String,
    pub revenue: String,
    pub satisfaction: String,
    pub appointment_trends: Vec<TrendPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub scheduled: u32,
    pub completed: u32,
    pub cancelled: u32,
    pub total: u32,
}

impl Report {
    pub fn for_period(period: ReportPeriod) -> Self {
        let (total_patients, total_appointments, revenue, satisfaction) = match period {
            ReportPeriod::Week => ("28", "112", "$18,590", "96%"),
            ReportPeriod::Month => ("156", "489", "$74,360", "93%"),
            ReportPeriod::Quarter => ("312", "1,223", "$223,085", "92%"),
            ReportPeriod::Year => ("1,247", "4,892", "$892,340", "94%"),
        };
        Self {
            total_patients: total_patients.to_string(),
            total_appointments: total_appointments.to_string(),
            revenue: revenue.to_string(),
            satisfaction: satisfaction.to_string(),
            appointment_trends: appointment_trends(),
        }
    }
}

fn appointment_trends() -> Vec<TrendPoint> {
    let rows = [
        ("Jan", 45, 42, 3),
        ("Feb", 52, 48, 4),
        ("Mar", 38, 35, 3),
        ("Apr", 61, 58, 3),
        ("May", 47, 44, 3),
        ("Jun", 55, 51, 4),
    ];
    rows.iter()
        .map(|&(month, scheduled, completed, cancelled)| TrendPoint {
            month: month.to_string(),
            scheduled,
            completed,
            cancelled,
            total: scheduled,
        })
        .collect()
}
