use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Canceled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Canceled => "canceled",
            AppointmentStatus::NoShow => "no_show",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub salon_id: i64,
    pub client_id: i64,
    pub client_name: String,
    pub service_id: i64,
    pub service_name: String,
    pub staff_id: Option<i64>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn minutes_until_start(&self) -> i64 {
        let now = Utc::now();
        (self.scheduled_at - now).num_minutes()
    }

    pub fn is_past(&self) -> bool {
        self.scheduled_at < Utc::now()
    }

    /// Whether the appointment falls on today's local calendar date.
    pub fn is_today(&self) -> bool {
        self.scheduled_at.with_timezone(&Local).date_naive() == Local::now().date_naive()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, AppointmentStatus::Scheduled)
    }
}

/// Body of `POST /appointments`. `scheduled_at` carries the timestamp the
/// date/time selector committed, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub client_id: i64,
    pub service_id: i64,
    pub staff_id: Option<i64>,
    pub scheduled_at: String,
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.client_id <= 0 {
            return Err(AppError::invalid_input("Select a client"));
        }
        if self.service_id <= 0 {
            return Err(AppError::invalid_input("Select a service"));
        }
        if DateTime::parse_from_rfc3339(&self.scheduled_at).is_err() {
            return Err(AppError::invalid_input("Pick a date and time"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub service_id: Option<i64>,
    pub staff_id: Option<i64>,
    pub scheduled_at: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl UpdateAppointmentRequest {
    pub fn validate(&self) -> AppResult<()> {
        if let Some(ts) = &self.scheduled_at {
            if DateTime::parse_from_rfc3339(ts).is_err() {
                return Err(AppError::invalid_input("Pick a date and time"));
            }
        }
        Ok(())
    }
}
