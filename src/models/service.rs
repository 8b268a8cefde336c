use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub salon_id: i64,
    pub name: String,
    pub duration_minutes: u32,
    pub price_cents: i64,
    pub active: bool,
}

impl Service {
    pub fn price_display(&self) -> String {
        utils::format_price_cents(self.price_cents)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_minutes: u32,
    pub price_cents: i64,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("Service name is required"));
        }
        if self.duration_minutes == 0 {
            return Err(AppError::invalid_input(
                "Service duration must be at least one minute",
            ));
        }
        if self.price_cents < 0 {
            return Err(AppError::invalid_input("Price cannot be negative"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub duration_minutes: Option<u32>,
    pub price_cents: Option<i64>,
    pub active: Option<bool>,
}
