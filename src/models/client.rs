use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub salon_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl CreateClientRequest {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: utils::normalize_name(name),
            email: none_if_empty(email),
            phone: none_if_empty(phone),
            notes: None,
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::invalid_input("Client name is required"));
        }
        if let Some(email) = &self.email {
            if !utils::looks_like_email(email) {
                return Err(AppError::invalid_input("Enter a valid email address"));
            }
        }
        if let Some(phone) = &self.phone {
            if !utils::looks_like_phone(phone) {
                return Err(AppError::invalid_input("Enter a valid phone number"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_request_normalizes_fields() {
        let req = CreateClientRequest::new("  Joana  Prado ", " ", "555-123-4567");
        assert_eq!(req.name, "Joana Prado");
        assert_eq!(req.email, None);
        assert_eq!(req.phone, Some("555-123-4567".to_string()));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_client_request_rejects_empty_name() {
        let req = CreateClientRequest::new("   ", "", "");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_client_request_rejects_bad_email() {
        let req = CreateClientRequest::new("Joana", "not-email", "");
        assert!(req.validate().is_err());
    }
}
