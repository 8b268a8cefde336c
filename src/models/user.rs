use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::ui_state::View;

/// Staff roles recognized by the backend. Navigation is filtered by role;
/// the backend enforces the real permissions on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Stylist,
    Receptionist,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Stylist => "stylist",
            Role::Receptionist => "receptionist",
        }
    }

    /// Static lookup of the views a role may open.
    pub fn accessible_views(&self) -> &'static [View] {
        match self {
            Role::Admin | Role::Manager => &[
                View::Appointments,
                View::Clients,
                View::Services,
                View::Settings,
            ],
            Role::Receptionist => &[View::Appointments, View::Clients, View::Settings],
            Role::Stylist => &[View::Appointments, View::Settings],
        }
    }

    pub fn can_access(&self, view: View) -> bool {
        self.accessible_views().contains(&view)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub salon_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Self {
        Self {
            email: email.trim().to_string(),
            password,
        }
    }

    /// Boundary validation before the credentials leave the process.
    pub fn validate(&self) -> AppResult<()> {
        if !crate::utils::looks_like_email(&self.email) {
            return Err(AppError::invalid_input("Enter a valid email address"));
        }
        if self.password.is_empty() {
            return Err(AppError::invalid_input("Password is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
