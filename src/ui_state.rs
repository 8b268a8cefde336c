//! UI state management module
//!
//! All presentation-only state lives here, separated from the API layer and
//! the domain models.

use crate::models::User;
use crate::picker::DateTimePicker;

/// UI view states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Appointments,
    Clients,
    Services,
    Settings,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Appointments => "Appointments",
            View::Clients => "Clients",
            View::Services => "Services",
            View::Settings => "Settings",
        }
    }
}

/// Draft state of the appointment create/edit form. The schedule picker is
/// created on open and dropped on apply/cancel; its draft never leaks into
/// `scheduled_at` except through an applied event.
pub struct AppointmentForm {
    /// None when creating, Some(id) when editing.
    pub editing_id: Option<i64>,
    pub client_id: Option<i64>,
    pub service_id: Option<i64>,
    pub notes: String,
    /// Committed interchange timestamp, set only by the picker's apply.
    pub scheduled_at: Option<String>,
    /// Live preview of the picker draft; informational only.
    pub schedule_preview: Option<String>,
    pub picker: Option<DateTimePicker>,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self {
            editing_id: None,
            client_id: None,
            service_id: None,
            notes: String::new(),
            scheduled_at: None,
            schedule_preview: None,
            picker: None,
        }
    }
}

impl Default for AppointmentForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Application UI state
pub struct UiState {
    /// Current active view
    pub current_view: View,

    /// Signed-in user, when authenticated
    pub user: Option<User>,

    /// Login form fields
    pub login_email: String,
    pub login_password: String,

    /// Status line shown in the sidebar
    pub status: String,

    /// Whether an async operation is in progress
    pub loading: bool,

    /// Timestamp of last successful data refresh
    pub last_refresh: Option<chrono::DateTime<chrono::Utc>>,

    /// Appointment form, when open
    pub appointment_form: Option<AppointmentForm>,

    /// Client form fields
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,

    /// Service form fields
    pub service_name: String,
    pub service_duration: String,
    pub service_price: String,
}

impl UiState {
    /// Create new UI state with default values
    pub fn new() -> Self {
        Self {
            current_view: View::Settings,
            user: None,
            login_email: String::new(),
            login_password: String::new(),
            status: "Not signed in".to_string(),
            loading: false,
            last_refresh: None,
            appointment_form: None,
            client_name: String::new(),
            client_email: String::new(),
            client_phone: String::new(),
            service_name: String::new(),
            service_duration: String::new(),
            service_price: String::new(),
        }
    }

    pub fn clear_client_form(&mut self) {
        self.client_name.clear();
        self.client_email.clear();
        self.client_phone.clear();
    }

    pub fn clear_service_form(&mut self) {
        self.service_name.clear();
        self.service_duration.clear();
        self.service_price.clear();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
