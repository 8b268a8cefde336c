//! Command handlers module
//!
//! Async handlers behind the iced `Command::perform` calls in main.rs.
//! Each wraps an API round-trip with the logging and error shaping the
//! UI expects, so update() stays a thin dispatcher.

use log::info;

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::models::{
    Appointment, AuthResponse, Client, CreateAppointmentRequest, CreateClientRequest,
    CreateServiceRequest, LoginRequest, Service, UpdateAppointmentRequest,
};

/// Session operation handlers
#[derive(Clone)]
pub struct SessionHandlers {
    api: ApiClient,
}

impl SessionHandlers {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, email: String, password: String) -> AppResult<AuthResponse> {
        self.api.login(LoginRequest::new(email, password)).await
    }

    pub fn logout(&self) {
        self.api.logout();
    }
}

/// Appointment book handlers
#[derive(Clone)]
pub struct BookHandlers {
    api: ApiClient,
}

impl BookHandlers {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_appointments(&self) -> AppResult<Vec<Appointment>> {
        let appointments = self.api.list_appointments().await?;
        info!("Loaded {} appointments", appointments.len());
        Ok(appointments)
    }

    /// Create or reschedule, depending on whether the form was editing.
    pub async fn save_appointment(
        &self,
        editing_id: Option<i64>,
        request: CreateAppointmentRequest,
    ) -> AppResult<Appointment> {
        match editing_id {
            Some(id) => {
                info!("Rescheduling appointment {}", id);
                let update = UpdateAppointmentRequest {
                    service_id: Some(request.service_id),
                    staff_id: request.staff_id,
                    scheduled_at: Some(request.scheduled_at),
                    status: None,
                    notes: request.notes,
                };
                self.api.update_appointment(id, update).await
            }
            None => {
                info!("Booking new appointment");
                self.api.create_appointment(request).await
            }
        }
    }

    pub async fn cancel_appointment(&self, id: i64) -> AppResult<()> {
        info!("Canceling appointment {}", id);
        self.api.cancel_appointment(id).await
    }
}

/// Roster and catalog handlers
#[derive(Clone)]
pub struct RosterHandlers {
    api: ApiClient,
}

impl RosterHandlers {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_clients(&self) -> AppResult<Vec<Client>> {
        let clients = self.api.list_clients().await?;
        info!("Loaded {} clients", clients.len());
        Ok(clients)
    }

    pub async fn add_client(&self, request: CreateClientRequest) -> AppResult<Client> {
        info!("Adding client: {}", request.name);
        self.api.create_client(request).await
    }

    pub async fn delete_client(&self, id: i64) -> AppResult<()> {
        info!("Removing client {}", id);
        self.api.delete_client(id).await
    }

    pub async fn load_services(&self) -> AppResult<Vec<Service>> {
        let services = self.api.list_services().await?;
        info!("Loaded {} services", services.len());
        Ok(services)
    }

    pub async fn add_service(&self, request: CreateServiceRequest) -> AppResult<Service> {
        info!("Adding service: {}", request.name);
        self.api.create_service(request).await
    }

    pub async fn delete_service(&self, id: i64) -> AppResult<()> {
        info!("Retiring service {}", id);
        self.api.delete_service(id).await
    }
}

/// Command handler factory
pub struct CommandHandlers {
    pub session: SessionHandlers,
    pub book: BookHandlers,
    pub roster: RosterHandlers,
}

impl CommandHandlers {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            session: SessionHandlers::new(api.clone()),
            book: BookHandlers::new(api.clone()),
            roster: RosterHandlers::new(api.clone()),
        }
    }
}
