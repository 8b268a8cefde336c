// Declare modules
pub mod appointment;
pub mod client;
pub mod service;
pub mod user;

// Re-export all public types so callers can keep flat imports like
// `use salonbook::models::Appointment`.
pub use appointment::{
    Appointment, AppointmentStatus, CreateAppointmentRequest, UpdateAppointmentRequest,
};
pub use client::{Client, CreateClientRequest, UpdateClientRequest};
pub use service::{CreateServiceRequest, Service, UpdateServiceRequest};
pub use user::{AuthResponse, LoginRequest, Role, User};
