use crate::models::{Appointment, AuthResponse, Client, Service};
use crate::picker::PickerMessage;
use crate::ui::{ClientChoice, ServiceChoice};

/// Unified application message type
///
/// This enum handles all message types throughout the application.
/// Messages are organized by domain for better maintainability.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation Messages =====
    /// Switch to the appointments view
    ShowAppointments,
    /// Switch to the clients view
    ShowClients,
    /// Switch to the services view
    ShowServices,
    /// Switch to the settings view
    ShowSettings,

    // ===== Session Messages =====
    /// Update login email input
    LoginEmailChanged(String),
    /// Update login password input
    LoginPasswordChanged(String),
    /// Submit the login form
    SubmitLogin,
    /// Login round-trip completed
    LoggedIn(Result<AuthResponse, String>),
    /// Drop the session token and return to the login form
    Logout,

    // ===== Data Refresh Messages =====
    /// Manual refresh of the appointment book
    Refresh,
    /// Periodic refresh tick while signed in
    RefreshTick,
    /// Appointments reloaded
    AppointmentsLoaded(Result<Vec<Appointment>, String>),
    /// Clients reloaded
    ClientsLoaded(Result<Vec<Client>, String>),
    /// Services reloaded
    ServicesLoaded(Result<Vec<Service>, String>),

    // ===== Appointment Form Messages =====
    /// Open the form for a new appointment
    NewAppointment,
    /// Open the form pre-filled from an existing appointment
    EditAppointment(i64),
    /// Client chosen in the form pick list
    AppointmentClientPicked(ClientChoice),
    /// Service chosen in the form pick list
    AppointmentServicePicked(ServiceChoice),
    /// Update the notes field
    AppointmentNotesChanged(String),
    /// Open the date/time selector for the schedule field
    OpenSchedulePicker,
    /// Message forwarded to the open date/time selector
    Picker(PickerMessage),
    /// Submit the appointment form
    SubmitAppointmentForm,
    /// Close the appointment form without saving
    DismissAppointmentForm,
    /// Create/update round-trip completed
    AppointmentSaved(Result<Appointment, String>),
    /// Request cancellation of a booked appointment
    CancelAppointment(i64),
    /// Cancellation round-trip completed
    AppointmentCanceled(Result<(), String>),

    // ===== Client Management Messages =====
    /// Update client name input
    ClientNameChanged(String),
    /// Update client email input
    ClientEmailChanged(String),
    /// Update client phone input
    ClientPhoneChanged(String),
    /// Submit the new-client form
    AddClient,
    /// Client creation completed
    ClientAdded(Result<Client, String>),
    /// Request deletion of a client
    DeleteClient(i64),
    /// Client deletion completed
    ClientDeleted(Result<(), String>),

    // ===== Service Management Messages =====
    /// Update service name input
    ServiceNameChanged(String),
    /// Update service duration input (minutes)
    ServiceDurationChanged(String),
    /// Update service price input (e.g. "35.00")
    ServicePriceChanged(String),
    /// Submit the new-service form
    AddService,
    /// Service creation completed
    ServiceAdded(Result<Service, String>),
    /// Request deactivation of a service
    DeleteService(i64),
    /// Service deactivation completed
    ServiceDeleted(Result<(), String>),
}
