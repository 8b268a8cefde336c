//! Integration tests for the REST layer's wire shapes: the JSON the backend
//! sends and the request bodies the client emits, plus the error taxonomy
//! the UI relies on.

use salonbook::error::AppError;
use salonbook::models::{
    Appointment, AppointmentStatus, AuthResponse, Client, CreateAppointmentRequest,
    CreateClientRequest, Role, Service,
};

// --- Wire shapes ---

#[test]
fn appointment_deserializes_from_backend_json() {
    let json = r#"{
        "id": 41,
        "salon_id": 1,
        "client_id": 7,
        "client_name": "Joana Prado",
        "service_id": 3,
        "service_name": "Haircut",
        "staff_id": null,
        "scheduled_at": "2025-06-15T16:30:00Z",
        "duration_minutes": 45,
        "status": "scheduled",
        "notes": "first visit",
        "created_at": "2025-06-01T12:00:00Z",
        "updated_at": "2025-06-01T12:00:00Z"
    }"#;
    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.id, 41);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.staff_id, None);
    assert_eq!(appointment.notes.as_deref(), Some("first visit"));
}

#[test]
fn auth_response_carries_role() {
    let json = r#"{
        "token": "abc.def.ghi",
        "user": {
            "id": 2,
            "name": "Ana Souza",
            "email": "ana@salon.com",
            "role": "receptionist",
            "salon_id": 1
        }
    }"#;
    let auth: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(auth.user.role, Role::Receptionist);
    assert_eq!(auth.token, "abc.def.ghi");
}

#[test]
fn optional_client_fields_round_trip_as_null() {
    let json = r#"{
        "id": 7,
        "salon_id": 1,
        "name": "Joana Prado",
        "email": null,
        "phone": "555-123-4567",
        "notes": null,
        "created_at": "2025-06-01T12:00:00Z"
    }"#;
    let client: Client = serde_json::from_str(json).unwrap();
    assert_eq!(client.email, None);
    assert_eq!(client.phone.as_deref(), Some("555-123-4567"));
}

#[test]
fn create_appointment_request_sends_schedule_verbatim() {
    // The selector's committed timestamp must reach the wire untouched,
    // offset included.
    let request = CreateAppointmentRequest {
        client_id: 7,
        service_id: 3,
        staff_id: Some(2),
        scheduled_at: "2025-06-15T11:30:00-05:00".to_string(),
        notes: None,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["scheduled_at"], "2025-06-15T11:30:00-05:00");
    assert_eq!(value["client_id"], 7);
    assert!(value["notes"].is_null());
}

#[test]
fn service_deserializes_with_price_in_cents() {
    let json = r#"{
        "id": 3,
        "salon_id": 1,
        "name": "Haircut",
        "duration_minutes": 45,
        "price_cents": 3500,
        "active": true
    }"#;
    let service: Service = serde_json::from_str(json).unwrap();
    assert_eq!(service.price_display(), "$35.00");
}

#[test]
fn appointment_status_covers_backend_variants() {
    for (raw, status) in [
        ("scheduled", AppointmentStatus::Scheduled),
        ("completed", AppointmentStatus::Completed),
        ("canceled", AppointmentStatus::Canceled),
        ("no_show", AppointmentStatus::NoShow),
    ] {
        let parsed: AppointmentStatus =
            serde_json::from_str(&format!("\"{}\"", raw)).unwrap();
        assert_eq!(parsed, status);
    }
}

// --- Request validation at the boundary ---

#[test]
fn appointment_request_rejects_unparseable_schedule() {
    let request = CreateAppointmentRequest {
        client_id: 7,
        service_id: 3,
        staff_id: None,
        scheduled_at: "soon".to_string(),
        notes: None,
    };
    assert!(matches!(request.validate(), Err(AppError::InvalidInput(_))));
}

#[test]
fn client_request_normalizes_before_validation() {
    let request = CreateClientRequest::new(" Maria   do Carmo ", "", "555 123 4567");
    assert_eq!(request.name, "Maria do Carmo");
    assert_eq!(request.email, None);
    assert!(request.validate().is_ok());
}

// --- Error taxonomy ---

#[test]
fn display_safe_errors_pass_through() {
    let err = AppError::api(409, "time slot already booked");
    assert_eq!(
        err.to_safe_string(),
        "API error (409): time slot already booked"
    );
}

#[test]
fn transport_errors_are_masked() {
    let err = AppError::Anyhow(anyhow::anyhow!("http://10.0.0.3/api?token=s3cret refused"));
    assert_eq!(err.to_safe_string(), "Operation failed");
}
