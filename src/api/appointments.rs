//! Appointment endpoints.
//!
//! The backend owns the booking rules: overlap detection and double-booking
//! prevention surface here as plain API errors (409 from `create`/`update`),
//! never as client-side checks.

use std::time::Instant;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::utils::logging;
use crate::utils::retry::retry_with_exponential_backoff;

impl ApiClient {
    /// `GET /appointments`. Idempotent, so transient failures are retried.
    pub async fn list_appointments(&self) -> AppResult<Vec<Appointment>> {
        let started = Instant::now();
        let client = self.clone();
        let appointments: Vec<Appointment> =
            retry_with_exponential_backoff(self.retry_config(), move || {
                let client = client.clone();
                Box::pin(async move {
                    let request = client.get("appointments")?;
                    Ok(client.send(request).await?)
                })
            })
            .await?;
        logging::log_api_call("list", "appointments", started.elapsed().as_millis() as u64);
        Ok(appointments)
    }

    /// `POST /appointments`.
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
    ) -> AppResult<Appointment> {
        request.validate()?;
        self.send(self.post("appointments")?.json(&request)).await
    }

    /// `PUT /appointments/{id}`.
    pub async fn update_appointment(
        &self,
        id: i64,
        request: UpdateAppointmentRequest,
    ) -> AppResult<Appointment> {
        request.validate()?;
        self.send(
            self.put(&format!("appointments/{}", id))?.json(&request),
        )
        .await
    }

    /// `DELETE /appointments/{id}` - cancels the booking.
    pub async fn cancel_appointment(&self, id: i64) -> AppResult<()> {
        self.send_no_content(self.delete(&format!("appointments/{}", id))?)
            .await
    }
}
