//! Client-roster endpoints.

use std::time::Instant;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{Client, CreateClientRequest, UpdateClientRequest};
use crate::utils::logging;
use crate::utils::retry::retry_with_exponential_backoff;

impl ApiClient {
    /// `GET /clients`. Idempotent, so transient failures are retried.
    pub async fn list_clients(&self) -> AppResult<Vec<Client>> {
        let started = Instant::now();
        let client = self.clone();
        let clients: Vec<Client> = retry_with_exponential_backoff(self.retry_config(), move || {
            let client = client.clone();
            Box::pin(async move {
                let request = client.get("clients")?;
                Ok(client.send(request).await?)
            })
        })
        .await?;
        logging::log_api_call("list", "clients", started.elapsed().as_millis() as u64);
        Ok(clients)
    }

    /// `POST /clients`.
    pub async fn create_client(&self, request: CreateClientRequest) -> AppResult<Client> {
        request.validate()?;
        self.send(self.post("clients")?.json(&request)).await
    }

    /// `PUT /clients/{id}`.
    pub async fn update_client(&self, id: i64, request: UpdateClientRequest) -> AppResult<Client> {
        self.send(self.put(&format!("clients/{}", id))?.json(&request))
            .await
    }

    /// `DELETE /clients/{id}`.
    pub async fn delete_client(&self, id: i64) -> AppResult<()> {
        self.send_no_content(self.delete(&format!("clients/{}", id))?)
            .await
    }
}
