//! Service-catalog endpoints.

use std::time::Instant;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{CreateServiceRequest, Service, UpdateServiceRequest};
use crate::utils::logging;
use crate::utils::retry::retry_with_exponential_backoff;

impl ApiClient {
    /// `GET /services`. Idempotent, so transient failures are retried.
    pub async fn list_services(&self) -> AppResult<Vec<Service>> {
        let started = Instant::now();
        let client = self.clone();
        let services: Vec<Service> = retry_with_exponential_backoff(self.retry_config(), move || {
            let client = client.clone();
            Box::pin(async move {
                let request = client.get("services")?;
                Ok(client.send(request).await?)
            })
        })
        .await?;
        logging::log_api_call("list", "services", started.elapsed().as_millis() as u64);
        Ok(services)
    }

    /// `POST /services`.
    pub async fn create_service(&self, request: CreateServiceRequest) -> AppResult<Service> {
        request.validate()?;
        self.send(self.post("services")?.json(&request)).await
    }

    /// `PUT /services/{id}`.
    pub async fn update_service(
        &self,
        id: i64,
        request: UpdateServiceRequest,
    ) -> AppResult<Service> {
        self.send(self.put(&format!("services/{}", id))?.json(&request))
            .await
    }

    /// `DELETE /services/{id}` - deactivates the service.
    pub async fn delete_service(&self, id: i64) -> AppResult<()> {
        self.send_no_content(self.delete(&format!("services/{}", id))?)
            .await
    }
}
