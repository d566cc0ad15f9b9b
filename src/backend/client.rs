//! HTTP client for the consignment backend
//!
//! Talks JSON to the two endpoints the form needs: the location list and the
//! consignment submission.

use super::error::BackendError;
use super::traits::{ConsignmentBackend, ConsignmentReceipt};
use crate::state::{ConsignmentPayload, LocationCatalog};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

const LOCATIONS_PATH: &str = "/api/location";
const SUBMIT_PATH: &str = "/api/submit-consignment";

/// Failure body returned with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the consignment HTTP backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    address: String,
}

impl HttpBackend {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            address,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// Turn a non-success response into `Rejected`, keeping the body's message
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(BackendError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ConsignmentBackend for HttpBackend {
    async fn fetch_locations(&self) -> Result<LocationCatalog, BackendError> {
        let response = self.http.get(self.url(LOCATIONS_PATH)).send().await?;
        let catalog = check_status(response).await?.json().await?;
        Ok(catalog)
    }

    async fn submit_consignment(
        &self,
        payload: &ConsignmentPayload,
    ) -> Result<ConsignmentReceipt, BackendError> {
        let response = self
            .http
            .post(self.url(SUBMIT_PATH))
            .json(payload)
            .send()
            .await?;
        let response = check_status(response).await?;

        // The consignment is accepted at this point; a body we cannot read
        // only costs us the echoed details.
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!("Could not read submission acknowledgement: {err}");
                return Ok(ConsignmentReceipt::default());
            }
        };
        match serde_json::from_slice(&body) {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                tracing::debug!("Unrecognised submission acknowledgement: {err}");
                Ok(ConsignmentReceipt::default())
            }
        }
    }
}
