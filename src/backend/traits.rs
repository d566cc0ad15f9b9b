//! Trait abstraction for the backend to enable mocking in tests

use super::error::BackendError;
use crate::state::{ConsignmentPayload, LocationCatalog, Unit};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Dimensions as echoed back in a receipt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Acknowledgement of an accepted consignment. Every field is optional on
/// the wire; only the success status matters to the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsignmentReceipt {
    pub consignment_id: Option<String>,
    pub source: String,
    pub destination: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub units: Unit,
}

impl ConsignmentReceipt {
    pub fn echo(consignment_id: String, payload: &ConsignmentPayload) -> Self {
        Self {
            consignment_id: Some(consignment_id),
            source: payload.source.clone(),
            destination: payload.destination.clone(),
            weight: payload.weight,
            dimensions: Dimensions {
                width: payload.width,
                height: payload.height,
                depth: payload.depth,
            },
            units: payload.unit,
        }
    }
}

/// Boundary operations the form depends on. Each call is one-shot:
/// no retry and no timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsignmentBackend: Send + Sync {
    /// Fetch the list of valid locations
    async fn fetch_locations(&self) -> Result<LocationCatalog, BackendError>;

    /// Submit a complete consignment
    async fn submit_consignment(
        &self,
        payload: &ConsignmentPayload,
    ) -> Result<ConsignmentReceipt, BackendError>;
}
