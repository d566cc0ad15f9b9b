//! In-process stand-in for the backend, used during development

use super::error::BackendError;
use super::traits::{ConsignmentBackend, ConsignmentReceipt};
use crate::state::{ConsignmentPayload, LocationCatalog};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

/// Locations served by the development backend
pub const MOCK_LOCATIONS: [&str; 8] = [
    "Perth",
    "Sydney",
    "Melbourne",
    "Brisbane",
    "Adelaide",
    "Darwin",
    "Hobart",
    "Canberra",
];

/// Serves a fixed catalog and accepts every submission
#[derive(Debug, Clone, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

/// `CNS-<unix millis>-<four digits>`
fn consignment_id() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!("CNS-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[async_trait]
impl ConsignmentBackend for MockBackend {
    async fn fetch_locations(&self) -> Result<LocationCatalog, BackendError> {
        Ok(LocationCatalog::new(
            MOCK_LOCATIONS.iter().map(|l| l.to_string()).collect(),
        ))
    }

    async fn submit_consignment(
        &self,
        payload: &ConsignmentPayload,
    ) -> Result<ConsignmentReceipt, BackendError> {
        Ok(ConsignmentReceipt::echo(consignment_id(), payload))
    }
}
