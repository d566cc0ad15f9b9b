//! Backend collaborators: location catalog and submission sink

mod client;
mod error;
mod mock;
mod traits;

pub use client::HttpBackend;
pub use error::BackendError;
pub use mock::MockBackend;
pub use traits::{ConsignmentBackend, ConsignmentReceipt, Dimensions};

#[cfg(test)]
pub use traits::MockConsignmentBackend;
