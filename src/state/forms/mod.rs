//! Consignment form engine
//!
//! This module provides the field registry and everything it runs on a write:
//! - `field`: field names and typed values
//! - `consignment`: the form snapshot and its wire payload
//! - `validation`: per-field validator chains
//! - `conversion`: dimension rewrites when the unit changes
//! - `registry`: value store, revalidation and aggregate validity

mod consignment;
mod conversion;
mod field;
mod registry;
mod validation;

pub use consignment::{ConsignmentForm, ConsignmentPayload};
pub use field::{format_number, parse_number, FieldName, FieldValue, Unit};
pub use registry::FieldRegistry;
