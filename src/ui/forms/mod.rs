//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `consignment_form`: The consignment form and its location list

mod consignment_form;
mod field_renderer;

pub use consignment_form::draw_consignment_form;
