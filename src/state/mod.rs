//! Application state module

mod app_state;
mod catalog;
mod forms;

pub use app_state::*;
pub use catalog::LocationCatalog;
pub use forms::*;
