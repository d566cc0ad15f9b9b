//! Application state definitions

use super::catalog::LocationCatalog;
use super::forms::{
    format_number, parse_number, ConsignmentPayload, FieldName, FieldRegistry, FieldValue,
};
use crate::backend::{BackendError, ConsignmentReceipt};
use std::collections::HashMap;

pub const SUCCESS_MESSAGE: &str = "Consignment submitted successfully!";
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Submission failed";
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load locations";

/// Number of focus stops: every field plus the submit button
pub const FOCUS_COUNT: usize = FieldName::ALL.len() + 1;

/// Progress of the location catalog fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready(LocationCatalog),
    Failed,
}

/// Form-level message shown above the fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Error(String),
    Success(String),
}

impl Banner {
    pub fn message(&self) -> &str {
        match self {
            Banner::Error(m) | Banner::Success(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub registry: FieldRegistry,
    pub catalog: CatalogStatus,
    pub banner: Option<Banner>,
    /// A submission is outstanding
    pub submitting: bool,
    /// Focused stop; `FieldName::ALL.len()` is the submit button
    pub active_field: usize,
    /// Text being typed into numeric fields
    drafts: HashMap<FieldName, String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations to offer; empty while loading or after a failed fetch
    pub fn locations(&self) -> Option<&LocationCatalog> {
        match &self.catalog {
            CatalogStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn is_loading_locations(&self) -> bool {
        matches!(self.catalog, CatalogStatus::Loading)
    }

    // Focus

    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field == FieldName::ALL.len()
    }

    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % FOCUS_COUNT;
    }

    pub fn prev_field(&mut self) {
        if self.active_field == 0 {
            self.active_field = FOCUS_COUNT - 1;
        } else {
            self.active_field -= 1;
        }
    }

    // Editing

    /// Text shown for a field: the draft for numeric fields being typed,
    /// otherwise the registry value
    pub fn display_value(&self, name: FieldName) -> String {
        match self.drafts.get(&name) {
            Some(draft) => draft.clone(),
            None => self.registry.get_value(name).display_value(),
        }
    }

    fn set_field(&mut self, name: FieldName, value: FieldValue) {
        if let Err(err) = self.registry.set_field(name, value) {
            tracing::warn!("Rejected write to {name}: {err}");
            return;
        }
        if name == FieldName::Unit {
            self.sync_dimension_drafts();
        }
    }

    /// Reactor writes replace whatever was being typed in the dimensions
    fn sync_dimension_drafts(&mut self) {
        let values = self.registry.get_values(&FieldName::DIMENSIONS);
        for (name, value) in FieldName::DIMENSIONS.into_iter().zip(values) {
            match value.as_number() {
                Some(n) => self.drafts.insert(name, format_number(n)),
                None => self.drafts.remove(&name),
            };
        }
    }

    /// Type a character into the focused numeric field
    pub fn input_char(&mut self, c: char) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if !name.is_numeric() || !(c.is_ascii_digit() || c == '.') {
            return;
        }
        let mut draft = self.display_value(name);
        draft.push(c);
        self.update_draft(name, draft);
    }

    pub fn backspace(&mut self) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if name.is_numeric() {
            let mut draft = self.display_value(name);
            draft.pop();
            self.update_draft(name, draft);
        } else if name.is_location() {
            self.set_field(name, FieldValue::text(""));
        }
    }

    fn update_draft(&mut self, name: FieldName, draft: String) {
        let value = FieldValue::Number(parse_number(&draft));
        self.drafts.insert(name, draft);
        self.set_field(name, value);
    }

    /// Step the focused location or unit selector
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(name) = self.active_field_name() else {
            return;
        };
        if name == FieldName::Unit {
            self.toggle_unit();
            return;
        }
        if !name.is_location() {
            return;
        }
        let Some(catalog) = self.locations() else {
            return;
        };
        let form = self.registry.form();
        let choice = if forward {
            catalog.next_choice(name, form)
        } else {
            catalog.prev_choice(name, form)
        };
        self.set_field(name, FieldValue::Text(choice));
    }

    pub fn toggle_unit(&mut self) {
        let unit = self
            .registry
            .get_value(FieldName::Unit)
            .as_unit()
            .unwrap_or_default();
        self.set_field(FieldName::Unit, FieldValue::unit(unit.toggle()));
    }

    // Boundary events

    pub fn begin_catalog_fetch(&mut self) {
        if matches!(self.banner, Some(Banner::Error(_))) {
            self.banner = None;
        }
        self.catalog = CatalogStatus::Loading;
    }

    pub fn finish_catalog_fetch(&mut self, result: Result<LocationCatalog, BackendError>) {
        match result {
            Ok(catalog) => {
                tracing::info!("Loaded {} locations", catalog.locations.len());
                self.catalog = CatalogStatus::Ready(catalog);
            }
            Err(err) => {
                tracing::warn!("Failed to load locations: {err}");
                let message = err.message().unwrap_or(FETCH_FALLBACK_MESSAGE);
                self.banner = Some(Banner::Error(message.to_string()));
                self.catalog = CatalogStatus::Failed;
            }
        }
    }

    /// Submit is offered only for a fully valid form with nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.registry.is_form_valid()
    }

    /// Take the snapshot to submit and mark the submission in flight
    pub fn begin_submission(&mut self) -> Option<ConsignmentPayload> {
        if self.submitting {
            tracing::debug!("Submission already in flight, ignoring");
            return None;
        }
        if !self.registry.is_form_valid() {
            return None;
        }
        let payload = match self.registry.payload() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("Form valid but incomplete: {err}");
                return None;
            }
        };
        self.banner = None;
        self.submitting = true;
        Some(payload)
    }

    pub fn finish_submission(&mut self, result: Result<ConsignmentReceipt, BackendError>) {
        self.submitting = false;
        match result {
            Ok(receipt) => {
                tracing::info!(
                    consignment_id = receipt.consignment_id.as_deref().unwrap_or("-"),
                    "Consignment submitted"
                );
                self.registry.reset_all();
                self.drafts.clear();
                self.banner = Some(Banner::Success(SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err}");
                let message = err.message().unwrap_or(SUBMIT_FALLBACK_MESSAGE);
                self.banner = Some(Banner::Error(message.to_string()));
            }
        }
    }
}
