//! Field validators
//!
//! Every validator is a pure function of the whole form snapshot, so a
//! field's error can depend on sibling values without hidden lookups.

use super::consignment::ConsignmentForm;
use super::field::FieldName;
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const WEIGHT_MIN_MESSAGE: &str = "Weight must be at least 1kg";
pub const WEIGHT_MAX_MESSAGE: &str = "Weight cannot exceed 1000kg";
pub const HEIGHT_MIN_MESSAGE: &str = "Height must be at least 1";
pub const DEPTH_MIN_MESSAGE: &str = "Depth must be at least 1";
pub const WIDTH_MIN_MESSAGE: &str = "Width must be at least 1";
pub const LOCATIONS_MATCH_MESSAGE: &str = "Source and destination cannot match";

pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 1000.0;
pub const MIN_DIMENSION: f64 = 1.0;

/// Inclusive numeric bound with its own message
#[derive(Debug, Clone, Copy)]
pub struct Bound {
    pub value: f64,
    pub message: &'static str,
}

/// Validator chain declared for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub required: &'static str,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
    /// Sibling whose value must differ from this field's value
    pub distinct_from: Option<FieldName>,
}

impl FieldRules {
    fn required() -> Self {
        Self {
            required: REQUIRED_MESSAGE,
            min: None,
            max: None,
            distinct_from: None,
        }
    }

    fn min(mut self, value: f64, message: &'static str) -> Self {
        self.min = Some(Bound { value, message });
        self
    }

    fn max(mut self, value: f64, message: &'static str) -> Self {
        self.max = Some(Bound { value, message });
        self
    }

    fn distinct_from(mut self, sibling: FieldName) -> Self {
        self.distinct_from = Some(sibling);
        self
    }
}

pub fn rules_for(name: FieldName) -> FieldRules {
    match name {
        FieldName::Source => FieldRules::required().distinct_from(FieldName::Destination),
        FieldName::Destination => FieldRules::required().distinct_from(FieldName::Source),
        FieldName::Weight => FieldRules::required()
            .min(MIN_WEIGHT, WEIGHT_MIN_MESSAGE)
            .max(MAX_WEIGHT, WEIGHT_MAX_MESSAGE),
        FieldName::Height => FieldRules::required().min(MIN_DIMENSION, HEIGHT_MIN_MESSAGE),
        FieldName::Depth => FieldRules::required().min(MIN_DIMENSION, DEPTH_MIN_MESSAGE),
        FieldName::Width => FieldRules::required().min(MIN_DIMENSION, WIDTH_MIN_MESSAGE),
        FieldName::Unit => FieldRules::required(),
    }
}

/// Fields whose validator reads `name`
pub fn dependents(name: FieldName) -> &'static [FieldName] {
    match name {
        FieldName::Source => &[FieldName::Destination],
        FieldName::Destination => &[FieldName::Source],
        _ => &[],
    }
}

/// Run the validator chain for one field; the first failing check wins
pub fn validate_field(name: FieldName, form: &ConsignmentForm) -> Option<String> {
    let rules = rules_for(name);
    let value = form.get(name);

    if value.is_empty() {
        return Some(rules.required.to_string());
    }

    if let Some(n) = value.as_number() {
        if let Some(min) = rules.min {
            if n < min.value {
                return Some(min.message.to_string());
            }
        }
        if let Some(max) = rules.max {
            if n > max.value {
                return Some(max.message.to_string());
            }
        }
    }

    if let Some(sibling) = rules.distinct_from {
        if form.get(sibling) == value {
            return Some(LOCATIONS_MATCH_MESSAGE.to_string());
        }
    }

    None
}

/// Field errors keyed by field; absent means valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationState {
    /// Validate every field against a snapshot
    pub fn compute(form: &ConsignmentForm) -> Self {
        let mut state = Self::default();
        for name in FieldName::ALL {
            state.update(name, validate_field(name, form));
        }
        state
    }

    pub fn update(&mut self, name: FieldName, error: Option<String>) {
        match error {
            Some(message) => {
                self.errors.insert(name, message);
            }
            None => {
                self.errors.remove(&name);
            }
        }
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
