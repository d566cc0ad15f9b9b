//! Field registry: single source of truth for values and their validity

use super::consignment::{ConsignmentForm, ConsignmentPayload, FormError};
use super::conversion;
use super::field::{FieldName, FieldValue};
use super::validation::{dependents, validate_field, ValidationState};
use std::collections::BTreeSet;

/// Holds the form snapshot plus the inline errors of written fields
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    form: ConsignmentForm,
    errors: ValidationState,
    touched: BTreeSet<FieldName>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, e.g. a programmatic pre-fill.
    /// Nothing counts as touched yet.
    #[cfg(test)]
    pub fn with_form(form: ConsignmentForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// Write a value, revalidate the field and every field that reads it.
    ///
    /// A write to `unit` also rewrites the dimensions in the same call, each
    /// through this same write path.
    pub fn set_field(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        let previous_unit = self.form.unit;
        self.write(name, value)?;

        if name == FieldName::Unit {
            let writes = conversion::react(previous_unit, self.form.unit, &self.form);
            if !writes.is_empty() {
                tracing::debug!(
                    from = ?previous_unit,
                    to = ?self.form.unit,
                    "converting dimensions"
                );
            }
            for (dimension, converted) in writes {
                self.write(dimension, converted)?;
            }
        }

        Ok(())
    }

    fn write(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        self.form.set(name, value)?;
        self.touched.insert(name);
        self.errors.update(name, self.validate(name));
        for &dependent in dependents(name) {
            if self.touched.contains(&dependent) {
                self.errors.update(dependent, self.validate(dependent));
            }
        }
        Ok(())
    }

    pub fn get_value(&self, name: FieldName) -> FieldValue {
        self.form.get(name)
    }

    pub fn get_values(&self, names: &[FieldName]) -> Vec<FieldValue> {
        names.iter().map(|&name| self.form.get(name)).collect()
    }

    /// Run the validator chain for one field against the current snapshot
    pub fn validate(&self, name: FieldName) -> Option<String> {
        validate_field(name, &self.form)
    }

    /// Full validation of every field, touched or not
    pub fn validation_state(&self) -> ValidationState {
        ValidationState::compute(&self.form)
    }

    /// Inline error for a field that has been written
    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    #[cfg(test)]
    pub fn is_touched(&self, name: FieldName) -> bool {
        self.touched.contains(&name)
    }

    /// True only when every field passes, including untouched ones
    pub fn is_form_valid(&self) -> bool {
        self.validation_state().is_valid()
    }

    pub fn form(&self) -> &ConsignmentForm {
        &self.form
    }

    pub fn payload(&self) -> Result<ConsignmentPayload, FormError> {
        self.form.to_payload()
    }

    /// Restore defaults and forget all errors. The unit conversion does not fire.
    pub fn reset_all(&mut self) {
        self.form = ConsignmentForm::default();
        self.errors.clear();
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::Unit;
    use crate::state::forms::validation::{
        HEIGHT_MIN_MESSAGE, LOCATIONS_MATCH_MESSAGE, REQUIRED_MESSAGE, WEIGHT_MAX_MESSAGE,
        WEIGHT_MIN_MESSAGE,
    };

    fn filled_registry() -> FieldRegistry {
        let mut registry = FieldRegistry::new();
        registry
            .set_field(FieldName::Source, FieldValue::text("Perth"))
            .unwrap();
        registry
            .set_field(FieldName::Destination, FieldValue::text("Sydney"))
            .unwrap();
        registry
            .set_field(FieldName::Weight, FieldValue::number(10.0))
            .unwrap();
        registry
            .set_field(FieldName::Height, FieldValue::number(20.0))
            .unwrap();
        registry
            .set_field(FieldName::Depth, FieldValue::number(30.0))
            .unwrap();
        registry
            .set_field(FieldName::Width, FieldValue::number(40.0))
            .unwrap();
        registry
    }

    mod set_field {
        use super::*;

        #[test]
        fn test_write_then_read() {
            let mut registry = FieldRegistry::new();
            registry
                .set_field(FieldName::Weight, FieldValue::number(12.0))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Weight), FieldValue::number(12.0));
            assert!(registry.is_touched(FieldName::Weight));
        }

        #[test]
        fn test_get_values_preserves_order() {
            let registry = filled_registry();
            let values = registry.get_values(&[FieldName::Width, FieldName::Height, FieldName::Depth]);
            assert_eq!(
                values,
                vec![
                    FieldValue::number(40.0),
                    FieldValue::number(20.0),
                    FieldValue::number(30.0)
                ]
            );
        }

        #[test]
        fn test_wrong_kind_is_rejected_without_side_effects() {
            let mut registry = FieldRegistry::new();
            assert!(registry
                .set_field(FieldName::Source, FieldValue::number(1.0))
                .is_err());
            assert!(!registry.is_touched(FieldName::Source));
            assert!(registry.error(FieldName::Source).is_none());
        }

        #[test]
        fn test_error_tracks_latest_value() {
            let mut registry = FieldRegistry::new();
            registry
                .set_field(FieldName::Weight, FieldValue::number(0.0))
                .unwrap();
            assert_eq!(registry.error(FieldName::Weight), Some(WEIGHT_MIN_MESSAGE));
            registry
                .set_field(FieldName::Weight, FieldValue::number(1001.0))
                .unwrap();
            assert_eq!(registry.error(FieldName::Weight), Some(WEIGHT_MAX_MESSAGE));
            registry
                .set_field(FieldName::Weight, FieldValue::Number(None))
                .unwrap();
            assert_eq!(registry.error(FieldName::Weight), Some(REQUIRED_MESSAGE));
            registry
                .set_field(FieldName::Weight, FieldValue::number(1000.0))
                .unwrap();
            assert!(registry.error(FieldName::Weight).is_none());
        }

        #[test]
        fn test_untouched_fields_show_no_inline_error() {
            let mut registry = FieldRegistry::new();
            registry
                .set_field(FieldName::Weight, FieldValue::number(5.0))
                .unwrap();
            assert!(registry.error(FieldName::Height).is_none());
            assert_eq!(
                registry.validate(FieldName::Height).as_deref(),
                Some(REQUIRED_MESSAGE)
            );
        }
    }

    mod cross_field {
        use super::*;

        #[test]
        fn test_changing_destination_revalidates_source() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Destination, FieldValue::text("Perth"))
                .unwrap();
            assert_eq!(registry.error(FieldName::Source), Some(LOCATIONS_MATCH_MESSAGE));
            assert_eq!(
                registry.error(FieldName::Destination),
                Some(LOCATIONS_MATCH_MESSAGE)
            );

            registry
                .set_field(FieldName::Source, FieldValue::text("Darwin"))
                .unwrap();
            assert!(registry.error(FieldName::Source).is_none());
            assert!(registry.error(FieldName::Destination).is_none());
        }

        #[test]
        fn test_matching_locations_never_valid() {
            for location in ["Perth", "Sydney", "Hobart"] {
                let mut registry = filled_registry();
                registry
                    .set_field(FieldName::Source, FieldValue::text(location))
                    .unwrap();
                registry
                    .set_field(FieldName::Destination, FieldValue::text(location))
                    .unwrap();
                assert!(!registry.is_form_valid(), "{location}");
            }
        }

        #[test]
        fn test_prefilled_matching_pair_is_rejected() {
            let form = ConsignmentForm {
                source: "Perth".to_string(),
                destination: "Perth".to_string(),
                weight: Some(10.0),
                width: Some(1.0),
                height: Some(1.0),
                depth: Some(1.0),
                unit: Some(Unit::Centimetres),
            };
            let registry = FieldRegistry::with_form(form);
            assert!(!registry.is_form_valid());
            assert_eq!(
                registry.validate(FieldName::Source).as_deref(),
                Some(LOCATIONS_MATCH_MESSAGE)
            );
        }
    }

    mod aggregate {
        use super::*;

        #[test]
        fn test_new_form_is_invalid() {
            assert!(!FieldRegistry::new().is_form_valid());
        }

        #[test]
        fn test_filled_form_is_valid() {
            let registry = filled_registry();
            assert!(registry.is_form_valid());
            assert!(registry.validation_state().is_valid());
        }

        #[test]
        fn test_one_untouched_field_blocks_validity() {
            let mut registry = FieldRegistry::new();
            registry
                .set_field(FieldName::Source, FieldValue::text("Perth"))
                .unwrap();
            registry
                .set_field(FieldName::Destination, FieldValue::text("Sydney"))
                .unwrap();
            registry
                .set_field(FieldName::Weight, FieldValue::number(10.0))
                .unwrap();
            registry
                .set_field(FieldName::Height, FieldValue::number(20.0))
                .unwrap();
            registry
                .set_field(FieldName::Depth, FieldValue::number(30.0))
                .unwrap();
            assert!(!registry.is_form_valid());
            registry
                .set_field(FieldName::Width, FieldValue::number(40.0))
                .unwrap();
            assert!(registry.is_form_valid());
        }

        #[test]
        fn test_validity_follows_edits() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Weight, FieldValue::number(0.5))
                .unwrap();
            assert!(!registry.is_form_valid());
            registry
                .set_field(FieldName::Weight, FieldValue::number(1.0))
                .unwrap();
            assert!(registry.is_form_valid());
        }
    }

    mod unit_conversion {
        use super::*;

        #[test]
        fn test_round_trip_is_exact() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Height, FieldValue::number(10.0))
                .unwrap();

            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(1000.0));

            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Centimetres))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(10.0));
        }

        #[test]
        fn test_decimal_height_converts_cleanly() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Height, FieldValue::number(1.15))
                .unwrap();

            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
                .unwrap();
            let height = registry.get_value(FieldName::Height);
            assert_eq!(height, FieldValue::number(115.0));
            assert_eq!(height.display_value(), "115");

            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Centimetres))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(1.15));
        }

        #[test]
        fn test_same_unit_does_not_convert() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Centimetres))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(20.0));
        }

        #[test]
        fn test_clearing_unit_does_not_convert() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Unit, FieldValue::Unit(None))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Width), FieldValue::number(40.0));
            assert_eq!(registry.error(FieldName::Unit), Some(REQUIRED_MESSAGE));
            assert!(!registry.is_form_valid());
        }

        #[test]
        fn test_small_dimension_fails_after_divide() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
                .unwrap();
            registry
                .set_field(FieldName::Height, FieldValue::number(50.0))
                .unwrap();
            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Centimetres))
                .unwrap();

            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(0.5));
            assert_eq!(registry.error(FieldName::Height), Some(HEIGHT_MIN_MESSAGE));
            assert!(!registry.is_form_valid());
        }

        #[test]
        fn test_unset_dimensions_surface_min_error() {
            let mut registry = FieldRegistry::new();
            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
                .unwrap();
            assert_eq!(registry.get_value(FieldName::Height), FieldValue::number(0.0));
            assert_eq!(registry.error(FieldName::Height), Some(HEIGHT_MIN_MESSAGE));
            assert!(registry.is_touched(FieldName::Width));
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn test_reset_restores_defaults() {
            let mut registry = filled_registry();
            registry
                .set_field(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
                .unwrap();
            registry
                .set_field(FieldName::Weight, FieldValue::number(0.0))
                .unwrap();

            registry.reset_all();

            assert_eq!(registry.form(), &ConsignmentForm::default());
            assert!(registry.error(FieldName::Weight).is_none());
            assert!(!registry.is_touched(FieldName::Weight));
            assert_eq!(
                registry.get_value(FieldName::Height),
                FieldValue::Number(None)
            );
            assert!(!registry.is_form_valid());
        }
    }
}
