//! Location catalog and the choices offered for source/destination

use super::forms::{ConsignmentForm, FieldName};
use serde::{Deserialize, Serialize};

/// Ordered list of valid locations, as served by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCatalog {
    pub locations: Vec<String>,
}

/// One entry of a location dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOption<'a> {
    pub label: &'a str,
    /// Selected as the sibling field's value, so picking it here is blocked
    pub disabled: bool,
    pub selected: bool,
}

impl LocationCatalog {
    pub fn new(locations: Vec<String>) -> Self {
        Self { locations }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Options for a location field, with the sibling's value marked disabled
    pub fn options_for(&self, field: FieldName, form: &ConsignmentForm) -> Vec<LocationOption<'_>> {
        let (own, sibling) = location_pair(field, form);
        self.locations
            .iter()
            .map(|location| LocationOption {
                label: location,
                disabled: !sibling.is_empty() && location == sibling,
                selected: location == own,
            })
            .collect()
    }

    /// Next selectable value after the field's current one; `""` is the
    /// "-- Select --" placeholder and always selectable
    pub fn next_choice(&self, field: FieldName, form: &ConsignmentForm) -> String {
        self.step_choice(field, form, true)
    }

    pub fn prev_choice(&self, field: FieldName, form: &ConsignmentForm) -> String {
        self.step_choice(field, form, false)
    }

    fn step_choice(&self, field: FieldName, form: &ConsignmentForm, forward: bool) -> String {
        let (own, sibling) = location_pair(field, form);
        let choices: Vec<&str> = std::iter::once("")
            .chain(self.locations.iter().map(String::as_str))
            .collect();
        let count = choices.len();
        let current = choices.iter().position(|c| *c == own).unwrap_or(0);

        for step in 1..=count {
            let index = if forward {
                (current + step) % count
            } else {
                (current + count - step % count) % count
            };
            let candidate = choices[index];
            if candidate.is_empty() || candidate != sibling {
                return candidate.to_string();
            }
        }
        own.to_string()
    }
}

fn location_pair(field: FieldName, form: &ConsignmentForm) -> (&str, &str) {
    match field {
        FieldName::Destination => (&form.destination, &form.source),
        _ => (&form.source, &form.destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> LocationCatalog {
        LocationCatalog::new(
            ["Perth", "Sydney", "Melbourne"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn disabled_labels<'a>(options: &[LocationOption<'a>]) -> Vec<&'a str> {
        options
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.label)
            .collect()
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{"locations": ["Perth", "Sydney"]}"#;
        let parsed: LocationCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.locations, vec!["Perth", "Sydney"]);
    }

    #[test]
    fn test_source_selection_disables_destination_option() {
        let form = ConsignmentForm {
            source: "Perth".to_string(),
            ..Default::default()
        };
        let catalog = catalog();
        let destination = catalog.options_for(FieldName::Destination, &form);
        assert_eq!(disabled_labels(&destination), vec!["Perth"]);
        let source = catalog.options_for(FieldName::Source, &form);
        assert!(disabled_labels(&source).is_empty());
        assert!(source.iter().any(|o| o.label == "Perth" && o.selected));
    }

    #[test]
    fn test_destination_selection_disables_source_option() {
        let form = ConsignmentForm {
            destination: "Perth".to_string(),
            ..Default::default()
        };
        let catalog = catalog();
        let options = catalog.options_for(FieldName::Source, &form);
        assert_eq!(disabled_labels(&options), vec!["Perth"]);
    }

    #[test]
    fn test_next_choice_skips_sibling_value() {
        let form = ConsignmentForm {
            source: "Perth".to_string(),
            ..Default::default()
        };
        let catalog = catalog();
        assert_eq!(catalog.next_choice(FieldName::Destination, &form), "Sydney");
    }

    #[test]
    fn test_choices_wrap_through_placeholder() {
        let form = ConsignmentForm {
            source: "Melbourne".to_string(),
            ..Default::default()
        };
        let catalog = catalog();
        assert_eq!(catalog.next_choice(FieldName::Source, &form), "");
        assert_eq!(catalog.prev_choice(FieldName::Source, &form), "Sydney");
    }

    #[test]
    fn test_prev_choice_from_placeholder() {
        let form = ConsignmentForm {
            destination: "Melbourne".to_string(),
            ..Default::default()
        };
        assert_eq!(catalog().prev_choice(FieldName::Source, &form), "Sydney");
    }

    #[test]
    fn test_empty_catalog_only_offers_placeholder() {
        let form = ConsignmentForm::default();
        let catalog = LocationCatalog::default();
        assert!(catalog.options_for(FieldName::Source, &form).is_empty());
        assert_eq!(catalog.next_choice(FieldName::Source, &form), "");
    }
}
