//! Consignment form data and its submission snapshot

use super::field::{FieldName, FieldValue, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when reading or writing form data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("field `{field}` does not accept a {got} value")]
    ValueKind { field: FieldName, got: &'static str },
    #[error("field `{0}` has no value")]
    Incomplete(FieldName),
}

/// Current values of every consignment field
#[derive(Debug, Clone, PartialEq)]
pub struct ConsignmentForm {
    pub source: String,
    pub destination: String,
    pub weight: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub unit: Option<Unit>,
}

impl Default for ConsignmentForm {
    fn default() -> Self {
        Self {
            source: String::new(),
            destination: String::new(),
            weight: None,
            width: None,
            height: None,
            depth: None,
            unit: Some(Unit::default()),
        }
    }
}

impl ConsignmentForm {
    pub fn get(&self, name: FieldName) -> FieldValue {
        match name {
            FieldName::Source => FieldValue::Text(self.source.clone()),
            FieldName::Destination => FieldValue::Text(self.destination.clone()),
            FieldName::Weight => FieldValue::Number(self.weight),
            FieldName::Width => FieldValue::Number(self.width),
            FieldName::Height => FieldValue::Number(self.height),
            FieldName::Depth => FieldValue::Number(self.depth),
            FieldName::Unit => FieldValue::Unit(self.unit),
        }
    }

    /// Numeric view of a field, `None` for unset or non-numeric fields
    pub fn number(&self, name: FieldName) -> Option<f64> {
        match name {
            FieldName::Weight => self.weight,
            FieldName::Width => self.width,
            FieldName::Height => self.height,
            FieldName::Depth => self.depth,
            _ => None,
        }
    }

    /// Raw write with no validation
    pub fn set(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        match (name, value) {
            (FieldName::Source, FieldValue::Text(s)) => self.source = s,
            (FieldName::Destination, FieldValue::Text(s)) => self.destination = s,
            (FieldName::Weight, FieldValue::Number(n)) => self.weight = n,
            (FieldName::Width, FieldValue::Number(n)) => self.width = n,
            (FieldName::Height, FieldValue::Number(n)) => self.height = n,
            (FieldName::Depth, FieldValue::Number(n)) => self.depth = n,
            (FieldName::Unit, FieldValue::Unit(u)) => self.unit = u,
            (field, value) => {
                return Err(FormError::ValueKind {
                    field,
                    got: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Build the payload sent to the submission sink
    pub fn to_payload(&self) -> Result<ConsignmentPayload, FormError> {
        fn present(value: Option<f64>, field: FieldName) -> Result<f64, FormError> {
            value.ok_or(FormError::Incomplete(field))
        }

        if self.source.is_empty() {
            return Err(FormError::Incomplete(FieldName::Source));
        }
        if self.destination.is_empty() {
            return Err(FormError::Incomplete(FieldName::Destination));
        }

        Ok(ConsignmentPayload {
            source: self.source.clone(),
            destination: self.destination.clone(),
            weight: present(self.weight, FieldName::Weight)?,
            width: present(self.width, FieldName::Width)?,
            height: present(self.height, FieldName::Height)?,
            depth: present(self.depth, FieldName::Depth)?,
            unit: self.unit.ok_or(FormError::Incomplete(FieldName::Unit))?,
        })
    }
}

/// Snapshot of a complete form as sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsignmentPayload {
    pub source: String,
    pub destination: String,
    pub weight: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub unit: Unit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> ConsignmentForm {
        ConsignmentForm {
            source: "Perth".to_string(),
            destination: "Sydney".to_string(),
            weight: Some(10.0),
            width: Some(40.0),
            height: Some(20.0),
            depth: Some(30.0),
            unit: Some(Unit::Centimetres),
        }
    }

    #[test]
    fn test_default_values() {
        let form = ConsignmentForm::default();
        assert!(form.source.is_empty());
        assert!(form.destination.is_empty());
        assert!(form.weight.is_none());
        assert!(form.height.is_none());
        assert_eq!(form.unit, Some(Unit::Centimetres));
    }

    #[test]
    fn test_set_and_get() {
        let mut form = ConsignmentForm::default();
        form.set(FieldName::Source, FieldValue::text("Perth")).unwrap();
        form.set(FieldName::Height, FieldValue::number(12.5)).unwrap();
        form.set(FieldName::Unit, FieldValue::unit(Unit::Millimetres))
            .unwrap();

        assert_eq!(form.get(FieldName::Source), FieldValue::text("Perth"));
        assert_eq!(form.get(FieldName::Height), FieldValue::number(12.5));
        assert_eq!(form.get(FieldName::Unit), FieldValue::unit(Unit::Millimetres));
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut form = ConsignmentForm::default();
        let err = form
            .set(FieldName::Weight, FieldValue::text("heavy"))
            .unwrap_err();
        assert_eq!(
            err,
            FormError::ValueKind {
                field: FieldName::Weight,
                got: "text"
            }
        );
        assert!(form.weight.is_none());
    }

    #[test]
    fn test_to_payload_complete() {
        let payload = filled_form().to_payload().unwrap();
        assert_eq!(payload.source, "Perth");
        assert_eq!(payload.width, 40.0);
        assert_eq!(payload.unit, Unit::Centimetres);
    }

    #[test]
    fn test_to_payload_reports_missing_field() {
        let mut form = filled_form();
        form.depth = None;
        assert_eq!(
            form.to_payload().unwrap_err(),
            FormError::Incomplete(FieldName::Depth)
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = filled_form().to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "Perth",
                "destination": "Sydney",
                "weight": 10.0,
                "width": 40.0,
                "height": 20.0,
                "depth": 30.0,
                "unit": "centimetres"
            })
        );
    }
}
