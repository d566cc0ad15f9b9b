//! Unit conversion for the dimension fields

use super::consignment::ConsignmentForm;
use super::field::{FieldName, FieldValue, Unit};

/// Millimetres per centimetre
pub const SCALE_FACTOR: f64 = 100.0;

/// Converted values are kept to this many steps per unit (six decimals)
const PRECISION: f64 = 1_000_000.0;

/// Convert a measure into `to`, assuming it is currently in the other unit
pub fn convert(value: f64, to: Unit) -> f64 {
    let scaled = match to {
        Unit::Millimetres => value * SCALE_FACTOR,
        Unit::Centimetres => value / SCALE_FACTOR,
    };
    snap(scaled)
}

/// Round away binary representation error, e.g. `1.15 * 100` is `114.99999999999999`
fn snap(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

/// Dimension writes caused by a change of the unit field.
///
/// Nothing happens when the unit is unset or did not actually change.
/// Unset dimensions are treated as zero.
pub fn react(
    previous: Option<Unit>,
    current: Option<Unit>,
    form: &ConsignmentForm,
) -> Vec<(FieldName, FieldValue)> {
    let Some(unit) = current else {
        return Vec::new();
    };
    if previous == Some(unit) {
        return Vec::new();
    }

    FieldName::DIMENSIONS
        .iter()
        .map(|&name| {
            let value = form.number(name).unwrap_or(0.0);
            (name, FieldValue::number(convert(value, unit)))
        })
        .collect()
}
