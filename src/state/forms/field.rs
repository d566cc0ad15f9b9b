//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named slots of the consignment form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Source,
    Destination,
    Weight,
    Unit,
    Height,
    Depth,
    Width,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Source,
        FieldName::Destination,
        FieldName::Weight,
        FieldName::Unit,
        FieldName::Height,
        FieldName::Depth,
        FieldName::Width,
    ];

    /// Dimension fields rewritten by the unit conversion
    pub const DIMENSIONS: [FieldName; 3] = [FieldName::Width, FieldName::Height, FieldName::Depth];

    /// Name used on the wire and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Weight => "weight",
            Self::Unit => "unit",
            Self::Height => "height",
            Self::Depth => "depth",
            Self::Width => "width",
        }
    }

    /// Upper-case label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "SOURCE",
            Self::Destination => "DESTINATION",
            Self::Weight => "WEIGHT",
            Self::Unit => "UNIT",
            Self::Height => "HEIGHT",
            Self::Depth => "DEPTH",
            Self::Width => "WIDTH",
        }
    }

    pub fn is_location(&self) -> bool {
        matches!(self, Self::Source | Self::Destination)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Weight | Self::Height | Self::Depth | Self::Width
        )
    }

    pub fn is_dimension(&self) -> bool {
        Self::DIMENSIONS.contains(self)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linear unit the dimensions are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Centimetres,
    Millimetres,
}

impl Unit {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Centimetres => Self::Millimetres,
            Self::Millimetres => Self::Centimetres,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Centimetres => "Centimetres",
            Self::Millimetres => "Millimetres",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Centimetres => "cm",
            Self::Millimetres => "mm",
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Unit(Option<Unit>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        FieldValue::Number(Some(value))
    }

    pub fn unit(value: Unit) -> Self {
        FieldValue::Unit(Some(value))
    }

    /// Get the text value (returns empty string for other kinds)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<Unit> {
        match self {
            FieldValue::Unit(u) => *u,
            _ => None,
        }
    }

    /// True for empty text and unset numbers or units
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(n) => n.is_none(),
            FieldValue::Unit(u) => u.is_none(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Number(_) => "number",
            FieldValue::Unit(_) => "unit",
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(Some(n)) => format_number(*n),
            FieldValue::Unit(Some(u)) => u.label().to_string(),
            FieldValue::Number(None) | FieldValue::Unit(None) => String::new(),
        }
    }
}

/// Parse user-entered text into a number; empty or malformed text is unset
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render a number the way it would be typed back in
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
