//! Normalization of selection inputs.
//!
//! Pickers hand back either the bare value (`3`, `"omaha"`) or an option
//! object (`{"value": 3, "label": "Seat 3"}`). [`Selection`] accepts both
//! shapes at the deserialization boundary so the rest of the crate only ever
//! sees the value.

use serde::{Deserialize, Serialize};

/// A value that arrived either bare or wrapped in an option object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection<T> {
    /// `{"value": ..., "label": ...}`
    Option {
        value: T,
        #[serde(default)]
        label: Option<String>,
    },
    /// The bare value
    Raw(T),
}

impl<T> Selection<T> {
    /// Borrow the selected value
    pub fn value(&self) -> &T {
        match self {
            Self::Option { value, .. } | Self::Raw(value) => value,
        }
    }

    /// Take the selected value
    pub fn into_value(self) -> T {
        match self {
            Self::Option { value, .. } | Self::Raw(value) => value,
        }
    }

    /// Display label, if the picker supplied one
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Option { label, .. } => label.as_deref(),
            Self::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Self::Raw(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_number() {
        let selection: Selection<u32> = serde_json::from_str("3").unwrap();
        assert_eq!(selection, Selection::Raw(3));
        assert_eq!(selection.label(), None);
        assert_eq!(selection.into_value(), 3);
    }

    #[test]
    fn test_option_object() {
        let selection: Selection<u32> =
            serde_json::from_str(r#"{"value": 7, "label": "Seat 7"}"#).unwrap();
        assert_eq!(selection.label(), Some("Seat 7"));
        assert_eq!(*selection.value(), 7);
    }

    #[test]
    fn test_option_object_without_label() {
        let selection: Selection<String> = serde_json::from_str(r#"{"value": "P001"}"#).unwrap();
        assert_eq!(selection.into_value(), "P001");
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let result: Result<Selection<u32>, _> = serde_json::from_str(r#"{"value": "seven"}"#);
        assert!(result.is_err());
    }
}
