use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::models::controls::serialize_number;

/// The user's current value for one control, keyed by the control's label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub label: String,
    pub value: SelectionValue,
}

/// Slider positions arrive as numbers, option picks as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    Number(f64),
    Text(String),
}

impl Serialize for SelectionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SelectionValue::Number(n) => serialize_number(n, serializer),
            SelectionValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl fmt::Display for SelectionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops the fraction for whole numbers
            SelectionValue::Number(n) => write!(f, "{n}"),
            SelectionValue::Text(t) => f.write_str(t.trim()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label.trim(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_selection_accepts_number_and_string_values() {
        let selections: Vec<Selection> = serde_json::from_value(json!([
            {"label": "Spice", "value": 7},
            {"label": "Style", "value": "Watercolor"}
        ]))
        .unwrap();
        assert_eq!(selections[0].value, SelectionValue::Number(7.0));
        assert_eq!(
            selections[1].value,
            SelectionValue::Text("Watercolor".to_string())
        );
    }

    #[test]
    fn test_display_renders_label_and_value() {
        let selection = Selection {
            label: "Style".to_string(),
            value: SelectionValue::Text("Watercolor".to_string()),
        };
        assert_eq!(selection.to_string(), "Style: Watercolor");
    }

    #[test]
    fn test_whole_numbers_render_without_fraction() {
        assert_eq!(SelectionValue::Number(30.0).to_string(), "30");
        assert_eq!(SelectionValue::Number(2.5).to_string(), "2.5");
        assert_eq!(serde_json::to_value(SelectionValue::Number(30.0)).unwrap(), json!(30));
    }
}
