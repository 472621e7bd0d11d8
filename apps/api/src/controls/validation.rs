//! Shape validation — maps a repaired JSON value onto a strict `ControlSet`.
//!
//! Each entry is tagged Slider or Options by its declared `type`, or, when the
//! tag is absent, by the presence of `min`/`max` versus `options`. Anything
//! that does not fit exactly is rejected; nothing is truncated or padded.

use serde_json::{Map, Value};

use crate::models::controls::{Control, ControlError, ControlSet, OptionsControl, Slider};

const DEFAULT_STEP: f64 = 1.0;

enum Shape {
    Slider,
    Options,
}

/// Validates `{"controls": [...]}` into a `ControlSet`.
pub fn validate_controls(value: &Value) -> Result<ControlSet, ControlError> {
    let entries = value
        .get("controls")
        .and_then(Value::as_array)
        .ok_or(ControlError::MissingControls)?;

    let controls = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_control(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    ControlSet::new(controls)
}

fn parse_control(index: usize, entry: &Value) -> Result<Control, ControlError> {
    let obj = entry.as_object().ok_or(ControlError::NotAnObject(index))?;

    let label = obj
        .get("label")
        .ok_or(ControlError::MissingField {
            index,
            field: "label",
        })?
        .as_str()
        .ok_or(ControlError::InvalidField {
            index,
            field: "label",
        })?
        .trim()
        .to_string();
    if label.is_empty() {
        return Err(ControlError::BlankLabel(index));
    }

    let control = match shape_of(index, obj)? {
        Shape::Slider => Control::Slider(parse_slider(index, label, obj)?),
        Shape::Options => Control::Options(parse_options(index, label, obj)?),
    };
    control.check()?;
    Ok(control)
}

fn shape_of(index: usize, obj: &Map<String, Value>) -> Result<Shape, ControlError> {
    let has_range = obj.contains_key("min") || obj.contains_key("max");
    let has_options = obj.contains_key("options");

    match obj.get("type") {
        Some(Value::String(declared)) => match declared.trim().to_ascii_lowercase().as_str() {
            "slider" => Ok(Shape::Slider),
            "options" => Ok(Shape::Options),
            _ => Err(ControlError::UnknownType {
                index,
                declared: declared.clone(),
            }),
        },
        Some(_) => Err(ControlError::InvalidField {
            index,
            field: "type",
        }),
        None => match (has_range, has_options) {
            (true, false) => Ok(Shape::Slider),
            (false, true) => Ok(Shape::Options),
            _ => Err(ControlError::UnknownShape(index)),
        },
    }
}

fn parse_slider(
    index: usize,
    label: String,
    obj: &Map<String, Value>,
) -> Result<Slider, ControlError> {
    let min = required_number(index, obj, "min")?;
    let max = required_number(index, obj, "max")?;
    let step = optional_number(index, obj, "step")?.unwrap_or(DEFAULT_STEP);
    let default = optional_number(index, obj, "default")?.unwrap_or(min);
    let unit = match obj.get("unit") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(unit)) => unit.trim().to_string(),
        Some(_) => {
            return Err(ControlError::InvalidField {
                index,
                field: "unit",
            })
        }
    };

    Ok(Slider {
        label,
        min,
        max,
        step,
        default,
        unit,
    })
}

fn parse_options(
    index: usize,
    label: String,
    obj: &Map<String, Value>,
) -> Result<OptionsControl, ControlError> {
    let raw = obj
        .get("options")
        .and_then(Value::as_array)
        .ok_or(ControlError::InvalidField {
            index,
            field: "options",
        })?;

    let options = raw
        .iter()
        .map(|opt| {
            opt.as_str()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| ControlError::EmptyOptions(label.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if options.is_empty() {
        return Err(ControlError::EmptyOptions(label));
    }

    let default = match obj.get("default") {
        // No default given: the first option
        None | Some(Value::Null) => options[0].clone(),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| options.get(i))
            .cloned()
            .ok_or_else(|| ControlError::InvalidOptionsDefault(label.clone()))?,
        Some(Value::String(s)) => {
            let wanted = s.trim();
            options
                .iter()
                .find(|opt| opt.as_str() == wanted)
                .cloned()
                .ok_or_else(|| ControlError::InvalidOptionsDefault(label.clone()))?
        }
        Some(_) => return Err(ControlError::InvalidOptionsDefault(label)),
    };

    Ok(OptionsControl {
        label,
        options,
        default,
    })
}

fn required_number(
    index: usize,
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, ControlError> {
    optional_number(index, obj, field)?.ok_or(ControlError::MissingField { index, field })
}

fn optional_number(
    index: usize,
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, ControlError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or(ControlError::InvalidField { index, field }),
        Some(_) => Err(ControlError::InvalidField { index, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spice() -> Value {
        json!({"label": "Spice", "type": "slider", "min": 0, "max": 10, "default": 5})
    }

    fn style() -> Value {
        json!({"label": "Style", "type": "options", "options": ["Hyderabadi", "Lucknowi"], "default": 0})
    }

    fn time() -> Value {
        json!({"label": "Time", "type": "slider", "min": 5, "max": 120, "default": 30})
    }

    fn sliders(n: usize) -> Value {
        let controls: Vec<Value> = (0..n)
            .map(|i| json!({"label": format!("Knob {i}"), "min": 0, "max": 10}))
            .collect();
        json!({ "controls": controls })
    }

    #[test]
    fn test_valid_mixed_set() {
        let set = validate_controls(&json!({"controls": [spice(), style(), time()]})).unwrap();
        assert_eq!(set.len(), 3);
        match &set.controls()[1] {
            Control::Options(o) => assert_eq!(o.default, "Hyderabadi"),
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn test_slider_defaults_step_unit_and_default() {
        let set = validate_controls(&sliders(3)).unwrap();
        match &set.controls()[0] {
            Control::Slider(s) => {
                assert_eq!(s.step, 1.0);
                assert_eq!(s.unit, "");
                assert_eq!(s.default, s.min);
            }
            other => panic!("expected slider, got {other:?}"),
        }
    }

    #[test]
    fn test_count_boundaries() {
        assert_eq!(
            validate_controls(&sliders(2)).unwrap_err(),
            ControlError::Count(2)
        );
        assert!(validate_controls(&sliders(3)).is_ok());
        assert!(validate_controls(&sliders(6)).is_ok());
        assert_eq!(
            validate_controls(&sliders(7)).unwrap_err(),
            ControlError::Count(7)
        );
    }

    #[test]
    fn test_missing_controls_array() {
        assert_eq!(
            validate_controls(&json!({"sliders": []})).unwrap_err(),
            ControlError::MissingControls
        );
        assert_eq!(
            validate_controls(&json!({"controls": "none"})).unwrap_err(),
            ControlError::MissingControls
        );
    }

    #[test]
    fn test_shape_inferred_without_type_tag() {
        let value = json!({"controls": [
            {"label": "A", "min": 1, "max": 2},
            {"label": "B", "options": ["x", "y"], "default": "y"},
            {"label": "C", "min": 0, "max": 1, "step": 0.25, "default": 0.5, "unit": "%"}
        ]});
        let set = validate_controls(&value).unwrap();
        assert!(matches!(&set.controls()[0], Control::Slider(_)));
        assert!(matches!(&set.controls()[1], Control::Options(o) if o.default == "y"));
        assert!(matches!(&set.controls()[2], Control::Slider(s) if s.unit == "%" && s.step == 0.25));
    }

    #[test]
    fn test_ambiguous_shape_is_rejected() {
        let value = json!({"controls": [
            {"label": "A", "min": 1, "max": 2, "options": ["x"]},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::UnknownShape(0)
        );
    }

    #[test]
    fn test_unknown_declared_type_is_rejected() {
        let value = json!({"controls": [
            {"label": "A", "type": "toggle"},
            spice(),
            time()
        ]});
        assert!(matches!(
            validate_controls(&value).unwrap_err(),
            ControlError::UnknownType { index: 0, .. }
        ));
    }

    #[test]
    fn test_declared_slider_without_bounds_is_rejected() {
        let value = json!({"controls": [
            {"label": "A", "type": "slider", "options": ["x"]},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::MissingField {
                index: 0,
                field: "min"
            }
        );
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let value = json!({"controls": [
            {"label": "Heat", "min": 10, "max": 1},
            style(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::InvalidRange("Heat".to_string())
        );
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let value = json!({"controls": [
            {"label": "Heat", "min": 0, "max": 10, "step": 0},
            style(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::InvalidStep("Heat".to_string())
        );
    }

    #[test]
    fn test_empty_options_list_is_rejected() {
        let value = json!({"controls": [
            {"label": "Style", "type": "options", "options": []},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::EmptyOptions("Style".to_string())
        );
    }

    #[test]
    fn test_options_default_index_out_of_range_is_rejected() {
        let value = json!({"controls": [
            {"label": "Style", "options": ["a", "b"], "default": 2},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::InvalidOptionsDefault("Style".to_string())
        );
    }

    #[test]
    fn test_options_default_string_must_be_listed() {
        let value = json!({"controls": [
            {"label": "Style", "options": ["a", "b"], "default": "c"},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::InvalidOptionsDefault("Style".to_string())
        );
    }

    #[test]
    fn test_options_without_default_pick_first() {
        let value = json!({"controls": [
            {"label": "Style", "options": ["a", "b"]},
            spice(),
            time()
        ]});
        let set = validate_controls(&value).unwrap();
        assert!(matches!(&set.controls()[0], Control::Options(o) if o.default == "a"));
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let value = json!({"controls": [
            {"label": "  ", "min": 0, "max": 1},
            spice(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::BlankLabel(0)
        );
    }

    #[test]
    fn test_string_numbers_are_rejected() {
        let value = json!({"controls": [
            {"label": "Heat", "min": "0", "max": 10},
            style(),
            time()
        ]});
        assert_eq!(
            validate_controls(&value).unwrap_err(),
            ControlError::InvalidField {
                index: 0,
                field: "min"
            }
        );
    }
}
