use std::collections::HashSet;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::selection::{Selection, SelectionValue};

/// Fewest controls a set may carry.
pub const MIN_CONTROLS: usize = 3;
/// Most controls a set may carry.
pub const MAX_CONTROLS: usize = 6;

/// Why a control or control set failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("response has no `controls` array")]
    MissingControls,

    #[error("expected {}-{} controls, found {}", MIN_CONTROLS, MAX_CONTROLS, .0)]
    Count(usize),

    #[error("control #{0} is not an object")]
    NotAnObject(usize),

    #[error("control #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("control #{index} has an invalid `{field}`")]
    InvalidField { index: usize, field: &'static str },

    #[error("control #{0} has a blank label")]
    BlankLabel(usize),

    #[error("control #{index} has unknown type `{declared}`")]
    UnknownType { index: usize, declared: String },

    #[error("control #{0} is neither a slider nor an options control")]
    UnknownShape(usize),

    #[error("duplicate label `{0}`")]
    DuplicateLabel(String),

    #[error("slider `{0}` has min greater than max or a non-finite bound")]
    InvalidRange(String),

    #[error("slider `{0}` has a step that is not positive")]
    InvalidStep(String),

    #[error("slider `{0}` default lies outside [min, max]")]
    DefaultOutOfRange(String),

    #[error("options control `{0}` has no usable options")]
    EmptyOptions(String),

    #[error("options control `{0}` default is not one of its options")]
    InvalidOptionsDefault(String),
}

/// A numeric range input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slider {
    pub label: String,
    #[serde(serialize_with = "serialize_number")]
    pub min: f64,
    #[serde(serialize_with = "serialize_number")]
    pub max: f64,
    #[serde(serialize_with = "serialize_number")]
    pub step: f64,
    #[serde(serialize_with = "serialize_number")]
    pub default: f64,
    pub unit: String,
}

/// A categorical choice. `default` is always the resolved option text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsControl {
    pub label: String,
    pub options: Vec<String>,
    pub default: String,
}

/// A single UI input descriptor derived from a prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Control {
    Slider(Slider),
    Options(OptionsControl),
}

impl Control {
    pub fn label(&self) -> &str {
        match self {
            Control::Slider(s) => &s.label,
            Control::Options(o) => &o.label,
        }
    }

    /// The value a fresh Selection starts from.
    pub fn default_value(&self) -> SelectionValue {
        match self {
            Control::Slider(s) => SelectionValue::Number(s.default),
            Control::Options(o) => SelectionValue::Text(o.default.clone()),
        }
    }

    /// Checks the per-shape invariants.
    pub fn check(&self) -> Result<(), ControlError> {
        match self {
            Control::Slider(s) => {
                let finite = s.min.is_finite() && s.max.is_finite();
                if !finite || s.min > s.max {
                    return Err(ControlError::InvalidRange(s.label.clone()));
                }
                if !(s.step.is_finite() && s.step > 0.0) {
                    return Err(ControlError::InvalidStep(s.label.clone()));
                }
                if !(s.min <= s.default && s.default <= s.max) {
                    return Err(ControlError::DefaultOutOfRange(s.label.clone()));
                }
            }
            Control::Options(o) => {
                if o.options.is_empty() || o.options.iter().any(|opt| opt.trim().is_empty()) {
                    return Err(ControlError::EmptyOptions(o.label.clone()));
                }
                if !o.options.contains(&o.default) {
                    return Err(ControlError::InvalidOptionsDefault(o.label.clone()));
                }
            }
        }
        Ok(())
    }
}

/// The ordered controls for one prompt.
///
/// Only constructible through `ControlSet::new` (or the fixed fallback), so a
/// value of this type always holds 3–6 checked controls with distinct labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ControlSet(Vec<Control>);

impl ControlSet {
    pub fn new(controls: Vec<Control>) -> Result<Self, ControlError> {
        if !(MIN_CONTROLS..=MAX_CONTROLS).contains(&controls.len()) {
            return Err(ControlError::Count(controls.len()));
        }

        let mut seen = HashSet::new();
        for (index, control) in controls.iter().enumerate() {
            if control.label().trim().is_empty() {
                return Err(ControlError::BlankLabel(index));
            }
            if !seen.insert(control.label().to_lowercase()) {
                return Err(ControlError::DuplicateLabel(control.label().to_string()));
            }
            control.check()?;
        }

        Ok(Self(controls))
    }

    /// The fixed set served whenever derivation fails.
    pub fn fallback() -> Self {
        Self(vec![
            Control::Options(OptionsControl {
                label: "Style".to_string(),
                options: vec!["Traditional".to_string(), "Modern".to_string()],
                default: "Traditional".to_string(),
            }),
            Control::Slider(Slider {
                label: "Spice Level".to_string(),
                min: 0.0,
                max: 10.0,
                step: 1.0,
                default: 5.0,
                unit: String::new(),
            }),
            Control::Slider(Slider {
                label: "Time".to_string(),
                min: 0.0,
                max: 120.0,
                step: 5.0,
                default: 30.0,
                unit: "min".to_string(),
            }),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// One Selection per control, each at the control's default, in set order.
    pub fn default_selections(&self) -> Vec<Selection> {
        self.0
            .iter()
            .map(|c| Selection {
                label: c.label().to_string(),
                value: c.default_value(),
            })
            .collect()
    }
}

#[cfg(test)]
impl ControlSet {
    pub fn controls(&self) -> &[Control] {
        &self.0
    }

    pub fn get(&self, label: &str) -> Option<&Control> {
        self.0.iter().find(|c| c.label() == label)
    }
}

/// Writes integral values as JSON integers so `5` does not come back as `5.0`.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
