//! The value coercer: raw UI input to a typed property value.
//!
//! Each widget family reports its native state through one [`RawInput`]
//! variant; [`coerce`] maps it to the value that travels in a patch. The rules
//! are deliberate product behavior, reproduced exactly:
//!
//! - checkbox state becomes a boolean
//! - numeric text becomes a number, with empty/unparsable input coercing to 0
//!   (a zero-default policy, not an error)
//! - angle widgets report radians, defaulting to 0
//! - toggle buttons report their active flag
//! - list boxes report the selected value
//! - anything else passes its value through unmodified

use std::f64::consts::PI;

use crate::value::PropertyValue;

/// Raw state of the originating UI element at the moment of a change event.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Checkbox { checked: bool },
    NumberInput { text: String },
    TextInput { text: String },
    AngleInput { radian: Option<f64> },
    ToggleButton { active: bool },
    Listbox { selected: String },
    Generic { value: PropertyValue },
}

/// Maps raw input to the typed value a patch carries. Pure; no DOM involved.
pub fn coerce(input: RawInput) -> PropertyValue {
    match input {
        RawInput::Checkbox { checked } => PropertyValue::Bool(checked),
        RawInput::NumberInput { text } => PropertyValue::Number(number_or_zero(&text)),
        RawInput::TextInput { text } => PropertyValue::Text(text),
        RawInput::AngleInput { radian } => PropertyValue::Number(radian.unwrap_or(0.0)),
        RawInput::ToggleButton { active } => PropertyValue::Bool(active),
        RawInput::Listbox { selected } => PropertyValue::Text(selected),
        RawInput::Generic { value } => value,
    }
}

/// Numeric input policy: empty or unparsable text (and NaN) coerce to 0.
pub fn number_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Radians to the rounded degree value shown in angle inputs.
pub fn to_degrees(radian: f64) -> f64 {
    (radian * 180.0 / PI).round()
}

/// Degrees (as typed) back to radians; unparsable input yields 0.
pub fn to_radians(degree: f64) -> f64 {
    degree * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_coerces_to_bool() {
        assert_eq!(
            coerce(RawInput::Checkbox { checked: true }),
            PropertyValue::Bool(true)
        );
    }

    #[test]
    fn empty_and_garbage_numeric_input_coerce_to_zero() {
        // Zero-default policy under product review; preserved as shipped.
        for text in ["", "abc", "NaN", "1e999x"] {
            assert_eq!(
                coerce(RawInput::NumberInput {
                    text: text.to_string()
                }),
                PropertyValue::Number(0.0),
                "input {text:?}"
            );
        }
        assert_eq!(
            coerce(RawInput::NumberInput {
                text: " 2.5 ".to_string()
            }),
            PropertyValue::Number(2.5)
        );
    }

    #[test]
    fn angle_input_defaults_to_zero_radians() {
        assert_eq!(
            coerce(RawInput::AngleInput { radian: None }),
            PropertyValue::Number(0.0)
        );
        assert_eq!(
            coerce(RawInput::AngleInput { radian: Some(PI) }),
            PropertyValue::Number(PI)
        );
    }

    #[test]
    fn passthrough_variants_keep_their_value() {
        assert_eq!(
            coerce(RawInput::TextInput {
                text: "hello".to_string()
            }),
            PropertyValue::text("hello")
        );
        assert_eq!(
            coerce(RawInput::ToggleButton { active: false }),
            PropertyValue::Bool(false)
        );
        assert_eq!(
            coerce(RawInput::Listbox {
                selected: "left-to-right".to_string()
            }),
            PropertyValue::text("left-to-right")
        );
        assert_eq!(
            coerce(RawInput::Generic {
                value: PropertyValue::Number(7.0)
            }),
            PropertyValue::Number(7.0)
        );
    }

    #[test]
    fn degree_radian_round_trip() {
        assert_eq!(to_degrees(PI), 180.0);
        assert!((to_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert_eq!(to_degrees(0.0), 0.0);
    }
}
