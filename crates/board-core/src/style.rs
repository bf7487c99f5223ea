//! Composite style values edited by the style and effects panels.
//!
//! These are plain sub-objects of a component model (`lineStyle`, `shadow`,
//! `animation`); each panel merges one field at a time and re-emits the whole
//! object.

use serde::{Deserialize, Serialize};

/// Line style of a component outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_stroke_style")]
    pub stroke_style: String,
    #[serde(default = "default_line_dash")]
    pub line_dash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_join: Option<String>,
}

fn default_line_width() -> f64 {
    1.0
}

fn default_stroke_style() -> String {
    "#000000".to_string()
}

fn default_line_dash() -> String {
    "solid".to_string()
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            stroke_style: default_stroke_style(),
            line_dash: default_line_dash(),
            line_cap: None,
            line_join: None,
        }
    }
}

/// Dash patterns offered by the line style editor.
pub const LINE_DASHES: [&str; 8] = [
    "solid",
    "round-dot",
    "square-dot",
    "dash",
    "dash-dot",
    "long-dash",
    "long-dash-dot",
    "long-dash-dot-dot",
];

/// Drop shadow of a component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub blur_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Animation effect attached to a component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub duration: f64,
    /// Rotation animations: target angle in radians.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    /// Vibration animations: scale factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Moving animations: offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Fade animations: alpha endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ride_on: Option<String>,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
}

/// Animation types the effects panel offers.
pub const ANIMATION_TYPES: [&str; 6] = ["", "rotation", "vibration", "heartbeat", "moving", "fade"];

/// Delta curves for animations.
pub const ANIMATION_DELTAS: [&str; 6] = [
    "linear",
    "quad",
    "cubic",
    "circle",
    "bounce",
    "elastic",
];

/// Easing directions for animations.
pub const ANIMATION_EASES: [&str; 3] = ["in", "out", "inout"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_style_uses_wire_field_names() {
        let style = LineStyle::default();
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["lineWidth"], 1.0);
        assert_eq!(json["strokeStyle"], "#000000");
        assert_eq!(json["lineDash"], "solid");
    }

    #[test]
    fn shadow_round_trips() {
        let shadow = Shadow {
            left: 2.0,
            top: 3.0,
            blur_size: 4.0,
            color: Some("#00000080".to_string()),
        };
        let json = serde_json::to_string(&shadow).unwrap();
        assert!(json.contains("\"blurSize\":4.0"));
        let back: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shadow);
    }

    #[test]
    fn animation_type_field_is_named_type() {
        let animation = Animation {
            kind: Some("rotation".to_string()),
            theta: Some(1.0),
            ..Animation::default()
        };
        let json = serde_json::to_value(&animation).unwrap();
        assert_eq!(json["type"], "rotation");
    }
}
