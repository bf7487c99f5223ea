//! Fill values and the fill-style editor's variant memory.
//!
//! On the wire a fill is either the empty string (no fill), a bare color
//! string (solid), or an object with a `type` discriminant (`gradient` /
//! `pattern`). Switching between variants inside one editing session must not
//! destroy the other variants' last values; [`FillStyleState`] makes that
//! carry-over an explicit state machine.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::stops::ColorStop;

/// Gradient flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// A gradient as the gradient editor owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientValue {
    #[serde(rename = "type", default)]
    pub kind: GradientKind,
    #[serde(rename = "colorStops")]
    pub color_stops: Vec<ColorStop>,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
}

impl GradientValue {
    /// The default gradient synthesized when the user switches to the
    /// gradient variant with no prior value: two stops running black to
    /// white, seeded from the last solid color when one exists.
    pub fn default_with_seed(seed: Option<&str>) -> Self {
        let start = seed.unwrap_or("#000000").to_string();
        let end = seed.unwrap_or("#FFFFFF").to_string();
        Self {
            kind: GradientKind::Linear,
            color_stops: vec![ColorStop::new(0.0, start), ColorStop::new(1.0, end)],
            rotation: 0.0,
            center: Some("center".to_string()),
        }
    }
}

/// A fill pattern: an image tiled/fitted into the component bounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternValue {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(default, rename = "fitPattern")]
    pub fit: bool,
}

/// A component's fill, in its wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FillRepr", into = "FillRepr")]
pub enum FillValue {
    None,
    Solid(String),
    Gradient(GradientValue),
    Pattern(PatternValue),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum FillRepr {
    Text(String),
    Object(FillObject),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum FillObject {
    Gradient {
        #[serde(rename = "gradientType", default)]
        kind: GradientKind,
        #[serde(rename = "colorStops", default)]
        color_stops: Vec<ColorStop>,
        #[serde(default)]
        rotation: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        center: Option<String>,
    },
    Pattern(PatternValue),
}

impl From<FillRepr> for FillValue {
    fn from(repr: FillRepr) -> Self {
        match repr {
            FillRepr::Text(text) if text.is_empty() => Self::None,
            FillRepr::Text(text) => Self::Solid(text),
            FillRepr::Object(FillObject::Gradient {
                kind,
                color_stops,
                rotation,
                center,
            }) => Self::Gradient(GradientValue {
                kind,
                color_stops,
                rotation,
                center,
            }),
            FillRepr::Object(FillObject::Pattern(pattern)) => Self::Pattern(pattern),
        }
    }
}

impl From<FillValue> for FillRepr {
    fn from(fill: FillValue) -> Self {
        match fill {
            FillValue::None => Self::Text(String::new()),
            FillValue::Solid(color) => Self::Text(color),
            FillValue::Gradient(gradient) => Self::Object(FillObject::Gradient {
                kind: gradient.kind,
                color_stops: gradient.color_stops,
                rotation: gradient.rotation,
                center: gradient.center,
            }),
            FillValue::Pattern(pattern) => Self::Object(FillObject::Pattern(pattern)),
        }
    }
}

impl FillValue {
    pub fn kind(&self) -> FillKind {
        match self {
            Self::None => FillKind::No,
            Self::Solid(_) => FillKind::Solid,
            Self::Gradient(_) => FillKind::Gradient,
            Self::Pattern(_) => FillKind::Pattern,
        }
    }
}

/// The fill-style editor's discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    #[default]
    No,
    Solid,
    Gradient,
    Pattern,
}

impl FillKind {
    pub const ALL: [FillKind; 4] = [Self::No, Self::Solid, Self::Gradient, Self::Pattern];

    pub fn label(self) -> &'static str {
        match self {
            Self::No => "no fill",
            Self::Solid => "solid",
            Self::Gradient => "gradient",
            Self::Pattern => "pattern",
        }
    }
}

/// Variant memory of the fill-style editor.
///
/// Two kinds of transition exist and nothing else:
/// - [`FillStyleState::external_value_replaced`]: the model handed a fresh
///   value down (selection change, undo, engine edit). The arriving variant
///   is cached, the siblings reset.
/// - user edits ([`FillStyleState::select_kind`], [`FillStyleState::edit_solid`],
///   [`FillStyleState::edit_gradient`], [`FillStyleState::edit_pattern`]):
///   sibling caches survive, so switching a variant back restores its last
///   value unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FillStyleState {
    active: FillKind,
    solid: Option<String>,
    gradient: Option<GradientValue>,
    pattern: Option<PatternValue>,
}

impl FillStyleState {
    pub fn active(&self) -> FillKind {
        self.active
    }

    pub fn solid(&self) -> Option<&str> {
        self.solid.as_deref()
    }

    pub fn gradient(&self) -> Option<&GradientValue> {
        self.gradient.as_ref()
    }

    pub fn pattern(&self) -> Option<&PatternValue> {
        self.pattern.as_ref()
    }

    /// The model replaced the value from outside the editor.
    pub fn external_value_replaced(&mut self, value: &FillValue) {
        match value {
            FillValue::None => {
                self.active = FillKind::No;
                self.solid = None;
                self.gradient = None;
                self.pattern = None;
            }
            FillValue::Solid(color) => {
                self.active = FillKind::Solid;
                self.solid = Some(color.clone());
                self.gradient = None;
                self.pattern = None;
            }
            FillValue::Gradient(gradient) => {
                self.active = FillKind::Gradient;
                self.gradient = Some(self.normalized_gradient(gradient));
                self.solid = None;
                self.pattern = None;
            }
            FillValue::Pattern(pattern) => {
                self.active = FillKind::Pattern;
                self.pattern = Some(pattern.clone());
                self.solid = None;
                self.gradient = None;
            }
        }
    }

    /// The user picked a variant. Missing caches fill with defaults; the
    /// returned value is what the editor emits upward.
    pub fn select_kind(&mut self, kind: FillKind) -> FillValue {
        self.active = kind;
        match kind {
            FillKind::No => FillValue::None,
            FillKind::Solid => {
                let color = self.solid.get_or_insert_with(|| "#fff".to_string());
                FillValue::Solid(color.clone())
            }
            FillKind::Gradient => {
                let seed = self.solid.clone();
                let gradient = self
                    .gradient
                    .get_or_insert_with(|| GradientValue::default_with_seed(seed.as_deref()));
                FillValue::Gradient(gradient.clone())
            }
            FillKind::Pattern => {
                let pattern = self.pattern.get_or_insert_with(PatternValue::default);
                FillValue::Pattern(pattern.clone())
            }
        }
    }

    /// Solid sub-editor commit. Ignored unless the solid variant is active.
    pub fn edit_solid(&mut self, color: impl Into<String>) -> Option<FillValue> {
        if self.active != FillKind::Solid {
            return None;
        }
        let color = color.into();
        self.solid = Some(color.clone());
        Some(FillValue::Solid(color))
    }

    /// Gradient sub-editor commit. Ignored unless the gradient variant is
    /// active.
    pub fn edit_gradient(&mut self, gradient: GradientValue) -> Option<FillValue> {
        if self.active != FillKind::Gradient {
            return None;
        }
        let gradient = self.normalized_gradient(&gradient);
        self.gradient = Some(gradient.clone());
        Some(FillValue::Gradient(gradient))
    }

    /// Pattern sub-editor commit. Ignored unless the pattern variant is
    /// active.
    pub fn edit_pattern(&mut self, pattern: PatternValue) -> Option<FillValue> {
        if self.active != FillKind::Pattern {
            return None;
        }
        self.pattern = Some(pattern.clone());
        Some(FillValue::Pattern(pattern))
    }

    /// A gradient with no stops is completed with the default stop pair.
    fn normalized_gradient(&self, gradient: &GradientValue) -> GradientValue {
        if gradient.color_stops.is_empty() {
            GradientValue {
                color_stops: GradientValue::default_with_seed(self.solid.as_deref()).color_stops,
                ..gradient.clone()
            }
        } else {
            gradient.clone()
        }
    }
}

/// Linear gradient direction presets offered by the gradient editor.
pub const LINEAR_DIRECTIONS: [&str; 9] = [
    "lefttop-to-rightbottom",
    "top-to-bottom",
    "righttop-to-leftbottom",
    "right-to-left",
    "rightbottom-to-lefttop",
    "bottom-to-top",
    "leftbottom-to-righttop",
    "left-to-right",
    "center-to-corner",
];

/// Radial gradient center presets.
pub const RADIAL_CENTERS: [&str; 5] =
    ["center", "left-top", "right-top", "right-bottom", "left-bottom"];

/// Direction preset to rotation radians. `center-to-corner` has no rotation.
/// The 215° entry matches the legacy direction table.
pub fn direction_to_rotation(direction: &str) -> Option<f64> {
    let degrees = match direction {
        "left-to-right" => 0.0,
        "lefttop-to-rightbottom" => 45.0,
        "top-to-bottom" => 90.0,
        "righttop-to-leftbottom" => 135.0,
        "right-to-left" => 180.0,
        "rightbottom-to-lefttop" => 215.0,
        "bottom-to-top" => 270.0,
        "leftbottom-to-righttop" => 315.0,
        _ => return None,
    };
    Some(degrees / 360.0 * PI * 2.0)
}

/// Inverse of [`direction_to_rotation`] for highlighting the active preset.
pub fn rotation_to_direction(rotation: f64) -> Option<&'static str> {
    LINEAR_DIRECTIONS
        .into_iter()
        .filter(|direction| *direction != "center-to-corner")
        .find(|direction| {
            direction_to_rotation(direction)
                .is_some_and(|r| (r - rotation).abs() < 1e-9)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_round_trip_for_every_variant() {
        let cases = [
            (FillValue::None, "\"\""),
            (
                FillValue::Solid("#ff0000".to_string()),
                "\"#ff0000\"",
            ),
        ];
        for (fill, expected) in cases {
            assert_eq!(serde_json::to_string(&fill).unwrap(), expected);
            let back: FillValue = serde_json::from_str(expected).unwrap();
            assert_eq!(back, fill);
        }

        let gradient = FillValue::Gradient(GradientValue::default_with_seed(None));
        let json = serde_json::to_string(&gradient).unwrap();
        assert!(json.contains("\"type\":\"gradient\""));
        assert!(json.contains("\"gradientType\":\"linear\""));
        let back: FillValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gradient);

        let pattern = FillValue::Pattern(PatternValue {
            image: "bg.png".to_string(),
            fit: true,
            ..PatternValue::default()
        });
        let json = serde_json::to_string(&pattern).unwrap();
        assert!(json.contains("\"type\":\"pattern\""));
        let back: FillValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }

    #[test]
    fn variant_memory_round_trips_solid_through_gradient() {
        let mut state = FillStyleState::default();
        state.external_value_replaced(&FillValue::Solid("#ff0000".to_string()));

        let emitted = state.select_kind(FillKind::Gradient);
        let FillValue::Gradient(gradient) = &emitted else {
            panic!("expected a gradient, got {emitted:?}");
        };
        // seeded from the remembered solid
        assert_eq!(gradient.color_stops[0].color, "#ff0000");

        let back = state.select_kind(FillKind::Solid);
        assert_eq!(back, FillValue::Solid("#ff0000".to_string()));
    }

    #[test]
    fn external_replacement_resets_sibling_caches() {
        let mut state = FillStyleState::default();
        state.external_value_replaced(&FillValue::Solid("#ff0000".to_string()));
        state.external_value_replaced(&FillValue::Gradient(GradientValue::default_with_seed(
            None,
        )));
        assert_eq!(state.solid(), None);

        let solid = state.select_kind(FillKind::Solid);
        assert_eq!(solid, FillValue::Solid("#fff".to_string()));
    }

    #[test]
    fn gradient_default_is_black_to_white_without_seed() {
        let mut state = FillStyleState::default();
        let FillValue::Gradient(gradient) = state.select_kind(FillKind::Gradient) else {
            panic!("expected gradient");
        };
        assert_eq!(gradient.color_stops.len(), 2);
        assert_eq!(gradient.color_stops[0].color, "#000000");
        assert_eq!(gradient.color_stops[1].color, "#FFFFFF");
        assert_eq!(gradient.kind, GradientKind::Linear);
    }

    #[test]
    fn edits_for_inactive_variants_are_ignored() {
        let mut state = FillStyleState::default();
        state.external_value_replaced(&FillValue::Solid("#123456".to_string()));
        assert_eq!(state.edit_pattern(PatternValue::default()), None);
        assert_eq!(
            state.edit_solid("#654321"),
            Some(FillValue::Solid("#654321".to_string()))
        );
    }

    #[test]
    fn direction_table_round_trips() {
        for direction in LINEAR_DIRECTIONS {
            let Some(rotation) = direction_to_rotation(direction) else {
                assert_eq!(direction, "center-to-corner");
                continue;
            };
            assert_eq!(rotation_to_direction(rotation), Some(direction));
        }
        assert!((direction_to_rotation("top-to-bottom").unwrap() - PI / 2.0).abs() < 1e-12);
    }
}
