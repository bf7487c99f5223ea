//! Data-binding mappings and the map/range rule parameter editors' value
//! model.
//!
//! A component model holds up to [`MAX_MAPPINGS`] mapping slots. Each mapping
//! spreads an accessor's value onto target components through one rule:
//! direct `value`, a key→value `map`, a `from~to` `range`, or an `eval`
//! expression.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of mapping slots a component model may hold.
pub const MAX_MAPPINGS: usize = 7;

/// Reserved key of the fallback entry in maps and ranges.
pub const DEFAULT_KEY: &str = "default";

/// How an accessor value is translated before it is written to the target
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingRule {
    #[default]
    Value,
    Map,
    Range,
    Eval,
}

impl MappingRule {
    pub const ALL: [MappingRule; 4] = [Self::Value, Self::Map, Self::Range, Self::Eval];

    pub fn label(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Map => "map",
            Self::Range => "range",
            Self::Eval => "eval",
        }
    }
}

/// One data-binding slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(default)]
    pub accessor: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub rule: MappingRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<serde_json::Value>,
}

impl Mapping {
    /// A mapping only reaches the model once target and property are set;
    /// incomplete slots are dropped on commit.
    pub fn is_complete(&self) -> bool {
        !self.target.is_empty() && !self.property.is_empty()
    }
}

/// A bare word typed into the target field addresses a component id.
pub fn normalize_target(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with(['.', '#', '(', '[']) {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

/// Slot *i* is editable only when slot *i-1* is populated, so the enabled tab
/// count is one past the dense mapping list, capped at [`MAX_MAPPINGS`].
pub fn enabled_slots(mappings: &[Mapping]) -> usize {
    (mappings.len() + 1).min(MAX_MAPPINGS)
}

/// Editor kind of a map/range value cell, decided by the mapped property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Boolean,
    Number,
    Color,
    Object,
    Text,
}

/// Value cell editor for the given target property.
pub fn value_kind_for(property: &str) -> CellKind {
    match property {
        "hidden" | "started" => CellKind::Boolean,
        "rotation" | "value" => CellKind::Number,
        "fillStyle" | "strokeStyle" | "fontColor" => CellKind::Color,
        "data" | "location" | "dimension" => CellKind::Object,
        _ => CellKind::Text,
    }
}

/// Default cell value for an editor kind.
pub fn default_cell(kind: CellKind) -> CellValue {
    match kind {
        CellKind::Boolean => CellValue::Bool(false),
        CellKind::Color => CellValue::Text("#000000".to_string()),
        _ => CellValue::Text(String::new()),
    }
}

/// How map/range keys sort: lexically or numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyKind {
    #[default]
    Text,
    Number,
}

fn compare_keys(kind: KeyKind, a: &str, b: &str) -> std::cmp::Ordering {
    match kind {
        KeyKind::Text => a.cmp(b),
        KeyKind::Number => {
            let fa: f64 = a.parse().unwrap_or(f64::MAX);
            let fb: f64 = b.parse().unwrap_or(f64::MAX);
            fa.total_cmp(&fb)
        }
    }
}

/// A map/range cell value: checkbox cells are booleans, everything else is
/// text (color cells carry the color string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

/// One editable row of a value map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    pub key: String,
    pub value: CellValue,
}

/// Key→value translation table with one reserved `default` slot.
///
/// Rows keep insertion order. The `default` entry never appears among the
/// editable rows; it is carried separately and re-attached whenever the map
/// is rebuilt or sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueMap {
    entries: Vec<MapEntry>,
    default: Option<CellValue>,
}

impl ValueMap {
    /// Editable rows, `default` excluded by construction.
    pub fn rows(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn default_value(&self) -> Option<&CellValue> {
        self.default.as_ref()
    }

    pub fn set_default(&mut self, value: Option<CellValue>) {
        self.default = value;
    }

    /// Rebuilds the map from edited rows: rows with an empty key are
    /// dropped, empty cells fall back to the kind's default, and the
    /// `default` slot survives untouched.
    pub fn build(rows: Vec<MapEntry>, default: Option<CellValue>, kind: CellKind) -> Self {
        let entries = rows
            .into_iter()
            .filter(|row| !row.key.is_empty() && row.key != DEFAULT_KEY)
            .map(|row| {
                let value = if row.value.is_empty() {
                    default_cell(kind)
                } else {
                    row.value
                };
                MapEntry {
                    key: row.key,
                    value,
                }
            })
            .collect();
        Self { entries, default }
    }

    /// Rows sorted by key; `default` is re-attached, never sorted away.
    pub fn sorted(&self, kind: KeyKind) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| compare_keys(kind, &a.key, &b.key));
        Self {
            entries,
            default: self.default.clone(),
        }
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        if let Some(default) = &self.default {
            map.serialize_entry(DEFAULT_KEY, default)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = ValueMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a key to value object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut value = ValueMap::default();
                while let Some((key, cell)) = access.next_entry::<String, CellValue>()? {
                    if key == DEFAULT_KEY {
                        value.default = Some(cell);
                    } else {
                        value.entries.push(MapEntry { key, value: cell });
                    }
                }
                Ok(value)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

/// One editable row of a value range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub from: String,
    pub to: String,
    pub value: CellValue,
}

/// `from~to`→value translation table with the same reserved `default` slot
/// rules as [`ValueMap`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueRange {
    entries: Vec<RangeEntry>,
    default: Option<CellValue>,
}

impl ValueRange {
    pub fn rows(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn default_value(&self) -> Option<&CellValue> {
        self.default.as_ref()
    }

    pub fn set_default(&mut self, value: Option<CellValue>) {
        self.default = value;
    }

    /// Rebuilds from edited rows; a row whose `from` reads `default` becomes
    /// the default slot, empty `from` drops the row.
    pub fn build(rows: Vec<RangeEntry>, default: Option<CellValue>, kind: CellKind) -> Self {
        let mut range = Self {
            entries: Vec::new(),
            default,
        };
        for row in rows {
            if row.from.is_empty() {
                continue;
            }
            if row.from == DEFAULT_KEY {
                range.default = Some(if row.value.is_empty() {
                    default_cell(kind)
                } else {
                    row.value
                });
                continue;
            }
            let value = if row.value.is_empty() {
                default_cell(kind)
            } else {
                row.value
            };
            range.entries.push(RangeEntry {
                from: row.from,
                to: row.to,
                value,
            });
        }
        range
    }

    /// Rows sorted by the `from` bound; `default` is re-attached.
    pub fn sorted(&self, kind: KeyKind) -> Self {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| compare_keys(kind, &a.from, &b.from));
        Self {
            entries,
            default: self.default.clone(),
        }
    }
}

impl Serialize for ValueRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.entries.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for entry in &self.entries {
            map.serialize_entry(&format!("{}~{}", entry.from, entry.to), &entry.value)?;
        }
        if let Some(default) = &self.default {
            map.serialize_entry(DEFAULT_KEY, default)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RangeVisitor;

        impl<'de> Visitor<'de> for RangeVisitor {
            type Value = ValueRange;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a from~to to value object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut value = ValueRange::default();
                while let Some((key, cell)) = access.next_entry::<String, CellValue>()? {
                    if key == DEFAULT_KEY {
                        value.default = Some(cell);
                    } else {
                        let (from, to) = key.split_once('~').unwrap_or((key.as_str(), ""));
                        value.entries.push(RangeEntry {
                            from: from.to_string(),
                            to: to.to_string(),
                            value: cell,
                        });
                    }
                }
                Ok(value)
            }
        }

        deserializer.deserialize_map(RangeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_never_include_the_default_key() {
        let map: ValueMap =
            serde_json::from_str(r##"{"on":"#00ff00","off":"#ff0000","default":"#808080"}"##)
                .unwrap();
        assert!(map.rows().iter().all(|row| row.key != DEFAULT_KEY));
        assert_eq!(map.default_value(), Some(&CellValue::text("#808080")));
        assert_eq!(map.rows().len(), 2);
    }

    #[test]
    fn build_reattaches_default_and_drops_empty_keys() {
        let rows = vec![
            MapEntry {
                key: "a".to_string(),
                value: CellValue::text("1"),
            },
            MapEntry {
                key: String::new(),
                value: CellValue::text("dropped"),
            },
            MapEntry {
                key: "b".to_string(),
                value: CellValue::text(""),
            },
        ];
        let map = ValueMap::build(rows, Some(CellValue::text("#000000")), CellKind::Color);
        assert_eq!(map.rows().len(), 2);
        assert_eq!(map.rows()[1].value, CellValue::text("#000000"));
        assert_eq!(map.default_value(), Some(&CellValue::text("#000000")));

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["default"], "#000000");
    }

    #[test]
    fn sorting_keeps_default_and_orders_numerically_when_asked() {
        let map: ValueMap =
            serde_json::from_str(r#"{"10":"a","2":"b","default":"z"}"#).unwrap();
        let text_sorted = map.sorted(KeyKind::Text);
        assert_eq!(text_sorted.rows()[0].key, "10");
        let num_sorted = map.sorted(KeyKind::Number);
        assert_eq!(num_sorted.rows()[0].key, "2");
        assert_eq!(num_sorted.default_value(), Some(&CellValue::text("z")));
    }

    #[test]
    fn range_keys_split_on_tilde() {
        let range: ValueRange =
            serde_json::from_str(r#"{"0~10":"low","10~100":"high","default":"none"}"#).unwrap();
        assert_eq!(range.rows()[0].from, "0");
        assert_eq!(range.rows()[0].to, "10");
        let json = serde_json::to_string(&range).unwrap();
        assert!(json.contains("\"0~10\":\"low\""));
        assert!(json.contains("\"default\":\"none\""));
    }

    #[test]
    fn range_build_routes_default_rows_to_the_default_slot() {
        let rows = vec![
            RangeEntry {
                from: "default".to_string(),
                to: String::new(),
                value: CellValue::text("#fff"),
            },
            RangeEntry {
                from: "0".to_string(),
                to: "5".to_string(),
                value: CellValue::Bool(true),
            },
        ];
        let range = ValueRange::build(rows, None, CellKind::Boolean);
        assert_eq!(range.rows().len(), 1);
        assert_eq!(range.default_value(), Some(&CellValue::text("#fff")));
    }

    #[test]
    fn bare_targets_get_an_id_prefix() {
        assert_eq!(normalize_target("tank1"), "#tank1");
        assert_eq!(normalize_target("  tank1  "), "#tank1");
        assert_eq!(normalize_target("#tank1"), "#tank1");
        assert_eq!(normalize_target(".gauge"), ".gauge");
        assert_eq!(normalize_target("(self)"), "(self)");
        assert_eq!(normalize_target(""), "");
    }

    #[test]
    fn slots_enable_contiguously() {
        assert_eq!(enabled_slots(&[]), 1);
        assert_eq!(enabled_slots(&[Mapping::default()]), 2);
        let full = vec![Mapping::default(); MAX_MAPPINGS];
        assert_eq!(enabled_slots(&full), MAX_MAPPINGS);
    }

    #[test]
    fn mapping_completeness_requires_target_and_property() {
        let mut mapping = Mapping {
            accessor: "value".to_string(),
            ..Mapping::default()
        };
        assert!(!mapping.is_complete());
        mapping.target = "#tank1".to_string();
        mapping.property = "fillStyle".to_string();
        assert!(mapping.is_complete());
    }

    #[test]
    fn cell_kinds_follow_the_property_table() {
        assert_eq!(value_kind_for("hidden"), CellKind::Boolean);
        assert_eq!(value_kind_for("rotation"), CellKind::Number);
        assert_eq!(value_kind_for("fillStyle"), CellKind::Color);
        assert_eq!(value_kind_for("data"), CellKind::Object);
        assert_eq!(value_kind_for("text"), CellKind::Text);
        assert_eq!(value_kind_for("anything-else"), CellKind::Text);
    }
}
