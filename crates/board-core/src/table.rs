//! Typed commands emitted by the table-cell editor.
//!
//! The editor only *describes* the requested change; executing it against a
//! concrete table component is the scene engine's job, so these commands stop
//! at the scene boundary.

use serde::{Deserialize, Serialize};

/// Which borders of the selected cells a border command styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderRegion {
    Out,
    In,
    All,
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
    Clear,
}

impl BorderRegion {
    pub const ALL_REGIONS: [BorderRegion; 10] = [
        Self::Out,
        Self::In,
        Self::All,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Top,
        Self::Middle,
        Self::Bottom,
        Self::Clear,
    ];
}

/// A border styling command for the current cell selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderCommand {
    pub region: BorderRegion,
    pub border_width: f64,
    pub border_style: String,
    pub border_color: String,
}

/// Structural operations on the selected table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableOperation {
    MergeCells,
    SplitCells,
    DeleteRow,
    DeleteColumn,
    InsertAbove,
    InsertBelow,
    InsertLeft,
    InsertRight,
    DistributeHorizontal,
    DistributeVertical,
}

impl TableOperation {
    pub const ALL: [TableOperation; 10] = [
        Self::MergeCells,
        Self::SplitCells,
        Self::DeleteRow,
        Self::DeleteColumn,
        Self::InsertAbove,
        Self::InsertBelow,
        Self::InsertLeft,
        Self::InsertRight,
        Self::DistributeHorizontal,
        Self::DistributeVertical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::MergeCells => "merge cells",
            Self::SplitCells => "split cells",
            Self::DeleteRow => "delete row",
            Self::DeleteColumn => "delete column",
            Self::InsertAbove => "insert above",
            Self::InsertBelow => "insert below",
            Self::InsertLeft => "insert left",
            Self::InsertRight => "insert right",
            Self::DistributeHorizontal => "distribute horizontal",
            Self::DistributeVertical => "distribute vertical",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TableOperation::InsertAbove).unwrap(),
            "\"insert-above\""
        );
    }
}
