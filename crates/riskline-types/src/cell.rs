use serde::{Deserialize, Serialize};

use crate::area::AreaLevel;

/// A table-rendering unit for the merged-cell risk table.
///
/// Renderers must honor the merge metadata exactly: a cell with
/// `render == false` is visually absorbed by a preceding merged cell and
/// must be skipped when emitting output; it exists only to keep column
/// alignment in the row-major grid. `fresh == true` marks a leaf cell whose
/// area is newly added relative to a reference diff and should be visually
/// distinguished.
///
/// `level` is `None` on the synthetic tier-label column prepended by the
/// tier merge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub level: Option<AreaLevel>,
    pub value: String,
    pub render: bool,
    pub rowspan: usize,
    pub colspan: usize,
    pub fresh: bool,
}

impl Cell {
    /// A plain 1x1 rendered cell.
    pub fn new(level: AreaLevel, value: impl Into<String>) -> Self {
        Self {
            level: Some(level),
            value: value.into(),
            render: true,
            rowspan: 1,
            colspan: 1,
            fresh: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            level: None,
            value: String::new(),
            render: true,
            rowspan: 1,
            colspan: 1,
            fresh: false,
        }
    }
}
