use serde::{Deserialize, Serialize};

use riskline_diff::SnapshotDiff;
use riskline_types::{Cell, Snapshot, Tier};

use crate::builder::tier_rows;

/// The per-tier merged-cell grids for one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskTable {
    pub high: Vec<Vec<Cell>>,
    pub middle: Vec<Vec<Cell>>,
    pub low: Vec<Vec<Cell>>,
}

impl RiskTable {
    /// Build the grids for every tier, highlighting additions from `diff`
    /// when supplied.
    pub fn build(snapshot: &Snapshot, diff: Option<&SnapshotDiff>) -> Self {
        let empty = SnapshotDiff::default();
        let diff = diff.unwrap_or(&empty);

        Self {
            high: tier_rows(&snapshot.high, &diff.high),
            middle: tier_rows(&snapshot.middle, &diff.middle),
            low: tier_rows(&snapshot.low, &diff.low),
        }
    }

    /// The grid for one tier.
    pub fn tier(&self, tier: Tier) -> &[Vec<Cell>] {
        match tier {
            Tier::High => &self.high,
            Tier::Middle => &self.middle,
            Tier::Low => &self.low,
        }
    }

    /// Total number of rows across all tiers.
    pub fn row_count(&self) -> usize {
        self.high.len() + self.middle.len() + self.low.len()
    }

    /// Concatenate the tier grids into one row set, prefixing every row
    /// with a tier-label cell. The label itself is a merged cell spanning
    /// all of its tier's rows, rendered only on the tier's first row.
    pub fn merged_rows(&self) -> Vec<Vec<Cell>> {
        let mut rows = Vec::with_capacity(self.row_count());

        for tier in Tier::ALL {
            let grid = self.tier(tier);
            for (i, row) in grid.iter().enumerate() {
                let mut merged = Vec::with_capacity(row.len() + 1);
                merged.push(Cell {
                    level: None,
                    value: format!("{} areas", tier.label()),
                    render: i == 0,
                    rowspan: grid.len(),
                    colspan: 1,
                    fresh: false,
                });
                merged.extend(row.iter().cloned());
                rows.push(merged);
            }
        }

        rows
    }
}
