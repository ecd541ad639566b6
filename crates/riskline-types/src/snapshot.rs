use std::fmt;

use serde::{Deserialize, Serialize};

use crate::area::Area;

/// Epoch-millisecond timestamp, as reported by `Date`-style upstream feeds.
pub type TimestampMs = i64;

/// One risk tier within a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Middle,
    Low,
}

impl Tier {
    /// Tiers in canonical order (high first). Compression, table merging,
    /// and reporting all iterate in this order.
    pub const ALL: [Tier; 3] = [Tier::High, Tier::Middle, Tier::Low];

    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::High => "high risk",
            Tier::Middle => "medium risk",
            Tier::Low => "low risk",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All risk areas reported by one successful fetch.
///
/// `since` is the authoritative business timestamp parsed from the upstream
/// feed's free-text "data time" field; `create` is the ingestion wall clock.
/// Two snapshots describe the same upstream event iff their `since` values
/// are equal; that is the deduplication key, distinct from content equality
/// (see `riskline-diff`). The retention policy cuts on `create`, never on
/// `since`.
///
/// A snapshot is created once per fetch, never mutated, and deleted only by
/// retention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub high: Vec<Area>,
    pub middle: Vec<Area>,
    pub low: Vec<Area>,
    pub create: TimestampMs,
    pub since: TimestampMs,
}

impl Snapshot {
    /// The area list for one tier.
    pub fn tier(&self, tier: Tier) -> &[Area] {
        match tier {
            Tier::High => &self.high,
            Tier::Middle => &self.middle,
            Tier::Low => &self.low,
        }
    }

    /// Total number of areas across all tiers.
    pub fn total_areas(&self) -> usize {
        self.high.len() + self.middle.len() + self.low.len()
    }

    /// Returns `true` if no tier has any areas.
    pub fn is_empty(&self) -> bool {
        self.total_areas() == 0
    }

    /// Event equality: same upstream business timestamp.
    pub fn same_event(&self, other: &Snapshot) -> bool {
        self.since == other.since
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(since: TimestampMs) -> Snapshot {
        Snapshot {
            high: vec![Area::new("Beijing", "Beijing", "Chaoyang", "Street A")],
            middle: vec![],
            low: vec![],
            create: 1_700_000_000_000,
            since,
        }
    }

    #[test]
    fn tier_order_is_high_middle_low() {
        assert_eq!(Tier::ALL, [Tier::High, Tier::Middle, Tier::Low]);
    }

    #[test]
    fn tier_accessor_matches_fields() {
        let snap = snapshot(1);
        assert_eq!(snap.tier(Tier::High), snap.high.as_slice());
        assert!(snap.tier(Tier::Middle).is_empty());
        assert!(snap.tier(Tier::Low).is_empty());
    }

    #[test]
    fn total_and_empty() {
        let snap = snapshot(1);
        assert_eq!(snap.total_areas(), 1);
        assert!(!snap.is_empty());

        let empty = Snapshot {
            high: vec![],
            middle: vec![],
            low: vec![],
            create: 0,
            since: 0,
        };
        assert!(empty.is_empty());
    }

    #[test]
    fn same_event_uses_since_only() {
        let a = snapshot(100);
        let mut b = snapshot(100);
        b.create = 999;
        b.high.clear();
        assert!(a.same_event(&b));
        assert!(!a.same_event(&snapshot(101)));
    }

    #[test]
    fn tier_label_display() {
        assert_eq!(format!("{}", Tier::High), "high risk");
        assert_eq!(Tier::Middle.label(), "medium risk");
        assert_eq!(Tier::Low.label(), "low risk");
    }

    #[test]
    fn serde_roundtrip() {
        let snap = snapshot(42);
        let json = serde_json::to_string(&snap).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, parsed);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Tier::Middle).unwrap(), "\"middle\"");
    }
}
