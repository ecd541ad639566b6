use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use riskline_types::{Area, Snapshot, Tier};

/// Added and removed areas for one tier.
///
/// `add` holds areas present in `after` but not `before`, in `after`'s
/// relative order; `remove` the converse in `before`'s order. Both are
/// proper set differences by identity key, so no area appears in both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierChanges {
    pub add: Vec<Area>,
    pub remove: Vec<Area>,
}

impl TierChanges {
    /// Returns `true` if the tier neither gained nor lost areas.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// The per-tier changes between two snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDiff {
    pub high: TierChanges,
    pub middle: TierChanges,
    pub low: TierChanges,
}

impl SnapshotDiff {
    /// The changes for one tier.
    pub fn tier(&self, tier: Tier) -> &TierChanges {
        match tier {
            Tier::High => &self.high,
            Tier::Middle => &self.middle,
            Tier::Low => &self.low,
        }
    }

    /// Returns `true` if no tier changed.
    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|&t| self.tier(t).is_empty())
    }
}

/// Compute the per-tier diff between two snapshots.
///
/// For each tier independently: `add = after \ before` and
/// `remove = before \ after`, by identity-key set difference.
pub fn diff_snapshots(before: &Snapshot, after: &Snapshot) -> SnapshotDiff {
    let changes = |tier: Tier| TierChanges {
        add: difference(after.tier(tier), before.tier(tier)),
        remove: difference(before.tier(tier), after.tier(tier)),
    };

    SnapshotDiff {
        high: changes(Tier::High),
        middle: changes(Tier::Middle),
        low: changes(Tier::Low),
    }
}

/// Content equality: every tier holds the same set of areas regardless of
/// order. Distinct from event equality ([`Snapshot::same_event`]), which
/// compares only the `since` timestamps.
pub fn same_content(a: &Snapshot, b: &Snapshot) -> bool {
    diff_snapshots(a, b).is_empty()
}

/// Areas of `from` whose identity key is absent from `subtract`, preserving
/// `from`'s relative order.
fn difference(from: &[Area], subtract: &[Area]) -> Vec<Area> {
    let keys: HashSet<String> = subtract.iter().map(Area::identity).collect();
    from.iter()
        .filter(|area| !keys.contains(&area.identity()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(region: &str, address: &str) -> Area {
        Area::new("Beijing", "Beijing", region, address)
    }

    fn snapshot(high: Vec<Area>, since: i64) -> Snapshot {
        Snapshot {
            high,
            middle: vec![],
            low: vec![],
            create: since,
            since,
        }
    }

    #[test]
    fn identical_snapshots_have_empty_diff() {
        let snap = snapshot(
            vec![area("Chaoyang", "Street A"), area("Haidian", "Street B")],
            1,
        );
        let diff = diff_snapshots(&snap, &snap);
        assert!(diff.is_empty());
        assert!(diff.high.is_empty());
    }

    #[test]
    fn added_leaf_is_reported_for_its_tier_only() {
        let s1 = snapshot(vec![area("Chaoyang", "Street A")], 1);
        let s2 = snapshot(
            vec![area("Chaoyang", "Street A"), area("Haidian", "Street B")],
            2,
        );
        let diff = diff_snapshots(&s1, &s2);
        assert_eq!(diff.high.add, vec![area("Haidian", "Street B")]);
        assert!(diff.high.remove.is_empty());
        assert!(diff.middle.is_empty());
        assert!(diff.low.is_empty());
    }

    #[test]
    fn removal_is_the_mirror_of_addition() {
        let s1 = snapshot(
            vec![area("Chaoyang", "Street A"), area("Haidian", "Street B")],
            1,
        );
        let s2 = snapshot(vec![area("Haidian", "Street B")], 2);
        let diff = diff_snapshots(&s1, &s2);
        assert_eq!(diff.high.remove, vec![area("Chaoyang", "Street A")]);
        assert!(diff.high.add.is_empty());
    }

    #[test]
    fn add_preserves_after_order_remove_preserves_before_order() {
        let s1 = snapshot(vec![area("R1", "A"), area("R2", "B"), area("R3", "C")], 1);
        let s2 = snapshot(vec![area("R4", "D"), area("R2", "B"), area("R5", "E")], 2);
        let diff = diff_snapshots(&s1, &s2);
        assert_eq!(diff.high.add, vec![area("R4", "D"), area("R5", "E")]);
        assert_eq!(diff.high.remove, vec![area("R1", "A"), area("R3", "C")]);
    }

    #[test]
    fn no_area_in_both_add_and_remove() {
        let s1 = snapshot(vec![area("R1", "A"), area("R2", "B")], 1);
        let s2 = snapshot(vec![area("R2", "B"), area("R3", "C")], 2);
        let diff = diff_snapshots(&s1, &s2);
        for added in &diff.high.add {
            assert!(!diff.high.remove.iter().any(|r| r.same_place(added)));
        }
    }

    #[test]
    fn tiers_diff_independently() {
        let mut s1 = snapshot(vec![area("R1", "A")], 1);
        s1.middle = vec![area("R9", "Z")];
        let mut s2 = snapshot(vec![area("R1", "A")], 2);
        s2.low = vec![area("R9", "Z")];

        let diff = diff_snapshots(&s1, &s2);
        assert!(diff.high.is_empty());
        assert_eq!(diff.middle.remove, vec![area("R9", "Z")]);
        assert_eq!(diff.low.add, vec![area("R9", "Z")]);
    }

    #[test]
    fn same_content_ignores_order() {
        let s1 = snapshot(vec![area("R1", "A"), area("R2", "B")], 1);
        let s2 = snapshot(vec![area("R2", "B"), area("R1", "A")], 2);
        assert!(same_content(&s1, &s2));
        assert!(!s1.same_event(&s2));
    }

    #[test]
    fn same_content_detects_any_tier_difference() {
        let s1 = snapshot(vec![area("R1", "A")], 1);
        let mut s2 = s1.clone();
        s2.low = vec![area("R2", "B")];
        assert!(!same_content(&s1, &s2));
    }

    #[test]
    fn serde_roundtrip() {
        let s1 = snapshot(vec![area("R1", "A")], 1);
        let s2 = snapshot(vec![area("R2", "B")], 2);
        let diff = diff_snapshots(&s1, &s2);
        let json = serde_json::to_string(&diff).unwrap();
        let parsed: SnapshotDiff = serde_json::from_str(&json).unwrap();
        assert_eq!(diff, parsed);
    }
}
