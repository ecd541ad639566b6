use std::collections::HashMap;

use chrono::{DateTime, Utc};

use riskline_diff::{SnapshotDiff, TierChanges};
use riskline_types::{Area, Snapshot, Tier};

/// Produce the ordered summary lines for one snapshot.
///
/// First a timestamp line, then one line per tier in canonical order: the
/// nationwide count with per-province sub-counts, followed by "increased by
/// N (…)" and/or "decreased by N (…)" clauses when `diff` is supplied and
/// non-empty for that tier.
pub fn summary_lines(
    snapshot: &Snapshot,
    diff: Option<&SnapshotDiff>,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + Tier::ALL.len());
    lines.push(format!("As of {},", now.format("%Y-%m-%d %H:%M")));

    for tier in Tier::ALL {
        lines.push(tier_line(
            snapshot.tier(tier),
            tier,
            diff.map(|d| d.tier(tier)),
        ));
    }

    lines
}

fn tier_line(areas: &[Area], tier: Tier, changes: Option<&TierChanges>) -> String {
    let mut line = format!(
        "Nationwide there are {} {} areas",
        areas.len(),
        tier.label()
    );
    if !areas.is_empty() {
        line.push_str(": ");
        line.push_str(&breakdown(areas, "; "));
    }
    line.push('.');

    if let Some(changes) = changes {
        if !changes.add.is_empty() {
            line.push_str(&format!(
                " {} areas increased by {} ({}).",
                sentence_label(tier),
                changes.add.len(),
                breakdown(&changes.add, ", ")
            ));
        }
        if !changes.remove.is_empty() {
            line.push_str(&format!(
                " {} areas decreased by {} ({}).",
                sentence_label(tier),
                changes.remove.len(),
                breakdown(&changes.remove, ", ")
            ));
        }
    }

    line
}

/// Per-province counts in first-seen order, rendered as "Name N" pairs.
fn breakdown(areas: &[Area], separator: &str) -> String {
    province_counts(areas)
        .iter()
        .map(|(name, count)| format!("{name} {count}"))
        .collect::<Vec<_>>()
        .join(separator)
}

fn province_counts(areas: &[Area]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for area in areas {
        match positions.get(area.province.as_str()) {
            Some(&at) => counts[at].1 += 1,
            None => {
                positions.insert(&area.province, counts.len());
                counts.push((area.province.clone(), 1));
            }
        }
    }

    counts
}

fn sentence_label(tier: Tier) -> String {
    let mut chars = tier.label().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use riskline_diff::diff_snapshots;

    use super::*;

    fn area(province: &str, address: &str) -> Area {
        Area::new(province, format!("{province} City"), "Central", address)
    }

    fn snapshot(high: Vec<Area>, middle: Vec<Area>, since: i64) -> Snapshot {
        Snapshot {
            high,
            middle,
            low: vec![],
            create: since,
            since,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 5, 4, 12, 30, 0).unwrap()
    }

    #[test]
    fn timestamp_line_comes_first() {
        let lines = summary_lines(&snapshot(vec![], vec![], 1), None, noon());
        assert_eq!(lines[0], "As of 2022-05-04 12:30,");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn counts_group_by_province_in_first_seen_order() {
        let snap = snapshot(
            vec![
                area("Hebei", "Street A"),
                area("Beijing", "Street B"),
                area("Hebei", "Street C"),
            ],
            vec![],
            1,
        );
        let lines = summary_lines(&snap, None, noon());
        assert_eq!(
            lines[1],
            "Nationwide there are 3 high risk areas: Hebei 2; Beijing 1."
        );
    }

    #[test]
    fn empty_tier_has_bare_count_line() {
        let lines = summary_lines(&snapshot(vec![], vec![], 1), None, noon());
        assert_eq!(lines[1], "Nationwide there are 0 high risk areas.");
        assert_eq!(lines[3], "Nationwide there are 0 low risk areas.");
    }

    #[test]
    fn diff_adds_increase_and_decrease_clauses() {
        let before = snapshot(
            vec![area("Hebei", "Street A"), area("Hebei", "Street B")],
            vec![],
            1,
        );
        let after = snapshot(
            vec![area("Hebei", "Street A"), area("Beijing", "Street C")],
            vec![],
            2,
        );
        let diff = diff_snapshots(&before, &after);
        let lines = summary_lines(&after, Some(&diff), noon());
        assert_eq!(
            lines[1],
            "Nationwide there are 2 high risk areas: Hebei 1; Beijing 1. \
             High risk areas increased by 1 (Beijing 1). \
             High risk areas decreased by 1 (Hebei 1)."
        );
    }

    #[test]
    fn unchanged_tier_gets_no_clauses() {
        let snap = snapshot(vec![], vec![area("Hebei", "Street A")], 1);
        let diff = diff_snapshots(&snap, &snap);
        let lines = summary_lines(&snap, Some(&diff), noon());
        assert_eq!(
            lines[2],
            "Nationwide there are 1 medium risk areas: Hebei 1."
        );
    }
}
