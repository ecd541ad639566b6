use std::collections::{HashMap, HashSet};

use riskline_diff::TierChanges;
use riskline_types::{Area, AreaLevel, Cell};

/// Build the merged-cell grid for one tier.
///
/// Areas are grouped by province, then city, then region, then address, in
/// first-seen stable group order. For a group of size n, only its first
/// member renders, carrying `rowspan = n`; the remaining members are
/// non-rendering placeholders that keep column alignment. Leaf cells are
/// marked `fresh` when the tier's `add` diff contains their area.
///
/// One row per leaf address, always: rows come out in the fully grouped
/// depth-first order, which may differ from the input order when a group's
/// members are non-contiguous.
pub fn tier_rows(areas: &[Area], changes: &TierChanges) -> Vec<Vec<Cell>> {
    let fresh: HashSet<String> = changes.add.iter().map(Area::identity).collect();
    let mut columns: [Vec<Cell>; 4] = Default::default();
    fill_columns(areas, &fresh, &mut columns, 0);
    columns_to_rows(columns)
}

/// Depth-first pre-order fill of the four level columns.
///
/// Each recursion level appends exactly `areas.len()` cells to its column
/// before descending, so index i across all four columns refers to the same
/// leaf.
fn fill_columns(
    areas: &[Area],
    fresh: &HashSet<String>,
    columns: &mut [Vec<Cell>; 4],
    depth: usize,
) {
    let Some(&level) = AreaLevel::ALL.get(depth) else {
        return;
    };

    for (name, group) in group_by_level(areas, level) {
        for (index, member) in group.iter().enumerate() {
            // Municipality collapse: the province reports itself as city
            // too, so the province cell spans both columns and the city
            // cell is suppressed entirely.
            let municipality = member.is_municipality();
            let (render, colspan) = match level {
                AreaLevel::Province if municipality => (index == 0, 2),
                AreaLevel::City if municipality => (false, 0),
                _ => (index == 0, 1),
            };

            columns[depth].push(Cell {
                level: Some(level),
                value: name.clone(),
                render,
                rowspan: group.len(),
                colspan,
                fresh: level == AreaLevel::Address && fresh.contains(&member.identity()),
            });
        }

        fill_columns(&group, fresh, columns, depth + 1);
    }
}

/// Stable grouping by one level's field, first-seen group order.
fn group_by_level(areas: &[Area], level: AreaLevel) -> Vec<(String, Vec<Area>)> {
    let mut groups: Vec<(String, Vec<Area>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for area in areas {
        let name = level.of(area);
        match positions.get(name) {
            Some(&at) => groups[at].1.push(area.clone()),
            None => {
                positions.insert(name, groups.len());
                groups.push((name.to_owned(), vec![area.clone()]));
            }
        }
    }

    groups
}

/// Zip the per-level columns into rows by index.
fn columns_to_rows(columns: [Vec<Cell>; 4]) -> Vec<Vec<Cell>> {
    let height = columns[0].len();
    debug_assert!(
        columns.iter().all(|column| column.len() == height),
        "level columns must be index-aligned"
    );

    (0..height)
        .map(|i| columns.iter().map(|column| column[i].clone()).collect())
        .collect()
}
