use std::fmt;

use serde::{Deserialize, Serialize};

/// One leaf record of the risk-area hierarchy.
///
/// All four fields are free-text place names as reported by the upstream
/// feed. Empty strings are valid and participate normally (the feed emits an
/// empty `address` when a district is listed without street detail).
///
/// Areas are immutable once produced by ingestion. Set operations across the
/// codebase (diffing, deduplication, freshness marking) compare areas by
/// their [identity key](Area::identity), not field by field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    pub province: String,
    pub city: String,
    pub region: String,
    pub address: String,
}

impl Area {
    pub fn new(
        province: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            city: city.into(),
            region: region.into(),
            address: address.into(),
        }
    }

    /// The identity key: the four fields concatenated in hierarchy order.
    ///
    /// Two areas are the same place iff their identity keys are equal.
    pub fn identity(&self) -> String {
        format!(
            "{}{}{}{}",
            self.province, self.city, self.region, self.address
        )
    }

    /// Identity-key equality.
    pub fn same_place(&self, other: &Area) -> bool {
        self.identity() == other.identity()
    }

    /// A direct-administered municipality reports itself as both province
    /// and city. The table builder collapses those two columns into one.
    pub fn is_municipality(&self) -> bool {
        self.province == self.city
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.province, self.city, self.region, self.address
        )
    }
}

/// The four hierarchy levels of an [`Area`], outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaLevel {
    Province,
    City,
    Region,
    Address,
}

impl AreaLevel {
    /// Levels in grouping order (province first, address last).
    pub const ALL: [AreaLevel; 4] = [
        AreaLevel::Province,
        AreaLevel::City,
        AreaLevel::Region,
        AreaLevel::Address,
    ];

    /// The field of `area` that this level selects.
    pub fn of<'a>(&self, area: &'a Area) -> &'a str {
        match self {
            AreaLevel::Province => &area.province,
            AreaLevel::City => &area.city,
            AreaLevel::Region => &area.region,
            AreaLevel::Address => &area.address,
        }
    }
}
