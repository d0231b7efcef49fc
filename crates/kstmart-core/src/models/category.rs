use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Aggregate view of every product sharing one category key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct CategorySummary {
    pub name: String,
    pub thumbnail: Option<String>,
    pub products_count: usize,
    pub total_stock: u64,
}

/// Coarse grouping used by the category filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum CategoryGroup {
    Electronics,
    Home,
    Clothing,
    Food,
    Other,
}

impl CategoryGroup {
    /// All groups in tab order.
    pub const ALL: [CategoryGroup; 5] = [
        CategoryGroup::Electronics,
        CategoryGroup::Home,
        CategoryGroup::Clothing,
        CategoryGroup::Food,
        CategoryGroup::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryGroup::Electronics => "Electronics",
            CategoryGroup::Home => "Home",
            CategoryGroup::Clothing => "Clothing",
            CategoryGroup::Food => "Food",
            CategoryGroup::Other => "Other",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown category group: {}", s))
    }
}

/// Selected filter tab: everything, or a single group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Only(CategoryGroup),
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::All => f.write_str("All"),
            GroupFilter::Only(group) => group.fmt(f),
        }
    }
}

impl FromStr for GroupFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(GroupFilter::All)
        } else {
            s.parse().map(GroupFilter::Only)
        }
    }
}
