use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Product;
use crate::utils::{cmp_ignore_case, contains_ignore_case};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    #[default]
    Price,
    Name,
    Rating,
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortType::Price => write!(f, "price"),
            SortType::Name => write!(f, "name"),
            SortType::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "price" => Ok(SortType::Price),
            "name" => Ok(SortType::Name),
            "rating" => Ok(SortType::Rating),
            other => Err(format!("unknown sort: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Grid,
    List,
}

/// Listing preferences: sort key, title filter and layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub sort: SortType,
    pub filter: String,
    pub view: ViewType,
}

impl Preferences {
    pub fn with_sort(&self, sort: SortType) -> Self {
        Self { sort, ..self.clone() }
    }

    pub fn with_filter(&self, filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..self.clone()
        }
    }

    pub fn with_view(&self, view: ViewType) -> Self {
        Self { view, ..self.clone() }
    }
}

/// Products matching the title filter, ordered by the sort preference.
///
/// Products carry no rating, so `Rating` keeps input order. All sorts are
/// stable.
pub fn apply_preferences(products: &[Product], prefs: &Preferences) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| contains_ignore_case(&p.title, &prefs.filter))
        .cloned()
        .collect();

    match prefs.sort {
        SortType::Price => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortType::Name => visible.sort_by(|a, b| cmp_ignore_case(&a.title, &b.title)),
        SortType::Rating => {}
    }

    visible
}
