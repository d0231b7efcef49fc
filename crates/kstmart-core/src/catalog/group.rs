use crate::models::{CategoryGroup, CategorySummary, GroupFilter};

/// Keyword table, checked top to bottom. Order matters: a key such as
/// "electric-kitchen" must land in Electronics, not Home.
const GROUP_KEYWORDS: &[(CategoryGroup, &[&str])] = &[
    (CategoryGroup::Electronics, &["elect"]),
    (CategoryGroup::Electronics, &["phone", "laptop", "computer"]),
    (CategoryGroup::Home, &["home", "kitchen", "furn"]),
    (CategoryGroup::Clothing, &["clothing", "shirt", "jeans"]),
    (CategoryGroup::Food, &["food", "snack", "drink"]),
];

/// Map a category key onto its filter tab by case-insensitive substring match.
pub fn classify_group(category: &str) -> CategoryGroup {
    let key = category.to_lowercase();
    GROUP_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| key.contains(k)))
        .map(|(group, _)| *group)
        .unwrap_or(CategoryGroup::Other)
}

/// Keep only the summaries visible under the selected tab.
pub fn filter_by_group(summaries: &[CategorySummary], filter: GroupFilter) -> Vec<CategorySummary> {
    match filter {
        GroupFilter::All => summaries.to_vec(),
        GroupFilter::Only(group) => summaries
            .iter()
            .filter(|s| classify_group(&s.name) == group)
            .cloned()
            .collect(),
    }
}
