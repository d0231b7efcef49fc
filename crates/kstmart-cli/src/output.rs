//! Plain-text rendering of catalog listings.

use kstmart_core::catalog::classify_group;
use kstmart_core::models::{CategorySummary, GroupFilter, Product};
use kstmart_core::utils::{format_price, truncate};

/// Column width for category names
const NAME_WIDTH: usize = 24;

/// Column width for product titles
const TITLE_WIDTH: usize = 40;

/// Label shown for the empty category key
const UNCATEGORIZED: &str = "(uncategorized)";

fn category_label(name: &str) -> &str {
    if name.is_empty() {
        UNCATEGORIZED
    } else {
        name
    }
}

pub fn render_categories(summaries: &[CategorySummary], filter: GroupFilter) -> String {
    let mut out = format!("Categories ({})\n", filter);

    if summaries.is_empty() {
        out.push_str("  No categories.\n");
        return out;
    }

    for summary in summaries {
        out.push_str(&format!(
            "  {:<name_w$} {:<12} {:>4} items {:>7} in stock\n",
            truncate(category_label(&summary.name), NAME_WIDTH),
            classify_group(&summary.name).to_string(),
            summary.products_count,
            summary.total_stock,
            name_w = NAME_WIDTH,
        ));
    }
    out
}

pub fn render_products(category: &str, products: &[Product]) -> String {
    let mut out = format!("{} ({} products)\n", category_label(category), products.len());

    for product in products {
        out.push_str(&format!(
            "  #{:<5} {:<title_w$} {:>12} {:>6} in stock\n",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            format_price(product.price),
            product.stock_or_zero(),
            title_w = TITLE_WIDTH,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kstmart_core::models::CategoryGroup;

    fn summary(name: &str, count: usize, stock: u64) -> CategorySummary {
        CategorySummary {
            name: name.to_string(),
            thumbnail: None,
            products_count: count,
            total_stock: stock,
        }
    }

    #[test]
    fn test_render_categories() {
        let text = render_categories(
            &[summary("smartphones", 2, 7), summary("", 1, 0)],
            GroupFilter::All,
        );
        assert!(text.starts_with("Categories (All)\n"));
        assert!(text.contains("smartphones"));
        assert!(text.contains("Electronics"));
        assert!(text.contains("2 items"));
        assert!(text.contains("7 in stock"));
        assert!(text.contains(UNCATEGORIZED));
    }

    #[test]
    fn test_render_categories_empty() {
        let text = render_categories(&[], GroupFilter::Only(CategoryGroup::Food));
        assert_eq!(text, "Categories (Food)\n  No categories.\n");
    }

    #[test]
    fn test_render_products() {
        let products = vec![Product {
            id: 4,
            title: "Cola".to_string(),
            price: 2.0,
            category: "drinks".to_string(),
            stock: Some(100),
            thumbnail: None,
            images: Vec::new(),
        }];
        let text = render_products("drinks", &products);
        assert!(text.starts_with("drinks (1 products)\n"));
        assert!(text.contains("#4"));
        assert!(text.contains("$2.00"));
        assert!(text.contains("100 in stock"));
    }
}
