use std::collections::HashMap;

use crate::models::{CategorySummary, Product};

/// Build one summary per distinct category, in the order each category
/// first appears in `products`.
///
/// The first product seen for a category fixes its thumbnail. Later products
/// never replace it, even when the first one had no image at all.
pub fn aggregate(products: &[Product]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        match index.get(product.category.as_str()) {
            Some(&i) => {
                let summary = &mut summaries[i];
                summary.products_count += 1;
                summary.total_stock += product.stock_or_zero();
            }
            None => {
                index.insert(product.category.as_str(), summaries.len());
                summaries.push(CategorySummary {
                    name: product.category.clone(),
                    thumbnail: product.display_image().map(str::to_string),
                    products_count: 1,
                    total_stock: product.stock_or_zero(),
                });
            }
        }
    }

    summaries
}

/// Group products by category, preserving first-seen category order and
/// input order within each group.
pub fn products_by_category(products: &[Product]) -> Vec<(String, Vec<Product>)> {
    let mut groups: Vec<(String, Vec<Product>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        let i = *index.entry(product.category.as_str()).or_insert_with(|| {
            groups.push((product.category.clone(), Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(product.clone());
    }

    groups
}

/// Products whose category equals `name` exactly, in input order.
pub fn products_in_category(products: &[Product], name: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category == name)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: i64, category: &str, stock: Option<u32>) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 10.0,
            category: category.to_string(),
            stock,
            thumbnail: None,
            images: Vec::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            Product {
                title: "Phone X".to_string(),
                thumbnail: Some("t1".to_string()),
                ..product(1, "smartphones", Some(5))
            },
            Product {
                title: "Laptop Z".to_string(),
                images: vec!["i2".to_string()],
                ..product(2, "laptops", Some(3))
            },
            product(3, "mens-shirts", Some(20)),
            product(4, "drinks", Some(100)),
            product(5, "smartphones", Some(2)),
        ]
    }

    #[test]
    fn test_aggregate_example() {
        let products = vec![
            Product {
                thumbnail: Some("t1".to_string()),
                ..product(1, "smartphones", Some(5))
            },
            product(2, "smartphones", Some(2)),
        ];
        assert_eq!(
            aggregate(&products),
            vec![CategorySummary {
                name: "smartphones".to_string(),
                thumbnail: Some("t1".to_string()),
                products_count: 2,
                total_stock: 7,
            }]
        );
    }

    #[test]
    fn test_aggregate_first_seen_order() {
        let names: Vec<String> = aggregate(&sample()).into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["smartphones", "laptops", "mens-shirts", "drinks"]);
    }

    #[test]
    fn test_aggregate_thumbnail_from_images() {
        let summaries = aggregate(&sample());
        let laptops = summaries.iter().find(|s| s.name == "laptops").unwrap();
        assert_eq!(laptops.thumbnail.as_deref(), Some("i2"));
        assert_eq!(laptops.products_count, 1);
        assert_eq!(laptops.total_stock, 3);
    }

    #[test]
    fn test_aggregate_first_thumbnail_wins_even_when_absent() {
        let products = vec![
            product(1, "tops", Some(1)),
            Product {
                thumbnail: Some("late".to_string()),
                ..product(2, "tops", Some(1))
            },
        ];
        let summaries = aggregate(&products);
        assert_eq!(summaries[0].thumbnail, None);
    }

    #[test]
    fn test_aggregate_missing_stock_counts_as_zero() {
        let products = vec![product(1, "misc", None), product(2, "misc", Some(4))];
        assert_eq!(aggregate(&products)[0].total_stock, 4);
    }

    #[test]
    fn test_aggregate_empty_category_is_a_key() {
        let products = vec![product(1, "", Some(1)), product(2, "", Some(2))];
        let summaries = aggregate(&products);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "");
        assert_eq!(summaries[0].products_count, 2);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_products_by_category() {
        let groups = products_by_category(&sample());
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["smartphones", "laptops", "mens-shirts", "drinks"]);
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].1[0].title, "Laptop Z");
    }

    #[test]
    fn test_products_in_category() {
        let phones = products_in_category(&sample(), "smartphones");
        let ids: Vec<i64> = phones.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 5]);
        assert!(products_in_category(&sample(), "unknown").is_empty());
    }

    fn arb_product() -> impl Strategy<Value = Product> {
        (
            any::<i64>(),
            prop::sample::select(vec!["", "a", "b", "c", "d"]),
            proptest::option::of(0u32..1000),
            proptest::option::of("[a-z]{0,3}"),
        )
            .prop_map(|(id, category, stock, thumbnail)| Product {
                thumbnail,
                ..product(id, category, stock)
            })
    }

    proptest! {
        #[test]
        fn prop_counts_sum_to_len(products in prop::collection::vec(arb_product(), 0..40)) {
            let total: usize = aggregate(&products).iter().map(|s| s.products_count).sum();
            prop_assert_eq!(total, products.len());
        }

        #[test]
        fn prop_stock_matches_category_sum(products in prop::collection::vec(arb_product(), 0..40)) {
            for summary in aggregate(&products) {
                let expected: u64 = products
                    .iter()
                    .filter(|p| p.category == summary.name)
                    .map(Product::stock_or_zero)
                    .sum();
                prop_assert_eq!(summary.total_stock, expected);
                prop_assert!(summary.products_count >= 1);
            }
        }

        #[test]
        fn prop_thumbnail_from_first_product(products in prop::collection::vec(arb_product(), 0..40)) {
            for summary in aggregate(&products) {
                let first = products.iter().find(|p| p.category == summary.name).unwrap();
                prop_assert_eq!(summary.thumbnail.as_deref(), first.display_image());
            }
        }
    }
}
