//! Ranked best-selling categories

use super::Aggregator;
use crate::store::Snapshot;
use commerce_common::constants::DEFAULT_TOP_CATEGORIES;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Line items recorded for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Product category
    pub category: String,
    /// Line items in the category
    pub count: u64,
}

/// The `k` categories with the most line items, descending by count
///
/// Equal counts keep the order in which the categories were first
/// encountered. Records without a category are not counted.
#[derive(Debug, Clone, Copy)]
pub struct TopCategories {
    k: usize,
}

impl Default for TopCategories {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_CATEGORIES)
    }
}

impl TopCategories {
    /// Rank the top `k` categories
    #[must_use]
    pub const fn new(k: usize) -> Self {
        Self { k }
    }

    /// Maximum number of categories returned
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }
}

impl Aggregator for TopCategories {
    type Output = Vec<CategoryCount>;

    const NAME: &'static str = "top_categories";

    fn aggregate(&self, snapshot: &Snapshot<'_>) -> Self::Output {
        let mut counts: Vec<CategoryCount> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();

        for record in snapshot.iter() {
            let Some(category) = record.product_category.as_deref() else {
                continue;
            };
            let slot = *index.entry(category).or_insert_with(|| {
                counts.push(CategoryCount {
                    category: category.to_string(),
                    count: 0,
                });
                counts.len() - 1
            });
            counts[slot].count += 1;
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(self.k);
        counts
    }
}
