//! Feed filter model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::SortKey;

/// Inclusive price band on a wish's funding target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound, inclusive.
    pub min: Decimal,
    /// Upper bound, inclusive.
    pub max: Decimal,
}

impl PriceRange {
    /// Whether `target` falls inside the band.
    #[must_use]
    pub fn contains(&self, target: Decimal) -> bool {
        self.min <= target && target <= self.max
    }
}

/// Active feed filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishFilters {
    /// Only wishes in this category.
    pub category: Option<String>,
    /// Only wishes whose target falls in this band.
    pub price_range: Option<PriceRange>,
    /// Feed ordering.
    pub sort: SortKey,
}

/// Partial filter update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    /// New category filter. `Some(None)` clears it.
    pub category: Option<Option<String>>,
    /// New price band. `Some(None)` clears it.
    pub price_range: Option<Option<PriceRange>>,
    /// New ordering.
    pub sort: Option<SortKey>,
}

impl WishFilters {
    /// Merge a partial update into the active filters.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(sort) = update.sort {
            self.sort = sort;
        }
    }
}
