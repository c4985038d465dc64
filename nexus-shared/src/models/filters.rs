use serde::{Deserialize, Serialize};

/// Listing filters scoped to the current session.
///
/// Session-local: never written to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Category slug, `"all"` for no narrowing.
    pub category: String,
    /// Inclusive price range in whole dollars.
    pub price_range: (u32, u32),
    /// Location slug, `"all"` for no narrowing.
    pub location: String,
    /// Date-range slug, `"all"` for no narrowing.
    pub date_range: String,
}

impl Default for ListingFilters {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            price_range: (0, 1_000_000),
            location: "all".to_string(),
            date_range: "all".to_string(),
        }
    }
}

impl ListingFilters {
    /// Shallow-merge `update` into the current filters.
    ///
    /// Fields the update leaves as `None` keep their prior value.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price_range) = update.price_range {
            self.price_range = price_range;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(date_range) = update.date_range {
            self.date_range = date_range;
        }
    }
}

/// Partial filter update; unset fields retain their prior value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub category: Option<String>,
    pub price_range: Option<(u32, u32)>,
    pub location: Option<String>,
    pub date_range: Option<String>,
}

impl FilterUpdate {
    /// Update that only replaces the category slug.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_wide_open() {
        let filters = ListingFilters::default();
        assert_eq!(filters.category, "all");
        assert_eq!(filters.price_range, (0, 1_000_000));
        assert_eq!(filters.location, "all");
        assert_eq!(filters.date_range, "all");
    }

    #[test]
    fn test_apply_merges_only_set_fields() {
        let mut filters = ListingFilters {
            category: "jobs".to_string(),
            price_range: (100, 500),
            location: "downtown".to_string(),
            date_range: "week".to_string(),
        };

        filters.apply(FilterUpdate::category("realestate"));

        assert_eq!(filters.category, "realestate");
        assert_eq!(filters.price_range, (100, 500));
        assert_eq!(filters.location, "downtown");
        assert_eq!(filters.date_range, "week");
    }

    #[test]
    fn test_apply_with_empty_update_is_a_no_op() {
        let mut filters = ListingFilters::default();
        let before = filters.clone();
        filters.apply(FilterUpdate::default());
        assert_eq!(filters, before);
    }
}
