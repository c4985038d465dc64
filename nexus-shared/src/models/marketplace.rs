use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Categorized;

/// A classified listing in the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    /// Display price, e.g. "$1,200/month" or "$450".
    pub price: String,
    pub category: String,
    pub location: String,
    pub posted_at: DateTime<Utc>,
    pub seller: String,
    pub description: String,
    pub is_featured: bool,
}

impl Categorized for Listing {
    fn category(&self) -> &str {
        &self.category
    }
}

/// A promotional deal offered by a local business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: u32,
    pub title: String,
    pub business: String,
    pub category: String,
    /// Display discount, e.g. "50%".
    pub discount: String,
    pub description: String,
    /// Display expiry, e.g. "June 30".
    pub valid_until: String,
    /// Redemption code presented at checkout.
    pub code: String,
}

impl Categorized for Deal {
    fn category(&self) -> &str {
        &self.category
    }
}
