use serde::{Deserialize, Serialize};

use super::Categorized;

/// A local business shown in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Average review rating, `0.0..=5.0`.
    pub rating: f32,
    pub review_count: u32,
    pub address: String,
    pub phone: String,
    pub website: String,
    /// Display string, e.g. "Open until 10:00 PM".
    pub hours: String,
    pub description: String,
    pub is_featured: bool,
}

impl Categorized for Business {
    fn category(&self) -> &str {
        &self.category
    }
}

/// A service provider shown in the local services directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub phone: String,
    /// Average review rating, `0.0..=5.0`.
    pub rating: f32,
    /// Display string, e.g. "Mon–Fri, 9 AM–5 PM".
    pub availability: String,
}

impl Categorized for ServiceProvider {
    fn category(&self) -> &str {
        &self.category
    }
}
