use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Categorized;

/// A news article rendered by the news center and article pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub summary: String,
    /// Full article body shown on the detail page.
    pub body: String,
    pub category: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    /// Estimated reading time in minutes.
    pub read_minutes: u32,
    pub views: u32,
    /// Breaking articles can be pinned to the global banner.
    pub is_breaking: bool,
}

impl Categorized for NewsArticle {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Relative age label for published content: "Just now", "3h ago", "2d ago".
pub fn time_ago(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - published_at).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else {
        format!("{}d ago", hours / 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert_eq!(time_ago(now - Duration::minutes(30), now), "Just now");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
    }
}
