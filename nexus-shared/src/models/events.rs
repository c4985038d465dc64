use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Categorized;

/// A community event shown on the events calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    /// Display time window, e.g. "8:00 AM - 1:00 PM".
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    /// Expected attendee count.
    pub attendees: u32,
}

impl Categorized for CommunityEvent {
    fn category(&self) -> &str {
        &self.category
    }
}
