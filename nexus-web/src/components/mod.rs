pub(crate) mod breaking_news_bar;
pub(crate) mod category_pills;
pub(crate) mod emergency_alerts;
pub(crate) mod star_rating;
pub(crate) mod theme_switcher;
pub(crate) mod weather_widget;

// Re-export components for convenience
pub use category_pills::CategoryPills;
pub use star_rating::StarRating;
