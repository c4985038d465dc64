//! Tests for the routing system
//!
//! Validates route definitions, parameter handling, and path rendering for
//! the community hub's routing infrastructure.

use crate::routes::MainRoute;
use strum::IntoEnumIterator;
use yew_router::Routable;

/// Tests route enum variants
#[test]
fn test_route_variants() {
    let home = MainRoute::Home;
    let assistant = MainRoute::Assistant;
    let news = MainRoute::News;
    let not_found = MainRoute::NotFound;
    let article = MainRoute::NewsArticle { id: 2 };

    // Test Debug trait
    assert!(format!("{home:?}").contains("Home"));
    assert!(format!("{assistant:?}").contains("Assistant"));
    assert!(format!("{news:?}").contains("News"));
    assert!(format!("{not_found:?}").contains("NotFound"));
    assert!(format!("{article:?}").contains("NewsArticle"));
}

/// Tests route equality
#[test]
fn test_route_equality() {
    assert_eq!(MainRoute::Home, MainRoute::Home);
    assert_ne!(MainRoute::Home, MainRoute::Dashboard);

    let article1 = MainRoute::NewsArticle { id: 1 };
    let article2 = MainRoute::NewsArticle { id: 1 };
    let article3 = MainRoute::NewsArticle { id: 3 };
    assert_eq!(article1, article2);
    assert_ne!(article1, article3);
}

/// Tests path rendering for static and parameterized routes
#[test]
fn test_route_paths() {
    assert_eq!(MainRoute::Home.to_path(), "/");
    assert_eq!(MainRoute::Assistant.to_path(), "/ai-assistant");
    assert_eq!(MainRoute::News.to_path(), "/news");
    assert_eq!(MainRoute::NewsArticle { id: 7 }.to_path(), "/news/7");
    assert_eq!(
        MainRoute::MarketplaceDetail { id: 12 }.to_path(),
        "/marketplace/12"
    );
    assert_eq!(MainRoute::BusinessDetail { id: 3 }.to_path(), "/business/3");
}

/// Tests path recognition, including the not-found fallback
#[test]
fn test_route_recognition() {
    assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
    assert_eq!(MainRoute::recognize("/deals"), Some(MainRoute::Deals));
    assert_eq!(
        MainRoute::recognize("/news/2"),
        Some(MainRoute::NewsArticle { id: 2 })
    );
    assert_eq!(
        MainRoute::recognize("/definitely/not/a/page"),
        Some(MainRoute::NotFound)
    );
}

/// Tests that every route produces a distinct path
#[test]
fn test_route_paths_are_distinct() {
    let paths: Vec<String> = MainRoute::iter().map(|route| route.to_path()).collect();
    let mut deduped = paths.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(paths.len(), deduped.len());
}

/// Tests route cloning
#[test]
fn test_route_cloning() {
    let original = MainRoute::Marketplace;
    let cloned = original.clone();
    assert_eq!(original, cloned);

    let detail = MainRoute::MarketplaceDetail { id: 4 };
    assert_eq!(detail.clone(), detail);
}
