//! The hard-coded content catalog the pages render.
//!
//! Everything here is inert display data: pages filter it client-side by
//! category and never mutate it. A real deployment would replace this
//! module with backend queries.

use chrono::{NaiveDate, TimeZone, Utc};
use shared::models::{Business, CommunityEvent, Deal, Listing, NewsArticle, ServiceProvider};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid catalog date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid catalog timestamp")
}

/// Articles for the news center.
pub fn news_articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 1,
            title: "City Council Approves New Downtown Development".to_string(),
            summary: "The city council voted 7-2 to approve the new mixed-use development \
                      project that will bring 200 residential units and retail space to \
                      downtown."
                .to_string(),
            body: "After months of public hearings, the council approved the downtown \
                   mixed-use project on a 7-2 vote. The development adds 200 residential \
                   units, ground-floor retail, and a public plaza. Construction is expected \
                   to begin this fall, with the first units available in about two years. \
                   Opponents cited parking pressure; the approved plan includes a shared \
                   garage and transit passes for residents."
                .to_string(),
            category: "government".to_string(),
            author: "Sarah Johnson".to_string(),
            published_at: datetime(2024, 1, 15, 10, 30),
            read_minutes: 3,
            views: 1250,
            is_breaking: false,
        },
        NewsArticle {
            id: 2,
            title: "Weather Alert: Heavy Snow Expected This Weekend".to_string(),
            summary: "National Weather Service issues winter storm warning with 6-10 inches \
                      of snow expected Friday night through Saturday."
                .to_string(),
            body: "A winter storm warning is in effect from Friday evening through Saturday \
                   afternoon. Forecasters expect 6-10 inches of snow with gusty winds and \
                   reduced visibility. Public works crews will pre-treat main routes \
                   starting Friday morning. Residents are asked to move vehicles off snow \
                   emergency routes and check on elderly neighbors."
                .to_string(),
            category: "breaking".to_string(),
            author: "Weather Service".to_string(),
            published_at: datetime(2024, 1, 15, 8, 15),
            read_minutes: 2,
            views: 3420,
            is_breaking: true,
        },
        NewsArticle {
            id: 3,
            title: "New Restaurant Opens on Main Street".to_string(),
            summary: "Local chef Maria Rodriguez opens her dream restaurant featuring \
                      authentic Mexican cuisine in the heart of downtown."
                .to_string(),
            body: "Maria Rodriguez spent a decade cooking in family kitchens before opening \
                   her own place on Main Street. The menu leans on recipes from her \
                   grandmother's notebook, with fresh tortillas made in view of the dining \
                   room. Opening week drew lines around the block; reservations are \
                   recommended for weekends."
                .to_string(),
            category: "local".to_string(),
            author: "Food Reporter".to_string(),
            published_at: datetime(2024, 1, 14, 16, 45),
            read_minutes: 4,
            views: 892,
            is_breaking: false,
        },
        NewsArticle {
            id: 4,
            title: "Annual Music Festival Announces Lineup".to_string(),
            summary: "The summer music festival reveals this year's headliners including \
                      several Grammy-winning artists and local bands."
                .to_string(),
            body: "Festival organizers announced a lineup mixing national headliners with a \
                   dozen local acts across three stages. Early-bird passes go on sale next \
                   Monday, with a resident discount available at city hall. Proceeds fund \
                   the parks department's free summer concert series."
                .to_string(),
            category: "events".to_string(),
            author: "Entertainment Desk".to_string(),
            published_at: datetime(2024, 1, 14, 14, 20),
            read_minutes: 3,
            views: 2156,
            is_breaking: false,
        },
    ]
}

/// Businesses for the directory.
pub fn businesses() -> Vec<Business> {
    vec![
        Business {
            id: 1,
            name: "Maria's Authentic Mexican".to_string(),
            category: "restaurants".to_string(),
            rating: 4.8,
            review_count: 127,
            address: "123 Main Street".to_string(),
            phone: "(555) 123-4567".to_string(),
            website: "mariasrestaurant.com".to_string(),
            hours: "Open until 10:00 PM".to_string(),
            description: "Authentic Mexican cuisine with fresh ingredients and traditional \
                          recipes."
                .to_string(),
            is_featured: true,
        },
        Business {
            id: 2,
            name: "Downtown Auto Repair".to_string(),
            category: "automotive".to_string(),
            rating: 4.6,
            review_count: 89,
            address: "456 Oak Avenue".to_string(),
            phone: "(555) 234-5678".to_string(),
            website: "downtownauto.com".to_string(),
            hours: "Open until 6:00 PM".to_string(),
            description: "Full-service auto repair with certified mechanics and quality \
                          parts."
                .to_string(),
            is_featured: false,
        },
        Business {
            id: 3,
            name: "City Medical Center".to_string(),
            category: "healthcare".to_string(),
            rating: 4.9,
            review_count: 203,
            address: "789 Health Drive".to_string(),
            phone: "(555) 345-6789".to_string(),
            website: "citymedical.org".to_string(),
            hours: "Open 24 hours".to_string(),
            description: "Comprehensive healthcare services with experienced medical \
                          professionals."
                .to_string(),
            is_featured: true,
        },
        Business {
            id: 4,
            name: "Boutique Fashion Store".to_string(),
            category: "retail".to_string(),
            rating: 4.7,
            review_count: 156,
            address: "321 Fashion Boulevard".to_string(),
            phone: "(555) 456-7890".to_string(),
            website: "boutiquefashion.com".to_string(),
            hours: "Open until 8:00 PM".to_string(),
            description: "Trendy clothing and accessories for fashion-forward individuals."
                .to_string(),
            is_featured: false,
        },
        Business {
            id: 5,
            name: "Professional Cleaning Services".to_string(),
            category: "services".to_string(),
            rating: 4.5,
            review_count: 74,
            address: "654 Service Lane".to_string(),
            phone: "(555) 567-8901".to_string(),
            website: "proclean.com".to_string(),
            hours: "Open until 5:00 PM".to_string(),
            description: "Professional residential and commercial cleaning services."
                .to_string(),
            is_featured: false,
        },
        Business {
            id: 6,
            name: "Corner Coffee House".to_string(),
            category: "restaurants".to_string(),
            rating: 4.4,
            review_count: 312,
            address: "987 Coffee Street".to_string(),
            phone: "(555) 678-9012".to_string(),
            website: "cornercoffee.com".to_string(),
            hours: "Open until 9:00 PM".to_string(),
            description: "Artisan coffee, fresh pastries, and cozy atmosphere for work or \
                          relaxation."
                .to_string(),
            is_featured: true,
        },
    ]
}

/// Classified listings for the marketplace.
pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "2BR Downtown Apartment".to_string(),
            price: "$1,200/month".to_string(),
            category: "realestate".to_string(),
            location: "Downtown District".to_string(),
            posted_at: datetime(2024, 1, 15, 10, 0),
            seller: "Property Manager".to_string(),
            description: "Bright two-bedroom apartment above the Main Street shops. Heat \
                          and water included, laundry in building, available March 1."
                .to_string(),
            is_featured: true,
        },
        Listing {
            id: 2,
            title: "2019 Honda Civic - Low Miles".to_string(),
            price: "$18,500".to_string(),
            category: "automotive".to_string(),
            location: "Riverside".to_string(),
            posted_at: datetime(2024, 1, 15, 8, 30),
            seller: "Private Seller".to_string(),
            description: "One owner, 32k miles, dealer-serviced. Clean title, new tires \
                          last fall."
                .to_string(),
            is_featured: false,
        },
        Listing {
            id: 3,
            title: "Barista - Corner Coffee House".to_string(),
            price: "$17/hour".to_string(),
            category: "jobs".to_string(),
            location: "Downtown District".to_string(),
            posted_at: datetime(2024, 1, 14, 15, 0),
            seller: "Corner Coffee House".to_string(),
            description: "Part-time barista, weekend mornings. Experience preferred but \
                          we train. Tips plus shift meals."
                .to_string(),
            is_featured: false,
        },
        Listing {
            id: 4,
            title: "Vintage Guitar - Excellent Condition".to_string(),
            price: "$450".to_string(),
            category: "general".to_string(),
            location: "Oak Hill".to_string(),
            posted_at: datetime(2024, 1, 14, 12, 0),
            seller: "Private Seller".to_string(),
            description: "1970s acoustic in excellent shape, recently restrung. Includes \
                          hard case."
                .to_string(),
            is_featured: true,
        },
        Listing {
            id: 5,
            title: "Mountain Bike for Sale".to_string(),
            price: "$320".to_string(),
            category: "general".to_string(),
            location: "Riverside".to_string(),
            posted_at: datetime(2024, 1, 13, 17, 45),
            seller: "Private Seller".to_string(),
            description: "Hardtail mountain bike, medium frame, fresh brake pads. Great \
                          starter bike."
                .to_string(),
            is_featured: false,
        },
        Listing {
            id: 6,
            title: "Office Suite on Oak Avenue".to_string(),
            price: "$950/month".to_string(),
            category: "realestate".to_string(),
            location: "Oak Hill".to_string(),
            posted_at: datetime(2024, 1, 12, 9, 15),
            seller: "Oak Hill Realty".to_string(),
            description: "Two-room office suite with shared conference room and parking. \
                          Utilities included."
                .to_string(),
            is_featured: false,
        },
    ]
}

/// Promotional deals from local businesses.
pub fn deals() -> Vec<Deal> {
    vec![
        Deal {
            id: 1,
            title: "Two-for-One Taco Tuesday".to_string(),
            business: "Maria's Authentic Mexican".to_string(),
            category: "restaurants".to_string(),
            discount: "50%".to_string(),
            description: "Buy one taco plate, get a second free every Tuesday after 4 PM."
                .to_string(),
            valid_until: "June 30".to_string(),
            code: "TACOTUES".to_string(),
        },
        Deal {
            id: 2,
            title: "Lunch Combo Special".to_string(),
            business: "Corner Coffee House".to_string(),
            category: "restaurants".to_string(),
            discount: "33%".to_string(),
            description: "Sandwich, soup, and drip coffee for the price of the sandwich \
                          alone, weekdays 11-2."
                .to_string(),
            valid_until: "May 31".to_string(),
            code: "LUNCH33".to_string(),
        },
        Deal {
            id: 3,
            title: "Spring Wardrobe Refresh".to_string(),
            business: "Boutique Fashion Store".to_string(),
            category: "retail".to_string(),
            discount: "25%".to_string(),
            description: "25% off all new-season arrivals, in store only.".to_string(),
            valid_until: "April 15".to_string(),
            code: "SPRING25".to_string(),
        },
        Deal {
            id: 4,
            title: "Free First Clean".to_string(),
            business: "Professional Cleaning Services".to_string(),
            category: "services".to_string(),
            discount: "100%".to_string(),
            description: "First standard home cleaning free with any three-month plan."
                .to_string(),
            valid_until: "While slots last".to_string(),
            code: "FIRSTFREE".to_string(),
        },
        Deal {
            id: 5,
            title: "Matinee Movie Pass".to_string(),
            business: "Main Street Cinema".to_string(),
            category: "entertainment".to_string(),
            discount: "40%".to_string(),
            description: "40% off all matinee showings before 3 PM, Monday through \
                          Thursday."
                .to_string(),
            valid_until: "June 1".to_string(),
            code: "MATINEE40".to_string(),
        },
        Deal {
            id: 6,
            title: "Half-Price Oil Change".to_string(),
            business: "Downtown Auto Repair".to_string(),
            category: "services".to_string(),
            discount: "50%".to_string(),
            description: "Half-price synthetic oil change with any scheduled repair."
                .to_string(),
            valid_until: "May 15".to_string(),
            code: "OIL50".to_string(),
        },
    ]
}

/// Events for the calendar.
pub fn events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: 1,
            title: "Farmers Market".to_string(),
            date: date(2024, 6, 15),
            time: "8:00 AM - 1:00 PM".to_string(),
            location: "Main Street Plaza".to_string(),
            category: "community".to_string(),
            description: "Weekly farmers market featuring local produce, crafts, and food \
                          vendors."
                .to_string(),
            attendees: 120,
        },
        CommunityEvent {
            id: 2,
            title: "City Council Meeting".to_string(),
            date: date(2024, 6, 18),
            time: "7:00 PM - 9:00 PM".to_string(),
            location: "City Hall - Council Chambers".to_string(),
            category: "government".to_string(),
            description: "Regular meeting of the City Council to discuss local matters and \
                          policies."
                .to_string(),
            attendees: 45,
        },
        CommunityEvent {
            id: 3,
            title: "Summer Concert Series".to_string(),
            date: date(2024, 6, 20),
            time: "6:30 PM - 9:30 PM".to_string(),
            location: "Community Park Amphitheater".to_string(),
            category: "arts".to_string(),
            description: "Outdoor concert featuring local bands and musicians. Food trucks \
                          will be available."
                .to_string(),
            attendees: 350,
        },
        CommunityEvent {
            id: 4,
            title: "Youth Soccer Tournament".to_string(),
            date: date(2024, 6, 22),
            time: "9:00 AM - 4:00 PM".to_string(),
            location: "Memorial Sports Complex".to_string(),
            category: "sports".to_string(),
            description: "Annual youth soccer tournament for ages 8-14. Multiple divisions \
                          and skill levels."
                .to_string(),
            attendees: 200,
        },
        CommunityEvent {
            id: 5,
            title: "Library Book Sale".to_string(),
            date: date(2024, 6, 25),
            time: "10:00 AM - 6:00 PM".to_string(),
            location: "Public Library - Main Branch".to_string(),
            category: "education".to_string(),
            description: "Thousands of used books for sale at great prices. Proceeds \
                          support library programs."
                .to_string(),
            attendees: 85,
        },
        CommunityEvent {
            id: 6,
            title: "Community Cleanup Day".to_string(),
            date: date(2024, 6, 29),
            time: "8:30 AM - 12:00 PM".to_string(),
            location: "Meet at City Park Entrance".to_string(),
            category: "community".to_string(),
            description: "Join fellow residents to help clean up our parks and public \
                          spaces. Supplies provided."
                .to_string(),
            attendees: 65,
        },
    ]
}

/// Service providers for the local services directory.
pub fn service_providers() -> Vec<ServiceProvider> {
    vec![
        ServiceProvider {
            id: 1,
            name: "Hometown Plumbing & Heating".to_string(),
            category: "home".to_string(),
            description: "Licensed plumbing, heating, and emergency repairs.".to_string(),
            phone: "(555) 210-3344".to_string(),
            rating: 4.7,
            availability: "Mon-Sat, 7 AM - 7 PM".to_string(),
        },
        ServiceProvider {
            id: 2,
            name: "Riverside Family Clinic".to_string(),
            category: "health".to_string(),
            description: "Walk-in family medicine and preventive care.".to_string(),
            phone: "(555) 210-4455".to_string(),
            rating: 4.9,
            availability: "Mon-Fri, 8 AM - 6 PM".to_string(),
        },
        ServiceProvider {
            id: 3,
            name: "Oak Hill Accounting".to_string(),
            category: "professional".to_string(),
            description: "Small-business bookkeeping and personal tax preparation."
                .to_string(),
            phone: "(555) 210-5566".to_string(),
            rating: 4.6,
            availability: "By appointment".to_string(),
        },
        ServiceProvider {
            id: 4,
            name: "Bright Start Tutoring".to_string(),
            category: "education".to_string(),
            description: "K-12 tutoring in math, reading, and test preparation."
                .to_string(),
            phone: "(555) 210-6677".to_string(),
            rating: 4.8,
            availability: "Weekday afternoons & weekends".to_string(),
        },
        ServiceProvider {
            id: 5,
            name: "Main Street Salon & Spa".to_string(),
            category: "beauty".to_string(),
            description: "Full-service salon, skincare, and massage therapy.".to_string(),
            phone: "(555) 210-7788".to_string(),
            rating: 4.5,
            availability: "Tue-Sun, 9 AM - 8 PM".to_string(),
        },
        ServiceProvider {
            id: 6,
            name: "GreenScape Lawn Care".to_string(),
            category: "home".to_string(),
            description: "Mowing, seasonal cleanup, and landscape design.".to_string(),
            phone: "(555) 210-8899".to_string(),
            rating: 4.4,
            availability: "Mon-Fri, 8 AM - 5 PM".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Categorized, filter_by_category};
    use std::collections::HashSet;

    fn assert_unique_ids(ids: impl Iterator<Item = u32>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate catalog id {id}");
        }
    }

    #[test]
    fn test_catalog_ids_are_unique_per_collection() {
        assert_unique_ids(news_articles().iter().map(|a| a.id));
        assert_unique_ids(businesses().iter().map(|b| b.id));
        assert_unique_ids(listings().iter().map(|l| l.id));
        assert_unique_ids(deals().iter().map(|d| d.id));
        assert_unique_ids(events().iter().map(|e| e.id));
        assert_unique_ids(service_providers().iter().map(|s| s.id));
    }

    #[test]
    fn test_category_slugs_are_lowercase() {
        fn check<T: Categorized>(items: &[T]) {
            for item in items {
                let slug = item.category();
                assert!(!slug.is_empty());
                assert_eq!(slug, slug.to_lowercase());
            }
        }
        check(&news_articles());
        check(&businesses());
        check(&listings());
        check(&deals());
        check(&events());
        check(&service_providers());
    }

    #[test]
    fn test_category_filtering_over_the_catalog() {
        let all = businesses();
        assert_eq!(filter_by_category(&all, "all").len(), all.len());
        assert_eq!(filter_by_category(&all, "restaurants").len(), 2);
        assert!(filter_by_category(&all, "nightlife").is_empty());
    }

    #[test]
    fn test_exactly_one_breaking_article() {
        let breaking: Vec<_> = news_articles().into_iter().filter(|a| a.is_breaking).collect();
        assert_eq!(breaking.len(), 1);
        assert_eq!(breaking[0].category, "breaking");
    }
}
