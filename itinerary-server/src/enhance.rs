//! POI pre-enhancement.
//!
//! Before allocation, each discovered POI is filled in with a visit
//! duration (when the discovery layer did not supply one) and a
//! priority score used to order the pool. Enhancement never mutates
//! in place; it returns new `Poi` values.

use crate::domain::{BudgetTier, Poi, TripRequest};
use crate::scheduler::RuleTables;

/// Fill in defaults and score a whole pool, returning it sorted by
/// priority score, highest first.
///
/// Sorting is stable, so POIs with equal scores keep their discovery
/// order.
pub fn enhance_pool(pois: &[Poi], trip: &TripRequest, tables: &RuleTables) -> Vec<Poi> {
    let mut enhanced: Vec<Poi> = pois
        .iter()
        .map(|poi| enhance_poi(poi, trip, tables))
        .collect();

    enhanced.sort_by(|a, b| {
        let sa = a.priority_score.unwrap_or(0.0);
        let sb = b.priority_score.unwrap_or(0.0);
        sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
    });

    enhanced
}

/// Enhance a single POI: resolve its visit duration via the duration
/// model and compute its priority score.
pub fn enhance_poi(poi: &Poi, trip: &TripRequest, tables: &RuleTables) -> Poi {
    let duration = poi
        .visit_duration
        .unwrap_or_else(|| tables.visit_duration(poi, trip.group_type()));

    poi.with_visit_duration(duration)
        .with_priority_score(priority_score(poi, trip))
}

/// Priority score in [0, 100].
///
/// Rating dominates (up to 75 points); review volume, interest
/// matches, and budget fit contribute the rest.
fn priority_score(poi: &Poi, trip: &TripRequest) -> f64 {
    let mut score = 0.0;

    if let Some(rating) = poi.rating {
        score += rating * 15.0;
    }

    // More reviews mean a more reliable rating.
    score += (f64::from(poi.review_count) / 100.0).min(10.0);

    for interest in trip.interests() {
        let interest = interest.to_lowercase();
        if interest_keywords(poi)
            .iter()
            .any(|kw| interest.contains(kw))
        {
            score += 10.0;
        }
    }

    if let Some(price) = poi.price_level {
        let fits = match trip.budget() {
            BudgetTier::Budget => price <= 2,
            BudgetTier::Moderate => price == 2,
            BudgetTier::Luxury | BudgetTier::Premium => price >= 3,
        };
        if fits {
            score += 5.0;
        }
    }

    score.min(100.0)
}

/// Keywords an interest tag can match for each category.
fn interest_keywords(poi: &Poi) -> &'static [&'static str] {
    use crate::domain::PoiCategory;

    match poi.category.base() {
        PoiCategory::Restaurant => &["food", "dining", "cuisine"],
        PoiCategory::Museum => &["culture", "history", "art"],
        PoiCategory::Park => &["nature", "outdoor", "relaxation"],
        PoiCategory::Attraction => &["sightseeing", "tourist", "landmark"],
        PoiCategory::Shopping => &["shopping", "market", "souvenir"],
        PoiCategory::Religious => &["spiritual", "temple", "church"],
        PoiCategory::Beach => &["beach", "water", "swimming"],
        PoiCategory::Adventure => &["adventure", "sports", "thrill"],
        PoiCategory::Nightlife => &["nightlife", "bar", "music"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, GroupType, PoiCategory};
    use chrono::NaiveDate;

    fn poi(name: &str, category: PoiCategory, rating: Option<f64>, reviews: u32) -> Poi {
        Poi {
            id: name.to_lowercase(),
            name: name.to_string(),
            category,
            location: Coordinate::new(12.97, 77.59).unwrap(),
            rating,
            price_level: Some(2),
            visit_duration: None,
            description: None,
            review_count: reviews,
            priority_score: None,
        }
    }

    fn trip(group: GroupType, interests: &[&str]) -> TripRequest {
        TripRequest::new(
            "Bangalore",
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
            3,
            2,
            group,
            BudgetTier::Moderate,
            interests.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn fills_duration_from_model() {
        let tables = RuleTables::default();
        let museum = poi("Museum", PoiCategory::Museum, Some(3.5), 100);
        let enhanced = enhance_poi(&museum, &trip(GroupType::Couple, &[]), &tables);
        // Museum base 180, couple x1.0, mid rating x1.0.
        assert_eq!(enhanced.visit_duration, Some(180));
    }

    #[test]
    fn explicit_duration_wins() {
        let tables = RuleTables::default();
        let mut museum = poi("Museum", PoiCategory::Museum, Some(3.5), 100);
        museum.visit_duration = Some(45);
        let enhanced = enhance_poi(&museum, &trip(GroupType::Couple, &[]), &tables);
        assert_eq!(enhanced.visit_duration, Some(45));
    }

    #[test]
    fn interest_match_raises_score() {
        let tables = RuleTables::default();
        let trip_plain = trip(GroupType::Couple, &[]);
        let trip_nature = trip(GroupType::Couple, &["nature walks"]);

        let park = poi("Cubbon Park", PoiCategory::Park, Some(4.0), 500);
        let plain = enhance_poi(&park, &trip_plain, &tables);
        let matched = enhance_poi(&park, &trip_nature, &tables);
        assert!(matched.priority_score.unwrap() > plain.priority_score.unwrap());
    }

    #[test]
    fn pool_sorted_by_score_descending() {
        let tables = RuleTables::default();
        let t = trip(GroupType::Couple, &[]);
        let pool = vec![
            poi("Okay Spot", PoiCategory::Attraction, Some(3.0), 50),
            poi("Great Spot", PoiCategory::Attraction, Some(4.8), 9000),
        ];
        let enhanced = enhance_pool(&pool, &t, &tables);
        assert_eq!(enhanced[0].name, "Great Spot");
        assert_eq!(enhanced[1].name, "Okay Spot");
    }

    #[test]
    fn originals_untouched() {
        let tables = RuleTables::default();
        let t = trip(GroupType::Couple, &[]);
        let original = poi("Museum", PoiCategory::Museum, Some(4.0), 100);
        let _ = enhance_poi(&original, &t, &tables);
        assert!(original.visit_duration.is_none());
        assert!(original.priority_score.is_none());
    }
}
