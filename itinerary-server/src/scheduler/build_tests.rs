//! End-to-end tests for the itinerary build pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    BudgetTier, Coordinate, GroupType, Itinerary, Poi, PoiCategory, TripRequest, WeatherCondition,
    WeatherDay,
};
use crate::suggest::{DisabledSuggester, MockSuggester};
use crate::transport::HaversineEstimator;

use super::build::ItineraryPlanner;
use super::config::ScheduleConfig;
use super::tables::RuleTables;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
}

fn trip(days: u16) -> TripRequest {
    TripRequest::new(
        "Bangalore",
        start_date(),
        days,
        2,
        GroupType::Couple,
        BudgetTier::Moderate,
        vec!["culture".into()],
    )
    .unwrap()
}

fn poi(name: &str, category: PoiCategory, lat: f64, lon: f64) -> Poi {
    Poi {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        category,
        location: Coordinate::new(lat, lon).unwrap(),
        rating: Some(4.0),
        price_level: Some(2),
        visit_duration: Some(90),
        description: None,
        review_count: 200,
        priority_score: None,
    }
}

/// Eight POIs around central Bangalore, mixed categories.
fn pool() -> Vec<Poi> {
    vec![
        poi("ISKCON Temple", PoiCategory::Religious, 13.0100, 77.5510),
        poi("Cubbon Park", PoiCategory::Park, 12.9763, 77.5929),
        poi("Government Museum", PoiCategory::Museum, 12.9758, 77.5993),
        poi("Commercial Street", PoiCategory::Shopping, 12.9823, 77.6089),
        poi("Toit Brewpub", PoiCategory::Nightlife, 12.9783, 77.6408),
        poi("Bangalore Palace", PoiCategory::Attraction, 12.9988, 77.5921),
        poi("Vidhana Soudha", PoiCategory::Attraction, 12.9794, 77.5912),
        poi("Tipu Sultan Fort", PoiCategory::Attraction, 12.9598, 77.5739),
    ]
}

async fn build(trip: &TripRequest, pool: &[Poi], weather: &[WeatherDay]) -> Itinerary {
    let suggester = DisabledSuggester;
    let transport = HaversineEstimator::new();
    let config = ScheduleConfig::default();
    let tables = RuleTables::default();
    let planner = ItineraryPlanner::new(&suggester, &transport, &config, &tables);
    planner.build(trip, pool, weather).await.unwrap()
}

#[tokio::test]
async fn three_day_trip_schedules_every_poi() {
    let trip = trip(3);
    let itinerary = build(&trip, &pool(), &[]).await;

    assert_eq!(itinerary.days.len(), 3);
    for (idx, plan) in itinerary.days.iter().enumerate() {
        assert_eq!(plan.day, (idx + 1) as u16);
        assert_eq!(
            plan.date,
            start_date()
                .checked_add_days(chrono::Days::new(idx as u64))
                .unwrap()
        );
    }
    // Eight 90-minute visits fit comfortably in three days.
    assert_eq!(itinerary.activity_count(), 8);
    assert_eq!(itinerary.version, 1);
}

#[tokio::test]
async fn schedule_invariants_hold() {
    let trip = trip(3);
    let itinerary = build(&trip, &pool(), &[]).await;

    for plan in &itinerary.days {
        for item in &plan.items {
            assert_eq!(item.day, plan.day);
            assert_eq!(item.end, item.start.plus_minutes(item.duration_minutes));
            assert!(item.duration_minutes > 0);
        }
        for pair in plan.items.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
        // The last item of a day never carries a leg.
        if let Some(last) = plan.items.last() {
            assert!(last.transport_to_next.is_none());
        }
    }
}

#[tokio::test]
async fn costs_roll_up_from_items() {
    let trip = trip(3);
    let itinerary = build(&trip, &pool(), &[]).await;

    for plan in &itinerary.days {
        let expected: Decimal = plan.items.iter().map(|i| i.cost_estimate).sum();
        assert_eq!(plan.total_cost, expected);
    }
    let expected: Decimal = itinerary.days.iter().map(|d| d.total_cost).sum();
    assert_eq!(itinerary.total_cost, expected);
    assert!(itinerary.total_cost > Decimal::ZERO);
}

#[tokio::test]
async fn metadata_describes_the_build() {
    let trip = trip(3);
    let itinerary = build(&trip, &pool(), &[]).await;

    assert_eq!(itinerary.metadata["total_pois"], serde_json::json!(8));
    assert_eq!(
        itinerary.metadata["weather_considered"],
        serde_json::json!(false)
    );
    assert_eq!(
        itinerary.metadata["transport_optimized"],
        serde_json::json!(false)
    );
}

#[tokio::test]
async fn weather_lands_on_the_matching_day_only() {
    let trip = trip(3);
    let day_two = start_date().checked_add_days(chrono::Days::new(1)).unwrap();
    let weather = vec![WeatherDay {
        date: day_two,
        condition: WeatherCondition::Rainy,
        temperature_high: 23.0,
        temperature_low: 18.0,
        precipitation_chance: Some(70),
    }];
    let itinerary = build(&trip, &pool(), &weather).await;

    assert!(itinerary.days[0].weather.is_none());
    assert_eq!(
        itinerary.days[1].weather.as_ref().map(|w| w.condition),
        Some(WeatherCondition::Rainy)
    );
    assert!(itinerary.days[2].weather.is_none());
    assert_eq!(
        itinerary.metadata["weather_considered"],
        serde_json::json!(true)
    );
}

#[tokio::test]
async fn empty_pool_builds_empty_days() {
    let trip = trip(2);
    let itinerary = build(&trip, &[], &[]).await;
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(itinerary.activity_count(), 0);
    assert_eq!(itinerary.total_cost, Decimal::ZERO);
}

#[tokio::test]
async fn suggestion_service_drives_timing() {
    let suggester = MockSuggester::new().with_reply(
        "Cubbon Park",
        "TIME_CATEGORY: MORNING\nSTART_TIME: 11:11\nREASONING: custom slot",
    );
    let transport = HaversineEstimator::new();
    let config = ScheduleConfig::default();
    let tables = RuleTables::default();
    let planner = ItineraryPlanner::new(&suggester, &transport, &config, &tables);

    let trip = trip(1);
    let pois = vec![
        poi("Cubbon Park", PoiCategory::Park, 12.9763, 77.5929),
        poi("Toit Brewpub", PoiCategory::Nightlife, 12.9783, 77.6408),
    ];
    let itinerary = planner.build(&trip, &pois, &[]).await.unwrap();

    let park = itinerary.days[0]
        .items
        .iter()
        .find(|i| i.poi.name == "Cubbon Park")
        .unwrap();
    assert_eq!(park.start.to_string(), "11:11");
    assert!(park.notes.as_deref().unwrap().contains("custom slot"));
}

#[tokio::test]
async fn reoptimize_keeps_id_and_pois_and_bumps_version() {
    let suggester = DisabledSuggester;
    let transport = HaversineEstimator::new();
    let config = ScheduleConfig::default();
    let tables = RuleTables::default();
    let planner = ItineraryPlanner::new(&suggester, &transport, &config, &tables);

    let trip = trip(3);
    let itinerary = planner.build(&trip, &pool(), &[]).await.unwrap();
    let (optimized, summary) = planner.optimize(&itinerary).await.unwrap();

    assert_eq!(optimized.id, itinerary.id);
    assert_eq!(optimized.version, 2);
    assert_eq!(summary.version, 2);
    assert_eq!(summary.previous_cost, itinerary.total_cost);
    assert_eq!(summary.optimized_cost, itinerary.total_cost);
    assert_eq!(
        optimized.metadata["transport_optimized"],
        serde_json::json!(true)
    );

    // Re-sequencing permutes each day's POIs, never adds or drops.
    for (before, after) in itinerary.days.iter().zip(&optimized.days) {
        let mut ids_before: Vec<&str> = before.items.iter().map(|i| i.poi.id.as_str()).collect();
        let mut ids_after: Vec<&str> = after.items.iter().map(|i| i.poi.id.as_str()).collect();
        ids_before.sort_unstable();
        ids_after.sort_unstable();
        assert_eq!(ids_before, ids_after);
    }

    // Another pass keeps counting up.
    let (third, _) = planner.optimize(&optimized).await.unwrap();
    assert_eq!(third.version, 3);
}

#[tokio::test]
async fn reoptimize_does_not_lengthen_travel() {
    let suggester = DisabledSuggester;
    let transport = HaversineEstimator::new();
    let config = ScheduleConfig::default();
    let tables = RuleTables::default();
    let planner = ItineraryPlanner::new(&suggester, &transport, &config, &tables);

    let trip = trip(3);
    let itinerary = planner.build(&trip, &pool(), &[]).await.unwrap();
    let (_, summary) = planner.optimize(&itinerary).await.unwrap();

    // Greedy re-sequencing can lengthen a tour in general, but with at
    // most three stops per day from a fixed anchor the nearest-first
    // order is provably shortest. Guard the fixture so a pool change
    // that grows a day past three stops fails loudly here instead of
    // producing a confusing travel-distance failure below.
    assert!(
        itinerary.days.iter().all(|d| d.items.len() <= 3),
        "fixture grew past three stops per day; the travel bound no longer holds"
    );
    assert!(summary.optimized_travel_km <= summary.previous_travel_km + 1e-6);
}
