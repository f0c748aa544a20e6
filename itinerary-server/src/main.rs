use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

use itinerary_server::cache::{CacheConfig, CachedSuggester};
use itinerary_server::domain::{
    BudgetTier, GroupType, Poi, PoiRecord, TripRequest, WeatherDay,
};
use itinerary_server::scheduler::{ItineraryPlanner, RuleTables, ScheduleConfig};
use itinerary_server::suggest::{DisabledSuggester, SuggestClient, SuggestConfig, TimingSuggester};
use itinerary_server::transport::{
    HaversineEstimator, RoutingClient, RoutingConfig, TransportEstimator,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let Some(pool_path) = std::env::args().nth(1) else {
        eprintln!("Usage: itinerary-server <pois.json>");
        eprintln!();
        eprintln!("Environment:");
        eprintln!("  TRIP_DESTINATION  destination name (default: Bangalore)");
        eprintln!("  TRIP_START        start date, YYYY-MM-DD (default: today)");
        eprintln!("  TRIP_DAYS         trip length in days (default: 3)");
        eprintln!("  TRIP_TRAVELERS    party size (default: 2)");
        eprintln!("  SUGGEST_BASE_URL  timing-suggestion service (optional)");
        eprintln!("  SUGGEST_API_KEY   bearer token for the service (optional)");
        eprintln!("  ROUTING_BASE_URL  directions service (optional)");
        std::process::exit(2);
    };

    let raw = std::fs::read_to_string(&pool_path).expect("Failed to read POI file");
    let records: Vec<PoiRecord> = serde_json::from_str(&raw).expect("Failed to parse POI file");
    let pool: Vec<Poi> = records
        .into_iter()
        .map(|r| r.decode().expect("Invalid POI record"))
        .collect();
    println!("Loaded {} POIs from {pool_path}", pool.len());

    let trip = trip_from_env().expect("Invalid trip parameters");

    // No forecast source in the demo; days are scheduled weather-blind.
    let weather: Vec<WeatherDay> = Vec::new();

    let routing_url = std::env::var("ROUTING_BASE_URL").ok();
    match std::env::var("SUGGEST_BASE_URL") {
        Ok(base_url) => {
            let mut config = SuggestConfig::new(base_url);
            if let Ok(key) = std::env::var("SUGGEST_API_KEY") {
                config = config.with_api_key(key);
            }
            let client = SuggestClient::new(config).expect("Failed to create suggestion client");
            let suggester = CachedSuggester::new(client, &CacheConfig::default());
            run(&suggester, routing_url, &trip, &pool, &weather).await;
        }
        Err(_) => {
            eprintln!("Warning: SUGGEST_BASE_URL not set; using deterministic timing rules.");
            run(&DisabledSuggester, routing_url, &trip, &pool, &weather).await;
        }
    }
}

async fn run<S: TimingSuggester>(
    suggester: &S,
    routing_url: Option<String>,
    trip: &TripRequest,
    pool: &[Poi],
    weather: &[WeatherDay],
) {
    match routing_url {
        Some(url) => {
            let client =
                RoutingClient::new(RoutingConfig::new(url)).expect("Failed to create routing client");
            plan(suggester, &client, trip, pool, weather).await;
        }
        None => plan(suggester, &HaversineEstimator::new(), trip, pool, weather).await,
    }
}

async fn plan<S: TimingSuggester, T: TransportEstimator>(
    suggester: &S,
    transport: &T,
    trip: &TripRequest,
    pool: &[Poi],
    weather: &[WeatherDay],
) {
    let config = ScheduleConfig::default();
    let tables = RuleTables::default();
    let planner = ItineraryPlanner::new(suggester, transport, &config, &tables);

    let itinerary = planner
        .build(trip, pool, weather)
        .await
        .expect("Failed to build itinerary");
    let (optimized, summary) = planner
        .optimize(&itinerary)
        .await
        .expect("Failed to optimize itinerary");

    println!(
        "Planned {} activities over {} days, estimated cost {}",
        optimized.activity_count(),
        optimized.days.len(),
        optimized.total_cost
    );
    println!(
        "Re-sequencing cut inter-stop travel from {:.1} km to {:.1} km",
        summary.previous_travel_km, summary.optimized_travel_km
    );
    println!(
        "{}",
        serde_json::to_string_pretty(&optimized).expect("Failed to serialize itinerary")
    );
}

fn trip_from_env() -> Result<TripRequest, Box<dyn std::error::Error>> {
    let destination =
        std::env::var("TRIP_DESTINATION").unwrap_or_else(|_| "Bangalore".to_string());
    let start = match std::env::var("TRIP_START") {
        Ok(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")?,
        Err(_) => chrono::Local::now().date_naive(),
    };
    let days: u16 = std::env::var("TRIP_DAYS")
        .unwrap_or_else(|_| "3".to_string())
        .parse()?;
    let travelers: u16 = std::env::var("TRIP_TRAVELERS")
        .unwrap_or_else(|_| "2".to_string())
        .parse()?;

    Ok(TripRequest::new(
        destination,
        start,
        days,
        travelers,
        GroupType::Couple,
        BudgetTier::Moderate,
        Vec::new(),
    )?)
}
