//! Domain types for the itinerary engine.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod category;
mod coord;
mod error;
mod itinerary;
mod poi;
mod time;
mod trip;
mod weather;

pub use category::{
    BudgetTier, GroupType, PoiCategory, TimeOfDay, TransportMode, UnknownTag, WeatherCondition,
};
pub use coord::{Coordinate, InvalidCoordinate};
pub use error::DomainError;
pub use itinerary::{DayPlan, Itinerary, ScheduledItem, TransportLeg};
pub use poi::{Poi, PoiDecodeError, PoiRecord};
pub use time::{DayMinute, TimeError};
pub use trip::{InvalidTripRequest, TripRequest};
pub use weather::WeatherDay;
