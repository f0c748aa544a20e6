//! Multi-day travel itinerary engine.
//!
//! Builds day-by-day schedules for a trip from a discovered pool of
//! points of interest: when to visit each place, how to get between
//! them, and what the trip will cost.

pub mod cache;
pub mod domain;
pub mod enhance;
pub mod scheduler;
pub mod solar;
pub mod suggest;
pub mod transport;
