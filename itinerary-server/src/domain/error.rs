//! Domain error types.
//!
//! These errors represent validation failures and caller contract
//! breaches in the domain layer. They are distinct from the boundary
//! errors of the suggestion and transport clients, which are always
//! recovered from locally.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Invalid transport leg construction
    #[error("invalid transport leg: {0}")]
    InvalidLeg(&'static str),

    /// Invalid scheduled item or day plan construction
    #[error("invalid scheduled item: {0}")]
    InvalidItem(&'static str),

    /// An item or plan carries the wrong day number
    #[error("day mismatch: expected day {expected}, found {found}")]
    DayMismatch { expected: u16, found: u16 },

    /// Day-plan count does not match the trip's duration
    #[error("itinerary has {found} day plans but the trip lasts {expected} days")]
    DayCountMismatch { expected: u16, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidLeg("distance must be non-negative");
        assert_eq!(
            err.to_string(),
            "invalid transport leg: distance must be non-negative"
        );

        let err = DomainError::DayMismatch {
            expected: 1,
            found: 2,
        };
        assert_eq!(err.to_string(), "day mismatch: expected day 1, found 2");

        let err = DomainError::DayCountMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "itinerary has 2 day plans but the trip lasts 3 days"
        );
    }
}
