//! Rental history events

use serde::Serialize;

/// One immutable line of rental history, such as `"Alice rented Tenet"`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RentalEvent {
    /// Human-readable description
    pub description: String,
}

impl RentalEvent {
    /// Event for a movie going out
    #[must_use]
    pub fn rented(customer: &str, title: &str) -> Self {
        Self {
            description: format!("{customer} rented {title}"),
        }
    }

    /// Event for a movie coming back
    #[must_use]
    pub fn returned(customer: &str, title: &str) -> Self {
        Self {
            description: format!("{customer} returned {title}"),
        }
    }
}

impl std::fmt::Display for RentalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
