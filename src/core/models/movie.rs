//! Movie model
//!
//! A movie is a catalog entry with its own rental state machine:
//!
//! ```text
//!   Available ── rent() ──▶ Rented
//!       ▲                     │
//!       └──── return_item() ──┘
//! ```
//!
//! Renting a movie that is already out fails with
//! [`RentalError::AlreadyRented`]; returning one that is not out fails with
//! [`RentalError::NotRented`]. Neither failure changes state.
//!
//! # Examples
//!
//! ```
//! use movie_rental::core::models::{FeeSchedule, Movie, MovieKind};
//!
//! let mut movie = Movie::new("Inception", MovieKind::Digital);
//! movie.rent().unwrap();
//! movie.mark_days(5);
//! let fee = movie.return_item(&FeeSchedule::STANDARD).unwrap();
//! assert!((fee - 9.0).abs() < f64::EPSILON);
//! assert!(!movie.is_rented());
//! ```

use serde::{Deserialize, Serialize};

use super::FeeSchedule;
use crate::core::RentalError;

/// Position of a movie in the catalog
///
/// The catalog never removes entries, so an id stays valid for as long as the
/// catalog lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MovieId(pub usize);

impl MovieId {
    /// The catalog index this id refers to
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rental kind, which decides the base fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieKind {
    /// Streamed or downloaded copy
    Digital,
    /// Disc on a shelf
    Physical,
}

impl std::fmt::Display for MovieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Digital => write!(f, "Digital"),
            Self::Physical => write!(f, "Physical"),
        }
    }
}

impl std::str::FromStr for MovieKind {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "digital" => Ok(Self::Digital),
            "p" | "physical" => Ok(Self::Physical),
            _ => Err(RentalError::InvalidKind {
                input: s.to_string(),
            }),
        }
    }
}

/// Whether a movie is on the shelf or out with a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    /// Can be rented
    #[default]
    Available,
    /// Held by a customer
    Rented,
}

impl RentalStatus {
    /// Label shown in catalog listings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A movie in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    kind: MovieKind,
    status: RentalStatus,
    days_rented: u32,
}

impl Movie {
    /// Create an available movie
    #[must_use]
    pub fn new(title: impl Into<String>, kind: MovieKind) -> Self {
        Self {
            title: title.into(),
            kind,
            status: RentalStatus::Available,
            days_rented: 0,
        }
    }

    /// Movie title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rental kind
    #[must_use]
    pub const fn kind(&self) -> MovieKind {
        self.kind
    }

    /// Current rental status
    #[must_use]
    pub const fn status(&self) -> RentalStatus {
        self.status
    }

    /// Whether the movie is out with a customer
    #[must_use]
    pub const fn is_rented(&self) -> bool {
        matches!(self.status, RentalStatus::Rented)
    }

    /// Days counted against the current rental
    #[must_use]
    pub const fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Rent the movie out
    ///
    /// Resets the day counter. Fails without changing state if the movie is
    /// already rented.
    pub fn rent(&mut self) -> Result<(), RentalError> {
        if self.is_rented() {
            return Err(RentalError::AlreadyRented {
                title: self.title.clone(),
            });
        }
        self.status = RentalStatus::Rented;
        self.days_rented = 0;
        Ok(())
    }

    /// Record how many days have elapsed on the current rental
    pub const fn mark_days(&mut self, days: u32) {
        self.days_rented = days;
    }

    /// Take the movie back and return the fee owed
    ///
    /// The fee is computed from the day counter before it is reset. Fails
    /// without changing state if the movie is not rented.
    pub fn return_item(&mut self, fees: &FeeSchedule) -> Result<f64, RentalError> {
        if !self.is_rented() {
            return Err(RentalError::NotRented {
                title: self.title.clone(),
            });
        }
        let fee = fees.total_fee(self.kind, self.days_rented);
        self.status = RentalStatus::Available;
        self.days_rented = 0;
        Ok(fee)
    }

}
