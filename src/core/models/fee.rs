//! Rental fee schedule
//!
//! A rental costs a flat base fee that depends on the [`MovieKind`]. Once a
//! rental runs past the grace period, every extra day adds a late surcharge.

use serde::{Deserialize, Serialize};

use super::MovieKind;

/// Base fees and late surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Base fee for a digital rental
    pub digital: f64,
    /// Base fee for a physical rental
    pub physical: f64,
    /// Days included in the base fee
    pub grace_days: u32,
    /// Surcharge for each day past the grace period
    pub late_fee_per_day: f64,
}

impl FeeSchedule {
    /// The standard schedule: 5.0 digital, 10.0 physical, 2.0 per day after 3 days
    pub const STANDARD: Self = Self {
        digital: 5.0,
        physical: 10.0,
        grace_days: 3,
        late_fee_per_day: 2.0,
    };

    /// Flat fee for renting a movie of this kind
    #[must_use]
    pub const fn base_fee(&self, kind: MovieKind) -> f64 {
        match kind {
            MovieKind::Digital => self.digital,
            MovieKind::Physical => self.physical,
        }
    }

    /// Total fee for a rental that lasted `days_rented` days
    #[must_use]
    pub fn total_fee(&self, kind: MovieKind, days_rented: u32) -> f64 {
        let late_days = days_rented.saturating_sub(self.grace_days);
        self.base_fee(kind) + f64::from(late_days) * self.late_fee_per_day
    }

    /// Check that every amount is a finite, non-negative number
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("digital", self.digital),
            ("physical", self.physical),
            ("late_fee_per_day", self.late_fee_per_day),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("fee '{name}' must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}
