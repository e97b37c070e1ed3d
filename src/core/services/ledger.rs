//! Rental ledger
//!
//! Tracks which movies each customer currently holds and keeps a
//! chronological history of every rental and return. The ledger stores
//! [`MovieId`]s; the [`Catalog`](super::Catalog) stays authoritative for a
//! movie's rental state.

use std::collections::HashMap;

use crate::core::RentalError;
use crate::core::models::{Movie, MovieId, RentalEvent};

/// Active rentals per customer, plus rental history
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    active: HashMap<String, Vec<MovieId>>,
    history: Vec<RentalEvent>,
}

impl Ledger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `customer` took `movie`
    ///
    /// The caller has already checked the customer and transitioned the
    /// movie to rented.
    pub fn record_rental(&mut self, customer: &str, id: MovieId, movie: &Movie) {
        self.active.entry(customer.to_string()).or_default().push(id);
        self.history.push(RentalEvent::rented(customer, movie.title()));
    }

    /// Record that `customer` brought `movie` back
    pub fn record_return(
        &mut self,
        customer: &str,
        id: MovieId,
        movie: &Movie,
    ) -> Result<(), RentalError> {
        let held = self.active.get_mut(customer);
        let position = held.as_ref().and_then(|ids| ids.iter().position(|&held_id| held_id == id));

        match (held, position) {
            (Some(ids), Some(pos)) => {
                ids.remove(pos);
                self.history.push(RentalEvent::returned(customer, movie.title()));
                Ok(())
            },
            _ => Err(RentalError::NotFoundInLedger {
                customer: customer.to_string(),
                title: movie.title().to_string(),
            }),
        }
    }

    /// Movies `customer` currently holds, oldest rental first
    #[must_use]
    pub fn active_rentals_for(&self, customer: &str) -> &[MovieId] {
        self.active.get(customer).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every event in the order it happened
    #[must_use]
    pub fn history(&self) -> &[RentalEvent] {
        &self.history
    }

    /// Every event, sorted lexicographically by description
    #[must_use]
    pub fn sorted_history(&self) -> Vec<&RentalEvent> {
        let mut events: Vec<&RentalEvent> = self.history.iter().collect();
        events.sort();
        events
    }
}
