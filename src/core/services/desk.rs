//! Rental desk
//!
//! The desk owns the catalog, the ledger, the customer registry, and the fee
//! schedule, and runs the rent and return protocols across them. Every
//! operation either completes fully or returns a [`RentalError`] with nothing
//! changed.
//!
//! # Examples
//!
//! ```
//! use movie_rental::core::models::{FeeSchedule, MovieKind};
//! use movie_rental::core::services::RentalDesk;
//!
//! let mut desk = RentalDesk::new(FeeSchedule::STANDARD);
//! desk.add_movie("X", MovieKind::Digital);
//! desk.add_customer("A");
//!
//! desk.rent("A", 0).unwrap();
//! let receipt = desk.return_rental("A", 0, 5).unwrap();
//! assert!((receipt.fee - 9.0).abs() < f64::EPSILON);
//! ```

use log::debug;

use super::{Catalog, CustomerRegistry, Ledger};
use crate::core::RentalError;
use crate::core::models::{FeeSchedule, Movie, MovieId, MovieKind};

/// Outcome of a completed return
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSummary {
    /// Customer who returned the movie
    pub customer: String,
    /// Title of the returned movie
    pub title: String,
    /// Rental kind of the returned movie
    pub kind: MovieKind,
    /// Days the rental lasted
    pub days: u32,
    /// Fee charged
    pub fee: f64,
}

/// Catalog, ledger, and customers behind one counter
#[derive(Debug, Clone, Default)]
pub struct RentalDesk {
    catalog: Catalog,
    ledger: Ledger,
    customers: CustomerRegistry,
    fees: FeeSchedule,
}

impl RentalDesk {
    /// Create a desk with no movies and no customers
    #[must_use]
    pub fn new(fees: FeeSchedule) -> Self {
        Self::with_parts(Catalog::new(), CustomerRegistry::new(), fees)
    }

    /// Create a desk from a seeded catalog and registry
    #[must_use]
    pub fn with_parts(catalog: Catalog, customers: CustomerRegistry, fees: FeeSchedule) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
            customers,
            fees,
        }
    }

    /// The movie catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The rental ledger
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The customer registry
    #[must_use]
    pub const fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    /// The fee schedule applied on return
    #[must_use]
    pub const fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Register a customer, returning `false` if the name already exists
    pub fn add_customer(&mut self, name: &str) -> bool {
        let added = self.customers.register(name);
        debug!("register customer {name:?}: added={added}");
        added
    }

    /// Add a movie to the catalog
    pub fn add_movie(&mut self, title: &str, kind: MovieKind) -> MovieId {
        let id = self.catalog.add_movie(title, kind);
        debug!("added {kind} movie {title:?} at index {id}");
        id
    }

    /// Fail with [`RentalError::CustomerNotFound`] unless `name` is registered
    pub fn require_customer(&self, name: &str) -> Result<(), RentalError> {
        if self.customers.exists(name) {
            Ok(())
        } else {
            Err(RentalError::CustomerNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Rent the movie at catalog position `index` to `customer`
    ///
    /// The index addresses the full catalog, not just the available movies.
    /// Picking a movie that is already out fails with
    /// [`RentalError::AlreadyRented`].
    pub fn rent(&mut self, customer: &str, index: usize) -> Result<MovieId, RentalError> {
        self.require_customer(customer)?;

        let movie = self.catalog.get_mut(index)?;
        movie.rent()?;

        let id = MovieId(index);
        self.ledger.record_rental(customer, id, movie);
        debug!("{customer} rented {:?} (index {id})", movie.title());
        Ok(id)
    }

    /// Movies `customer` currently holds, in the order they were rented
    #[must_use]
    pub fn active_rentals(&self, customer: &str) -> Vec<(MovieId, &Movie)> {
        self.ledger
            .active_rentals_for(customer)
            .iter()
            .filter_map(|&id| self.catalog.get(id.index()).ok().map(|m| (id, m)))
            .collect()
    }

    /// Id of the `index`-th active rental of `customer`
    pub fn active_rental(&self, customer: &str, index: usize) -> Result<MovieId, RentalError> {
        let held = self.ledger.active_rentals_for(customer);
        held.get(index).copied().ok_or_else(|| RentalError::out_of_range(index, held.len()))
    }

    /// Base fees owed across `customer`'s active rentals
    ///
    /// Days are only known at return, so late fees are not included.
    #[must_use]
    pub fn outstanding_fees(&self, customer: &str) -> f64 {
        self.active_rentals(customer).iter().map(|(_, m)| self.fees.base_fee(m.kind())).sum()
    }

    /// Return the `index`-th active rental of `customer` after `days` days
    pub fn return_rental(
        &mut self,
        customer: &str,
        index: usize,
        days: u32,
    ) -> Result<ReturnSummary, RentalError> {
        let id = self.active_rental(customer, index)?;
        let movie = self.catalog.get_mut(id.index())?;

        movie.mark_days(days);
        let fee = movie.return_item(&self.fees)?;
        self.ledger.record_return(customer, id, movie)?;
        debug!("{customer} returned {:?} after {days} day(s), fee {fee}", movie.title());

        Ok(ReturnSummary {
            customer: customer.to_string(),
            title: movie.title().to_string(),
            kind: movie.kind(),
            days,
            fee,
        })
    }
}
