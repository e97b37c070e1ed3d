//! Core domain logic for movie-rental
//!
//! This module contains pure business logic with no I/O dependencies.
//! Console input and output live in the binary; configuration loading lives
//! in [`crate::config`].
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Movie, `MovieKind`, `FeeSchedule`, `RentalEvent`)
//! - `services/` - Catalog, ledger, registry, and the desk that ties them together
//! - `error` - The error type every rental operation returns

pub mod error;
pub mod models;
pub mod services;

pub use error::RentalError;
