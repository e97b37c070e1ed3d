//! Business logic services
//!
//! Single-owner, in-memory containers and the protocols that span them.
//! These services have no I/O dependencies.
//!
//! - [`catalog`] - Movies in catalog order
//! - [`ledger`] - Active rentals per customer and rental history
//! - [`registry`] - Known customer names
//! - [`desk`] - Rent and return across all of the above

pub mod catalog;
pub mod desk;
pub mod ledger;
pub mod registry;

pub use catalog::Catalog;
pub use desk::{RentalDesk, ReturnSummary};
pub use ledger::Ledger;
pub use registry::CustomerRegistry;
