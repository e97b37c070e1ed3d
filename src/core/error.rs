//! Rental errors
//!
//! Every failure a user can trigger from the menu is a [`RentalError`].
//! None of them are fatal: the console reports the message and keeps going.

use thiserror::Error;

/// Errors returned by catalog, ledger, and desk operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// The movie is already out with a customer
    #[error("{title} is already rented")]
    AlreadyRented {
        /// Title of the movie
        title: String,
    },

    /// The movie is not currently rented
    #[error("{title} was not rented")]
    NotRented {
        /// Title of the movie
        title: String,
    },

    /// No customer with this name is registered
    #[error("customer '{name}' not found")]
    CustomerNotFound {
        /// Name that was looked up
        name: String,
    },

    /// An index fell outside the list it was meant to select from
    #[error("index {index} is out of range for {len} item(s)")]
    IndexOutOfRange {
        /// Index that was requested
        index: i64,
        /// Length of the list being indexed
        len: usize,
    },

    /// Movie type selector was neither `d` nor `p`
    #[error("invalid movie type '{input}' (use d for digital or p for physical)")]
    InvalidKind {
        /// Selector that was entered
        input: String,
    },

    /// Menu selection outside 1 to 7
    #[error("invalid menu choice '{input}'")]
    InvalidMenuChoice {
        /// Selection that was entered
        input: String,
    },

    /// A whole number was expected
    #[error("'{input}' is not a whole number")]
    InvalidNumber {
        /// Text that was entered
        input: String,
    },

    /// The ledger has no active rental of this movie for the customer
    #[error("{title} is not rented by {customer}")]
    NotFoundInLedger {
        /// Customer name
        customer: String,
        /// Title of the movie
        title: String,
    },
}

impl RentalError {
    /// Build an [`RentalError::IndexOutOfRange`] for a `usize` index
    #[must_use]
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
