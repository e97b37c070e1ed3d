//! Domain models for movie-rental
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Movie`] - A catalog entry and its rental state machine
//! - [`MovieKind`] - Digital or physical, which decides the base fee
//! - [`FeeSchedule`] - Base fees plus the late surcharge
//! - [`RentalEvent`] - One line of rental history

mod event;
mod fee;
mod movie;

pub use event::RentalEvent;
pub use fee::FeeSchedule;
pub use movie::{Movie, MovieId, MovieKind, RentalStatus};
