//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Everything renders into an
//! [`io::Write`] so the console and the tests share one code path.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::config::format_amount;
use crate::core::RentalError;
use crate::core::models::{Movie, MovieId, MovieKind, RentalStatus};
use crate::core::services::{Catalog, Ledger, RentalDesk, ReturnSummary};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be printed in either output mode
pub trait Render: Serialize {
    /// Write the human-readable form
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode, out: &mut dyn Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out),
            OutputMode::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(self).unwrap_or_default())
            },
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful outcome
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// An outcome that changed nothing, such as registering a known customer
    #[must_use]
    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl Render for OperationResult {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.message)
    }
}

/// A failed command, reported without stopping the session
#[derive(Debug, Serialize)]
pub struct ErrorResult {
    /// Human-readable error message
    pub error: String,
}

impl From<&RentalError> for ErrorResult {
    fn from(err: &RentalError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl Render for ErrorResult {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{} {}", "Error:".red().bold(), self.error)
    }
}

/// A movie as shown in listings
#[derive(Debug, Serialize)]
pub struct MovieInfo {
    /// Catalog index
    pub index: usize,
    /// Movie title
    pub title: String,
    /// Rental kind
    pub kind: MovieKind,
    /// Rental status
    pub status: RentalStatus,
}

fn movie_infos<'a>(movies: impl Iterator<Item = (MovieId, &'a Movie)>) -> Vec<MovieInfo> {
    movies
        .map(|(id, m)| MovieInfo {
            index: id.index(),
            title: m.title().to_string(),
            kind: m.kind(),
            status: m.status(),
        })
        .collect()
}

/// Movies that can be rented, with their catalog indices
#[derive(Debug, Serialize)]
pub struct AvailableList {
    /// Available movies in catalog order
    pub movies: Vec<MovieInfo>,
}

impl AvailableList {
    /// Collect the available movies of a catalog
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            movies: movie_infos(catalog.available()),
        }
    }
}

impl Render for AvailableList {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.movies.is_empty() {
            return writeln!(out, "No movies available.");
        }
        writeln!(out, "Available Movies:")?;
        for m in &self.movies {
            writeln!(out, "{}. {}", m.index, m.title)?;
        }
        Ok(())
    }
}

/// A catalog line: title and rental status
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    /// Movie title
    pub title: String,
    /// Rental status
    pub status: RentalStatus,
}

/// Every movie in the catalog with its status
#[derive(Debug, Serialize)]
pub struct CatalogList {
    /// All movies in catalog order
    pub movies: Vec<CatalogEntry>,
}

impl CatalogList {
    /// Collect every movie of a catalog
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            movies: catalog
                .list_all()
                .map(|(title, status)| CatalogEntry {
                    title: title.to_string(),
                    status,
                })
                .collect(),
        }
    }
}

impl Render for CatalogList {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.movies.is_empty() {
            return writeln!(out, "The catalog is empty.");
        }
        for entry in &self.movies {
            writeln!(out, "{} ({})", entry.title, entry.status)?;
        }
        Ok(())
    }
}

/// A movie a customer currently holds
#[derive(Debug, Serialize)]
pub struct RentalInfo {
    /// Position in the customer's active rentals
    pub index: usize,
    /// Movie title
    pub title: String,
    /// Rental kind
    pub kind: MovieKind,
}

/// A customer's active rentals and what they would owe now
#[derive(Debug, Serialize)]
pub struct RentalList {
    /// Customer name
    pub customer: String,
    /// Active rentals, oldest first
    pub rentals: Vec<RentalInfo>,
    /// Fees owed across all active rentals
    pub outstanding: f64,
    /// Currency label
    pub currency: String,
}

impl RentalList {
    /// Collect the active rentals of `customer`
    #[must_use]
    pub fn for_customer(desk: &RentalDesk, customer: &str, currency: &str) -> Self {
        Self {
            customer: customer.to_string(),
            rentals: desk
                .active_rentals(customer)
                .into_iter()
                .enumerate()
                .map(|(index, (_, m))| RentalInfo {
                    index,
                    title: m.title().to_string(),
                    kind: m.kind(),
                })
                .collect(),
            outstanding: desk.outstanding_fees(customer),
            currency: currency.to_string(),
        }
    }
}

impl Render for RentalList {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Rented Movies:")?;
        for r in &self.rentals {
            writeln!(out, "{}. {}", r.index, r.title)?;
        }
        writeln!(
            out,
            "Outstanding (before late fees): {}",
            format_amount(&self.currency, self.outstanding)
        )
    }
}

/// Receipt for a returned movie
#[derive(Debug, Serialize)]
pub struct ReturnReceipt {
    /// Customer who returned the movie
    pub customer: String,
    /// Movie title
    pub title: String,
    /// Rental kind
    pub kind: MovieKind,
    /// Days the rental lasted
    pub days: u32,
    /// Fee charged
    pub fee: f64,
    /// Currency label
    pub currency: String,
}

impl ReturnReceipt {
    /// Build a receipt from a completed return
    #[must_use]
    pub fn new(summary: ReturnSummary, currency: &str) -> Self {
        Self {
            customer: summary.customer,
            title: summary.title,
            kind: summary.kind,
            days: summary.days,
            fee: summary.fee,
            currency: currency.to_string(),
        }
    }
}

impl Render for ReturnReceipt {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} has been returned after {} day(s), total fee is: {}",
            self.title,
            self.days,
            format_amount(&self.currency, self.fee)
        )
    }
}

/// Rental history, sorted for display
#[derive(Debug, Serialize)]
pub struct HistoryList {
    /// Event descriptions in lexicographic order
    pub events: Vec<String>,
}

impl HistoryList {
    /// Collect the sorted history of a ledger
    #[must_use]
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            events: ledger.sorted_history().into_iter().map(ToString::to_string).collect(),
        }
    }
}

impl Render for HistoryList {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.events.is_empty() {
            return writeln!(out, "No rentals yet.");
        }
        for e in &self.events {
            writeln!(out, "{e}")?;
        }
        Ok(())
    }
}

/// Fee for a hypothetical rental
#[derive(Debug, Serialize)]
pub struct FeeQuote {
    /// Rental kind
    pub kind: MovieKind,
    /// Days rented
    pub days: u32,
    /// Base fee for the kind
    pub base_fee: f64,
    /// Total fee including late surcharge
    pub fee: f64,
    /// Currency label
    pub currency: String,
}

impl Render for FeeQuote {
    fn render_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} rental for {} day(s): {} (base {})",
            self.kind,
            self.days,
            format_amount(&self.currency, self.fee),
            format_amount(&self.currency, self.base_fee)
        )
    }
}
