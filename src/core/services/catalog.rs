//! Movie catalog
//!
//! The catalog owns every [`Movie`]. Movies are appended and never removed,
//! so a [`MovieId`] handed out by [`Catalog::add_movie`] stays valid.

use crate::core::RentalError;
use crate::core::models::{Movie, MovieId, MovieKind, RentalStatus};

/// Ordered collection of movies
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Append an available movie and return its id
    ///
    /// Duplicate titles are allowed.
    pub fn add_movie(&mut self, title: impl Into<String>, kind: MovieKind) -> MovieId {
        let id = MovieId(self.movies.len());
        self.movies.push(Movie::new(title, kind));
        id
    }

    /// Number of movies
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog has no movies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies that can be rented, in catalog order
    pub fn available(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.iter().filter(|(_, m)| !m.is_rented())
    }

    /// Every movie with its status, in catalog order
    pub fn list_all(&self) -> impl Iterator<Item = (&str, RentalStatus)> {
        self.movies.iter().map(|m| (m.title(), m.status()))
    }

    /// Every movie with its id, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.movies.iter().enumerate().map(|(i, m)| (MovieId(i), m))
    }

    /// Movie at catalog position `index`
    pub fn get(&self, index: usize) -> Result<&Movie, RentalError> {
        self.movies.get(index).ok_or_else(|| RentalError::out_of_range(index, self.movies.len()))
    }

    /// Mutable movie at catalog position `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Movie, RentalError> {
        let len = self.movies.len();
        self.movies.get_mut(index).ok_or_else(|| RentalError::out_of_range(index, len))
    }
}

impl FromIterator<(String, MovieKind)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, MovieKind)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (title, kind) in iter {
            catalog.add_movie(title, kind);
        }
        catalog
    }
}
