//! Customer registry
//!
//! Customers are identified by name alone. Registering a name twice is not an
//! error; [`CustomerRegistry::register`] just reports that nothing changed.

use std::collections::HashSet;

/// Set of known customer names
#[derive(Debug, Clone, Default)]
pub struct CustomerRegistry {
    names: HashSet<String>,
}

impl CustomerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a customer, returning `false` if the name was already registered
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Whether a customer with this name exists
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of registered customers
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no customers are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CustomerRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
