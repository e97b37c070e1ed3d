//! Command implementations

mod catalog;
mod quote;
mod shell;

pub use catalog::catalog;
pub use quote::quote;
pub use shell::shell;
