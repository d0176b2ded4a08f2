//! Data models
//!
//! Typed views of the sample-data fixture. Every record keeps a flattened
//! `extra` map so fields the fixer does not interpret survive the rewrite.

pub mod customer;
pub mod document;
pub mod menu_item;
pub mod reservation;

// Re-exports
pub use customer::*;
pub use document::*;
pub use menu_item::*;
pub use reservation::*;
