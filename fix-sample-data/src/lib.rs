//! Sample-data fixer for the restaurant-ordering demo app
//!
//! One-shot utility that post-processes `sampleDataFull.json`:
//!
//! - recomputes the `is_veg` flag on menu items from keyword heuristics
//! - backfills 50 synthetic reservations when the fixture has none
//!
//! The document is loaded once, mutated in memory and atomically written
//! back; sections the fixer does not interpret pass through untouched.
//!
//! # Module structure
//!
//! ```text
//! fix-sample-data/src/
//! ├── core/      # Configuration, errors
//! ├── models/    # Typed fixture records (menu items, customers, reservations)
//! ├── fixes/     # The two transformations + run summary
//! ├── storage    # Document load/save (atomic replace)
//! └── utils/     # Logging setup
//! ```

pub mod core;
pub mod fixes;
pub mod models;
pub mod storage;
pub mod utils;

// Re-export public types
pub use core::{Config, FixerError, Result};
pub use fixes::{FixSummary, apply, fix_veg_flags, generate_reservations};
pub use models::{Customer, MenuItem, Reservation, ReservationStatus, SampleData};
