//! Fixture fixes
//!
//! The two transformations applied to the sample-data document, in a fixed
//! order: vegetarian-flag correction, then reservation backfill.

pub mod reservations;
pub mod veg_flags;

pub use reservations::generate_reservations;
pub use veg_flags::fix_veg_flags;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::core::error::Result;
use crate::models::SampleData;

/// Totals reported after a fixer run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixSummary {
    /// Menu items whose vegetarian flag changed
    pub veg_flags_fixed: usize,
    /// Reservations added by the backfill (0 when the fixture had some)
    pub reservations_added: usize,
    pub menu_items: usize,
    pub reservations: usize,
    pub orders: usize,
}

/// Apply both fixes to the document in place.
///
/// The backfill only runs when the fixture has no reservations at all.
pub fn apply(data: &mut SampleData, now: NaiveDateTime, rng: &mut impl Rng) -> Result<FixSummary> {
    let veg_flags_fixed = fix_veg_flags(&mut data.menu_items);
    tracing::info!(fixed = veg_flags_fixed, "vegetarian flags recomputed");

    let mut reservations_added = 0;
    if data.reservations.is_empty() {
        tracing::info!("no reservations in fixture, backfilling");
        data.reservations = generate_reservations(&data.customers, now, rng)?;
        reservations_added = data.reservations.len();
        tracing::info!(count = reservations_added, "sample reservations added");
    }

    Ok(FixSummary {
        veg_flags_fixed,
        reservations_added,
        menu_items: data.menu_items.len(),
        reservations: data.reservations.len(),
        orders: data.order_count(),
    })
}
