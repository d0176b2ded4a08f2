//! Fixture Document Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Customer, MenuItem, Reservation};

/// The whole sample-data document
///
/// Top-level sections the fixer does not touch (orders, gallery, site
/// settings, ...) are kept as raw JSON in `extra` so the rewrite preserves
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleData {
    #[serde(rename = "menuItems", default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SampleData {
    /// Number of order records in the untyped `orders` section
    pub fn order_count(&self) -> usize {
        self.extra
            .get("orders")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
