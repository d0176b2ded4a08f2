//! Menu Item Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Menu item record from the sample-data fixture
///
/// Only the fields the fixer interprets are typed; everything else the
/// fixture carries (price, image, nutrition, ...) rides along in `extra`
/// and is written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Vegetarian flag, recomputed by the fixer; an absent key stays absent
    /// unless a classification rule fires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_veg: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
