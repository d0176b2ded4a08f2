//! Customer Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer (user) record from the sample-data fixture
///
/// Read-only input to the reservation backfill. The fixture guarantees the
/// identity/contact fields; the rest (address, avatar, auth fields, ...)
/// rides along in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
