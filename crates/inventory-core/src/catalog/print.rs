//! Print (design/pattern) types.

use crate::ids::PrintId;
use serde::{Deserialize, Serialize};

/// A named print applied to products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Print {
    /// Unique print identifier.
    #[serde(default)]
    pub id: PrintId,
    /// Short code used in SKUs (e.g., "FLG").
    pub code: String,
    /// Display name.
    pub name: String,
}

impl Print {
    /// Create a new print.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PrintId::generate(),
            code: code.into(),
            name: name.into(),
        }
    }
}
