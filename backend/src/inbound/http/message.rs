//! Plain message bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body carrying a single human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation returned after a resource is deleted.
    pub fn deleted(label: &str) -> Self {
        Self::new(format!("{label} deleted successfully"))
    }
}
