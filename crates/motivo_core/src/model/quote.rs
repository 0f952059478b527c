//! Motivational quote model.

use serde::{Deserialize, Serialize};

/// One bundled motivational quote.
///
/// Quotes are read-only content shipped with the app; they are never written
/// back to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Stable identifier within the bundled pool.
    pub id: String,
    pub text: String,
    /// Missing for anonymous or traditional quotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}
