//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for boardroom results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Winner banner, winner text, then every proposal (default)
    #[default]
    Full,
    /// Only the winner banner and text
    Winner,
    /// JSON-serialized result bundle
    Json,
}
