use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clean::clean;

/// One player move between two clubs, as displayed on the transfers page.
/// Identifier fields are absent when the source URL did not follow the
/// expected pattern; text fields carry the page's display values verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTransfer {
    pub id: Option<String>,
    #[serde(rename = "seasonID")]
    pub season_id: String,
    pub date: String,
    #[serde(rename = "oldClubID")]
    pub old_club_id: Option<String>,
    pub old_club_name: String,
    #[serde(rename = "newClubID")]
    pub new_club_id: Option<String>,
    pub new_club_name: String,
    pub market_value: String,
    pub fee: String,
}

/// Full extraction result for one player: the echoed player id, transfers in
/// page order, youth clubs, and the extraction timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTransferHistory {
    pub id: String,
    pub transfers: Vec<PlayerTransfer>,
    pub youth_clubs: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl PlayerTransferHistory {
    /// Serialized form with null/empty fields removed — the shape handed to
    /// callers and printed by the CLI.
    pub fn cleaned_value(&self) -> Value {
        serde_json::to_value(self).map(clean).unwrap_or(Value::Null)
    }
}
