use serde::{Deserialize, Serialize};

/// Raw week start as sent by clients; validated by the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub week_start: u8,
}
