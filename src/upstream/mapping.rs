use crate::schema::StateReading;
use crate::translator::TranslateError;
use serde::{Deserialize, Serialize};

/// Shape of the upstream status payload.
///
/// - `Status`: `{"status": "open" | "closed"}`, no timestamp
/// - `LabState`: `{"state": "on" | "off", "last_changed": <epoch>, "last_updated": <epoch>}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMapping {
    #[default]
    Status,
    LabState,
}

#[derive(Deserialize)]
struct StatusPayload {
    status: String,
}

#[derive(Deserialize)]
struct LabStatePayload {
    state: String,
    #[serde(default)]
    last_changed: Option<i64>,
}

impl StatusMapping {
    /// Maps a raw upstream body onto a state reading.
    pub fn map(self, body: &[u8]) -> Result<StateReading, TranslateError> {
        match self {
            StatusMapping::Status => {
                let payload: StatusPayload = serde_json::from_slice(body)
                    .map_err(|e| TranslateError::Decode(e.to_string()))?;
                match payload.status.as_str() {
                    "open" => Ok(StateReading::open()),
                    "closed" => Ok(StateReading::closed()),
                    other => Err(TranslateError::UnknownState(other.to_string())),
                }
            }
            StatusMapping::LabState => {
                let payload: LabStatePayload = serde_json::from_slice(body)
                    .map_err(|e| TranslateError::Decode(e.to_string()))?;
                let reading = match payload.state.as_str() {
                    "on" => StateReading::open(),
                    "off" => StateReading::closed(),
                    other => return Err(TranslateError::UnknownState(other.to_string())),
                };
                Ok(match payload.last_changed {
                    Some(ts) if ts > 0 => reading.with_last_change(ts),
                    _ => reading,
                })
            }
        }
    }
}

impl std::str::FromStr for StatusMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(StatusMapping::Status),
            "lab_state" => Ok(StatusMapping::LabState),
            other => Err(format!(
                "unknown upstream schema '{}': expected 'status' or 'lab_state'",
                other
            )),
        }
    }
}
