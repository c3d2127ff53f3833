use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state open flag.
///
/// `Unknown` serializes as `null` so that "no data" is never reported as
/// "closed".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenState {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl OpenState {
    pub fn as_option(self) -> Option<bool> {
        match self {
            OpenState::Open => Some(true),
            OpenState::Closed => Some(false),
            OpenState::Unknown => None,
        }
    }
}

impl From<bool> for OpenState {
    fn from(open: bool) -> Self {
        if open {
            OpenState::Open
        } else {
            OpenState::Closed
        }
    }
}

impl From<Option<bool>> for OpenState {
    fn from(open: Option<bool>) -> Self {
        open.map(OpenState::from).unwrap_or(OpenState::Unknown)
    }
}

impl Serialize for OpenState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OpenState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(OpenState::from)
    }
}

/// Current state of the space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Always emitted; `null` when unknown.
    pub open: OpenState,

    /// Epoch seconds of the last open/closed transition
    #[serde(rename = "lastchange", skip_serializing_if = "Option::is_none")]
    pub last_change: Option<i64>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub trigger_person: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<StateIcon>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateIcon {
    pub open: String,   // Required
    pub closed: String, // Required
}

/// Result of a successful upstream lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateReading {
    pub open: bool,
    /// Epoch seconds, only when the upstream reports one
    pub last_change: Option<i64>,
}

impl StateReading {
    pub fn open() -> Self {
        Self {
            open: true,
            last_change: None,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: false,
            last_change: None,
        }
    }

    pub fn with_last_change(mut self, last_change: i64) -> Self {
        self.last_change = Some(last_change);
        self
    }
}
