use serde::{Deserialize, Serialize};

mod sensors;
mod state;
mod template;
mod validation;

pub use sensors::{
    BarometerSensor, BeverageSensor, CarbonDioxideSensor, DoorLockedSensor, HumiditySensor,
    RadiationSensor, RadiationSensors, SensorBase, Sensors, TemperatureSensor,
};
pub use state::{OpenState, State, StateIcon, StateReading};
pub use validation::SchemaError;

/// SpaceAPI status document (compatible with API versions 14 and 15).
///
/// One instance is built at startup as the facility template. Request
/// handlers never mutate it; they derive a per-request copy through
/// [`StatusDocument::with_state`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDocument {
    pub api_compatibility: Vec<String>, // Required
    pub space: String,                  // Required

    #[serde(skip_serializing_if = "String::is_empty")]
    pub logo: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacefed: Option<SpaceFed>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cam: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Sensors>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feeds: Option<Feeds>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<Cache>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_show: Option<RadioShow>,
}

impl StatusDocument {
    /// Returns a copy of this document with `state.open` and
    /// `state.lastchange` taken from `reading`.
    ///
    /// Static fields (including the state icon and message) are carried over
    /// from `self`. A missing `state` block is created.
    pub fn with_state(&self, reading: StateReading) -> StatusDocument {
        let mut doc = self.clone();
        let state = doc.state.get_or_insert_with(State::default);
        state.open = OpenState::from(reading.open);
        state.last_change = reading.last_change;
        doc
    }

    /// Serialize to compact JSON bytes.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Load a facility template from a JSON file and validate it.
    pub fn from_json_file(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {}", path.display()))?;
        let doc: StatusDocument = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse template {}", path.display()))?;
        doc.validate()
            .with_context(|| format!("Invalid template {}", path.display()))?;
        Ok(doc)
    }

    /// Checks the required-if-present field contracts.
    pub fn validate(&self) -> Result<(), SchemaError> {
        validation::validate(self)
    }
}

/// Physical location of the space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub lat: f64,

    #[serde(skip_serializing_if = "is_zero_f64")]
    pub lon: f64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub timezone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub hint: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<Area>,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
            && self.lat == 0.0
            && self.lon == 0.0
            && self.timezone.is_empty()
            && self.country_code.is_empty()
            && self.hint.is_empty()
            && self.areas.is_empty()
    }
}

/// A room or floor inside the space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Area {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub square_meters: f64, // Required
}

/// SpaceFED federation flags
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceFed {
    pub spacenet: bool,  // Required
    pub spacesaml: bool, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub name: String, // Required

    #[serde(rename = "type")]
    pub event_type: String, // Required

    pub timestamp: i64, // Required

    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

/// Contact channels of the space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sip: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keymasters: Vec<Keymaster>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub irc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub twitter: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mastodon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub facebook: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub identica: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub foursquare: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ml: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xmpp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue_mail: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub gopher: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub matrix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mumble: String,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.keymasters.is_empty()
            && [
                &self.phone,
                &self.sip,
                &self.irc,
                &self.twitter,
                &self.mastodon,
                &self.facebook,
                &self.identica,
                &self.foursquare,
                &self.email,
                &self.ml,
                &self.xmpp,
                &self.issue_mail,
                &self.gopher,
                &self.matrix,
                &self.mumble,
            ]
            .iter()
            .all(|v| v.is_empty())
    }
}

/// A person who can open the space
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymaster {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub irc_nick: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub twitter: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub xmpp: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mastodon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub matrix: String,
}

impl Keymaster {
    pub fn is_empty(&self) -> bool {
        [
            &self.name,
            &self.irc_nick,
            &self.phone,
            &self.email,
            &self.twitter,
            &self.xmpp,
            &self.mastodon,
            &self.matrix,
        ]
        .iter()
        .all(|v| v.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feeds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<Feed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flickr: Option<Feed>,
}

impl Feeds {
    pub fn is_empty(&self) -> bool {
        self.blog.is_none()
            && self.wiki.is_none()
            && self.calendar.is_none()
            && self.flickr.is_none()
    }
}

/// A feed URL with an optional format hint (rss, atom, ical, ...)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feed {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub feed_type: String,

    pub url: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String, // Required

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub url: String, // Required
}

/// Cache hint for SpaceAPI directory crawlers
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cache {
    /// Cron-like schedule, e.g. "m.02"
    pub schedule: String, // Required
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioShow {
    pub name: String, // Required
    pub url: String,  // Required

    #[serde(rename = "type")]
    pub show_type: String, // Required

    /// ISO 8601
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,

    /// ISO 8601
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_time: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub stream_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub stream_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

pub(crate) fn is_zero_f64(v: &f64) -> bool {
    *v == 0.0
}

pub(crate) fn is_zero_i64(v: &i64) -> bool {
    *v == 0
}
