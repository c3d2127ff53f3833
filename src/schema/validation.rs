use super::StatusDocument;
use std::fmt;

/// Template contract violations
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A required field is empty; carries the field path, e.g. `links[0].url`
    MissingField(String),
    /// A substructure is present but carries no data
    EmptySection(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingField(path) => write!(f, "{} is required", path),
            SchemaError::EmptySection(path) => {
                write!(f, "{} is present but empty; omit it instead", path)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Validates the required-if-present contracts that the types cannot express.
///
/// Rules:
/// - `api_compatibility` and `space` must be non-empty
/// - state icon, event, link, feed, cache and radio show required strings
///   must be non-empty when their container is present
/// - every sensor needs a `location`; valued sensors need a `unit`
/// - a present `location`, `contact`, `feeds`, `sensors` or
///   `sensors.radiation` block must carry data, as must every keymaster
pub fn validate(doc: &StatusDocument) -> Result<(), SchemaError> {
    if doc.api_compatibility.is_empty() {
        return Err(SchemaError::MissingField("api_compatibility".to_string()));
    }
    require(&doc.space, || "space".to_string())?;

    if let Some(icon) = doc.state.as_ref().and_then(|s| s.icon.as_ref()) {
        require(&icon.open, || "state.icon.open".to_string())?;
        require(&icon.closed, || "state.icon.closed".to_string())?;
    }

    if let Some(location) = &doc.location {
        if location.is_empty() {
            return Err(SchemaError::EmptySection("location".to_string()));
        }
    }

    if let Some(contact) = &doc.contact {
        if contact.is_empty() {
            return Err(SchemaError::EmptySection("contact".to_string()));
        }
        for (i, keymaster) in contact.keymasters.iter().enumerate() {
            if keymaster.is_empty() {
                return Err(SchemaError::EmptySection(format!("contact.keymasters[{}]", i)));
            }
        }
    }

    for (i, event) in doc.events.iter().enumerate() {
        require(&event.name, || format!("events[{}].name", i))?;
        require(&event.event_type, || format!("events[{}].type", i))?;
        if event.timestamp <= 0 {
            return Err(SchemaError::MissingField(format!("events[{}].timestamp", i)));
        }
    }

    for (i, link) in doc.links.iter().enumerate() {
        require(&link.name, || format!("links[{}].name", i))?;
        require(&link.url, || format!("links[{}].url", i))?;
    }

    if let Some(feeds) = &doc.feeds {
        if feeds.is_empty() {
            return Err(SchemaError::EmptySection("feeds".to_string()));
        }
        let named = [
            ("blog", &feeds.blog),
            ("wiki", &feeds.wiki),
            ("calendar", &feeds.calendar),
            ("flickr", &feeds.flickr),
        ];
        for (name, feed) in named {
            if let Some(feed) = feed {
                require(&feed.url, || format!("feeds.{}.url", name))?;
            }
        }
    }

    if let Some(cache) = &doc.cache {
        require(&cache.schedule, || "cache.schedule".to_string())?;
    }

    if let Some(show) = &doc.radio_show {
        require(&show.name, || "radio_show.name".to_string())?;
        require(&show.url, || "radio_show.url".to_string())?;
        require(&show.show_type, || "radio_show.type".to_string())?;
    }

    if let Some(sensors) = &doc.sensors {
        if sensors.is_empty() {
            return Err(SchemaError::EmptySection("sensors".to_string()));
        }
        if sensors.radiation.as_ref().is_some_and(|r| r.is_empty()) {
            return Err(SchemaError::EmptySection("sensors.radiation".to_string()));
        }
        for (category, base) in sensors.bases() {
            require(&base.location, || format!("sensors.{}.location", category))?;
        }
        for (category, unit) in sensors.units() {
            require(unit, || format!("sensors.{}.unit", category))?;
        }
    }

    Ok(())
}

fn require(value: &str, path: impl FnOnce() -> String) -> Result<(), SchemaError> {
    if value.trim().is_empty() {
        Err(SchemaError::MissingField(path()))
    } else {
        Ok(())
    }
}
