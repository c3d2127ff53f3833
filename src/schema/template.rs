use super::{Contact, Link, Location, SpaceFed, State, StatusDocument};

impl StatusDocument {
    /// Built-in facility template for Metalab, Vienna.
    ///
    /// The open flag starts out unknown; it is only ever set on per-request
    /// copies.
    pub fn metalab() -> Self {
        Self {
            api_compatibility: vec!["14".to_string(), "15".to_string()],
            space: "Metalab".to_string(),
            logo: "https://metalab.at/wiki/images/9/93/Metalab.at.svg".to_string(),
            url: "https://metalab.at".to_string(),
            location: Some(Location {
                address: "Verein Metalab, Rathausstraße 6, 1010 Wien, Austria".to_string(),
                lat: 48.2093723,
                lon: 16.356099,
                timezone: "Europe/Vienna".to_string(),
                country_code: "AT".to_string(),
                ..Default::default()
            }),
            spacefed: Some(SpaceFed {
                spacenet: false,
                spacesaml: false,
            }),
            state: Some(State::default()),
            contact: Some(Contact {
                phone: "+43 720 002323".to_string(),
                mastodon: "@metalab@chaos.social".to_string(),
                sip: "6382".to_string(),
                ..Default::default()
            }),
            links: vec![Link {
                name: "Metalab Wiki".to_string(),
                url: "https://metalab.at/wiki".to_string(),
                ..Default::default()
            }],
            projects: vec![
                "https://github.com/metalab".to_string(),
                "https://metalab.at/wiki/Projekte_Neu".to_string(),
            ],
            ..Default::default()
        }
    }
}
