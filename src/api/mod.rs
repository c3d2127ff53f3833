// HTTP API

pub mod spaceapi;

pub use spaceapi::{create_spaceapi_router, SpaceApiAppState};
