// Upstream lab state sources

mod http;
mod mapping;

pub use http::{HttpStateSource, UpstreamConfig};
pub use mapping::StatusMapping;

use crate::schema::StateReading;
use crate::translator::TranslateError;
use async_trait::async_trait;

/// Anything that can tell whether the space is open right now.
#[async_trait]
pub trait StateSource: Send + Sync {
    async fn fetch(&self) -> Result<StateReading, TranslateError>;
}
