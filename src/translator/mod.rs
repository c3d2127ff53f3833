// Lab state → SpaceAPI document translation

mod error;

pub use error::TranslateError;

use crate::schema::{OpenState, StatusDocument};
use crate::upstream::StateSource;
use std::sync::Arc;
use tracing::debug;

/// Merges upstream lab state into the facility template.
///
/// The template is shared read-only between requests. Each call works on
/// its own copy, so concurrent requests never observe each other's state.
#[derive(Clone)]
pub struct Translator {
    template: Arc<StatusDocument>,
    source: Arc<dyn StateSource>,
}

impl Translator {
    pub fn new(template: StatusDocument, source: Arc<dyn StateSource>) -> Self {
        Self {
            template: Arc::new(template),
            source,
        }
    }

    pub fn template(&self) -> &StatusDocument {
        &self.template
    }

    /// Fetch the current state and return a fresh document carrying it.
    ///
    /// On failure nothing is produced; there is no fallback to a previous
    /// reading.
    pub async fn translate(&self) -> Result<StatusDocument, TranslateError> {
        let reading = self.source.fetch().await.map_err(|e| {
            debug!(kind = e.kind(), error = %e, "Lab state translation failed");
            e
        })?;

        let doc = self.template.with_state(reading);
        debug!(
            open = ?OpenState::from(reading.open),
            last_change = ?reading.last_change,
            "Lab state merged"
        );
        Ok(doc)
    }

    /// [`Translator::translate`] followed by JSON serialization.
    pub async fn render(&self) -> Result<Vec<u8>, TranslateError> {
        let doc = self.translate().await?;
        doc.to_json_bytes()
            .map_err(|e| TranslateError::Decode(format!("failed to serialize document: {}", e)))
    }
}
