use super::BridgeConfig;
use crate::upstream::StatusMapping;
use std::path::PathBuf;
use tracing::warn;

impl BridgeConfig {
    /// Overlay `SPACEAPI_*` environment variables on top of the loaded config.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Same as [`BridgeConfig::apply_env`] with an explicit lookup.
    ///
    /// Unparsable values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("SPACEAPI_BIND_ADDR") {
            self.server.bind_addr = v;
        }
        if let Some(v) = lookup("SPACEAPI_UPSTREAM_URL") {
            self.upstream.url = v;
        }
        if let Some(v) = lookup("SPACEAPI_UPSTREAM_TIMEOUT_SECONDS") {
            match v.parse::<u64>() {
                Ok(n) if n > 0 => self.upstream.timeout_seconds = n,
                _ => warn!(value = %v, "Ignoring invalid SPACEAPI_UPSTREAM_TIMEOUT_SECONDS"),
            }
        }
        if let Some(v) = lookup("SPACEAPI_UPSTREAM_SCHEMA") {
            match v.parse::<StatusMapping>() {
                Ok(schema) => self.upstream.schema = schema,
                Err(e) => warn!(error = %e, "Ignoring invalid SPACEAPI_UPSTREAM_SCHEMA"),
            }
        }
        if let Some(v) = lookup("SPACEAPI_TEMPLATE_PATH") {
            self.template.path = Some(PathBuf::from(v));
        }
    }
}
