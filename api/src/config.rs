//! Fetch configuration resolved from build-time environment variables.
//!
//! | Variable                  | Default                                  |
//! |---------------------------|------------------------------------------|
//! | `RECAP_API_MODE`          | `simulated` (`remote` to hit the server) |
//! | `RECAP_API_BASE_URL`      | `http://localhost:3000/api/v1/students`  |
//! | `RECAP_API_TIMEOUT_MS`    | `10000`                                  |
//! | `RECAP_API_AUTHORIZATION` | `Bearer test-token`                      |
//! | `RECAP_API_KEY`           | `test-key`                               |
//! | `RECAP_CLIENT_VERSION`    | crate version                            |
//! | `RECAP_SIM_MIN_MS`        | `1000`                                   |
//! | `RECAP_SIM_MAX_MS`        | `3000`                                   |
//!
//! Values are baked in with `option_env!` so the wasm build sees them too.

use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Remote,
    Simulated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub mode: SourceMode,
    pub base_url: String,
    pub timeout_ms: u64,
    pub authorization: String,
    pub api_key: String,
    pub client_version: String,
    pub simulated_min_ms: u64,
    pub simulated_max_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Simulated,
            base_url: "http://localhost:3000/api/v1/students".to_string(),
            timeout_ms: 10_000,
            authorization: "Bearer test-token".to_string(),
            api_key: "test-key".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            simulated_min_ms: 1_000,
            simulated_max_ms: 3_000,
        }
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "RECAP_API_MODE" => option_env!("RECAP_API_MODE"),
        "RECAP_API_BASE_URL" => option_env!("RECAP_API_BASE_URL"),
        "RECAP_API_TIMEOUT_MS" => option_env!("RECAP_API_TIMEOUT_MS"),
        "RECAP_API_AUTHORIZATION" => option_env!("RECAP_API_AUTHORIZATION"),
        "RECAP_API_KEY" => option_env!("RECAP_API_KEY"),
        "RECAP_CLIENT_VERSION" => option_env!("RECAP_CLIENT_VERSION"),
        "RECAP_SIM_MIN_MS" => option_env!("RECAP_SIM_MIN_MS"),
        "RECAP_SIM_MAX_MS" => option_env!("RECAP_SIM_MAX_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

impl ApiConfig {
    /// Configuration baked into this build.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    /// Resolve every field through `lookup`, keeping defaults for missing or
    /// malformed values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup("RECAP_API_MODE") {
            match mode.trim().to_ascii_lowercase().as_str() {
                "remote" => config.mode = SourceMode::Remote,
                "simulated" | "mock" => config.mode = SourceMode::Simulated,
                other => warn!(value = other, "unknown RECAP_API_MODE, using simulated"),
            }
        }
        if let Some(url) = lookup("RECAP_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(ms) = parse_ms(&lookup, "RECAP_API_TIMEOUT_MS") {
            config.timeout_ms = ms;
        }
        if let Some(auth) = lookup("RECAP_API_AUTHORIZATION") {
            config.authorization = auth;
        }
        if let Some(key) = lookup("RECAP_API_KEY") {
            config.api_key = key;
        }
        if let Some(version) = lookup("RECAP_CLIENT_VERSION") {
            config.client_version = version;
        }
        if let Some(ms) = parse_ms(&lookup, "RECAP_SIM_MIN_MS") {
            config.simulated_min_ms = ms;
        }
        if let Some(ms) = parse_ms(&lookup, "RECAP_SIM_MAX_MS") {
            config.simulated_max_ms = ms;
        }
        if config.simulated_max_ms < config.simulated_min_ms {
            warn!(
                min = config.simulated_min_ms,
                max = config.simulated_max_ms,
                "simulated latency bounds inverted, swapping"
            );
            std::mem::swap(&mut config.simulated_min_ms, &mut config.simulated_max_ms);
        }

        config
    }
}

fn parse_ms(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<u64> {
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(err) => {
            warn!(variable = name, value = %raw, error = %err, "ignoring malformed duration");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_are_simulated_with_ten_second_timeout() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config.mode, SourceMode::Simulated);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.base_url, "http://localhost:3000/api/v1/students");
        assert_eq!((config.simulated_min_ms, config.simulated_max_ms), (1_000, 3_000));
    }

    #[test]
    fn overrides_apply() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("RECAP_API_MODE", "Remote"),
            ("RECAP_API_BASE_URL", "https://example.test/api/"),
            ("RECAP_API_TIMEOUT_MS", "2500"),
            ("RECAP_API_KEY", "k"),
        ]));
        assert_eq!(config.mode, SourceMode::Remote);
        assert_eq!(config.base_url, "https://example.test/api");
        assert_eq!(config.timeout_ms, 2_500);
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("RECAP_API_MODE", "carrier-pigeon"),
            ("RECAP_API_TIMEOUT_MS", "soon"),
        ]));
        assert_eq!(config.mode, SourceMode::Simulated);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn inverted_latency_bounds_are_swapped() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("RECAP_SIM_MIN_MS", "500"),
            ("RECAP_SIM_MAX_MS", "100"),
        ]));
        assert_eq!((config.simulated_min_ms, config.simulated_max_ms), (100, 500));
    }
}
