//! Host settings read from the environment.
//!
//! | variable                  | default                 |
//! |---------------------------|-------------------------|
//! | `CODEGEN_HOST`            | `127.0.0.1`             |
//! | `CODEGEN_PORT`            | `8080`                  |
//! | `CODEGEN_SERVICE_URL`     | `http://127.0.0.1:8000` |
//! | `CODEGEN_ROOT_CONTEXT`    | empty                   |
//! | `CODEGEN_TIMEOUT_SECS`    | `300`                   |
//! | `CODEGEN_MAX_BODY_MB`     | `10`                    |
//! | `CODEGEN_OPEN_BROWSER`    | `true`                  |
//!
//! `CODEGEN_ROOT_CONTEXT` is the application prefix the code-generation service
//! mounts its routes under (`/{root}/api/v1/...`).

use crate::error::{HostError, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub service_url: String,
    pub root_context: String,
    pub upstream_timeout: Duration,
    pub max_body_bytes: usize,
    pub open_browser: bool,
}

impl HostConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys take their
    /// defaults, malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let service_url = text("CODEGEN_SERVICE_URL", "http://127.0.0.1:8000");
        if !(service_url.starts_with("http://") || service_url.starts_with("https://")) {
            return Err(HostError::Config(format!(
                "CODEGEN_SERVICE_URL must be an http(s) URL, got {service_url}"
            )));
        }

        let max_body_mb: usize = parse(&lookup, "CODEGEN_MAX_BODY_MB", 10)?;
        let max_body_bytes = max_body_mb.checked_mul(1024 * 1024).ok_or_else(|| {
            HostError::Config(format!("CODEGEN_MAX_BODY_MB={max_body_mb} is too large"))
        })?;
        let timeout_secs: u64 = parse(&lookup, "CODEGEN_TIMEOUT_SECS", 300)?;

        Ok(HostConfig {
            host: text("CODEGEN_HOST", "127.0.0.1"),
            port: parse(&lookup, "CODEGEN_PORT", 8080)?,
            service_url: service_url.trim_end_matches('/').to_string(),
            root_context: text("CODEGEN_ROOT_CONTEXT", "").trim_matches('/').to_string(),
            upstream_timeout: Duration::from_secs(timeout_secs),
            max_body_bytes,
            open_browser: parse(&lookup, "CODEGEN_OPEN_BROWSER", true)?,
        })
    }

    /// Base URL every relayed path is appended to.
    pub fn upstream_base(&self) -> String {
        if self.root_context.is_empty() {
            self.service_url.clone()
        } else {
            format!("{}/{}", self.service_url, self.root_context)
        }
    }

    pub fn local_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).map(|v| v.trim().to_string()) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|e| HostError::Config(format!("{key}={value}: {e}"))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<HostConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();

        assert_eq!(config.local_url(), "http://127.0.0.1:8080");
        assert_eq!(config.upstream_base(), "http://127.0.0.1:8000");
        assert_eq!(config.upstream_timeout, Duration::from_secs(300));
        assert_eq!(config.max_body_bytes, 10 * 1024 * 1024);
        assert!(config.open_browser);
    }

    #[test]
    fn overrides_are_honoured() {
        let config = config(&[
            ("CODEGEN_HOST", "0.0.0.0"),
            ("CODEGEN_PORT", "9000"),
            ("CODEGEN_SERVICE_URL", "https://codegen.internal/"),
            ("CODEGEN_ROOT_CONTEXT", "/silver-codegen-genai/"),
            ("CODEGEN_OPEN_BROWSER", "false"),
            ("CODEGEN_MAX_BODY_MB", "25"),
        ])
        .unwrap();

        assert_eq!(config.local_url(), "http://0.0.0.0:9000");
        assert_eq!(
            config.upstream_base(),
            "https://codegen.internal/silver-codegen-genai"
        );
        assert!(!config.open_browser);
        assert_eq!(config.max_body_bytes, 25 * 1024 * 1024);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config(&[("CODEGEN_PORT", "  "), ("CODEGEN_HOST", "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config(&[("CODEGEN_PORT", "eighty")]),
            Err(HostError::Config(_))
        ));
        assert!(matches!(
            config(&[("CODEGEN_OPEN_BROWSER", "sometimes")]),
            Err(HostError::Config(_))
        ));
        assert!(matches!(
            config(&[("CODEGEN_SERVICE_URL", "ftp://codegen")]),
            Err(HostError::Config(_))
        ));
    }

    #[test]
    fn oversized_body_limit_is_rejected() {
        let too_many_mb = (usize::MAX / (1024 * 1024) + 1).to_string();
        assert!(matches!(
            config(&[("CODEGEN_MAX_BODY_MB", too_many_mb.as_str())]),
            Err(HostError::Config(_))
        ));

        let largest = (usize::MAX / (1024 * 1024)).to_string();
        let config = config(&[("CODEGEN_MAX_BODY_MB", largest.as_str())]).unwrap();
        assert!(config.max_body_bytes > 0);
    }
}
