//! Gateway configuration.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings applied to every gateway built by the HTTP factory.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Per-request timeout for remote calls.
    pub request_timeout: Duration,
    /// Whether to accept self-signed TLS certificates. Stock Proxmox
    /// installs ship with self-signed certificates, so this defaults on.
    pub accept_invalid_certs: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: true,
        }
    }
}

impl GatewayConfig {
    /// Builds a configuration from environment variables, falling back to
    /// the defaults for anything unset or unparseable.
    ///
    /// * `PROXFLEET_GATEWAY_TIMEOUT_SECS` — request timeout in seconds
    /// * `PROXFLEET_ACCEPT_INVALID_CERTS` — "true"/"false"
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let request_timeout = env::var("PROXFLEET_GATEWAY_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);
        let accept_invalid_certs = env::var("PROXFLEET_ACCEPT_INVALID_CERTS")
            .ok()
            .and_then(|raw| raw.parse::<bool>().ok())
            .unwrap_or(defaults.accept_invalid_certs);
        Self {
            request_timeout,
            accept_invalid_certs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_proxmox_expectations() {
        let config = GatewayConfig::default();
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);
    }
}
