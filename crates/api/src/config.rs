//! Process configuration, read from the environment at startup.

use std::net::SocketAddr;

use anyhow::Context;

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_VAR: &str = "AGRIREG_LISTEN_ADDR";

/// Default listen address (all interfaces, port 8080).
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub listen_addr: SocketAddr,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw = lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw
            .parse()
            .with_context(|| format!("{LISTEN_ADDR_VAR} is not a socket address: {raw:?}"))?;
        Ok(Self { listen_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_8080() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.listen_addr.port(), 8080);
        assert!(cfg.listen_addr.ip().is_unspecified());
    }

    #[test]
    fn honors_override() {
        let cfg = ApiConfig::from_lookup(|k| {
            (k == LISTEN_ADDR_VAR).then(|| "127.0.0.1:9000".to_string())
        })
        .unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn rejects_garbage() {
        let err = ApiConfig::from_lookup(|_| Some("not an addr".to_string())).unwrap_err();
        assert!(err.to_string().contains(LISTEN_ADDR_VAR));
    }
}
