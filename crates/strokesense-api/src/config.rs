use std::env;
use std::net::SocketAddr;

use strokesense_bedrock::assess::FailurePolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_REGION: &str = "us-east-1";

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub region: String,
    /// When unset, notes are analyzed heuristically unless a request names
    /// a model.
    pub model_id: Option<String>,
    pub on_model_failure: FailurePolicy,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so it can be tested without
    /// touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_blank("STROKESENSE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid STROKESENSE_BIND_ADDR '{bind_addr}': {e}"))?;

        let on_model_failure = match non_blank("STROKESENSE_ON_MODEL_FAILURE") {
            Some(v) => v.parse()?,
            None => FailurePolicy::default(),
        };

        Ok(Self {
            bind_addr,
            region: non_blank("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            model_id: non_blank("STROKESENSE_MODEL_ID"),
            on_model_failure,
        })
    }
}
