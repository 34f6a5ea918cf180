use aws_sdk_bedrockruntime::Client;

use strokesense_bedrock::assess::FailurePolicy;
use strokesense_bedrock::model::BedrockModel;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub default_model_id: Option<String>,
    pub on_model_failure: FailurePolicy,
}

impl AppState {
    pub fn new(client: Client, config: &ServerConfig) -> Self {
        Self {
            client,
            default_model_id: config.model_id.clone(),
            on_model_failure: config.on_model_failure,
        }
    }

    /// The model to use for a request: the requested one, else the
    /// configured default, else none (heuristic analysis).
    pub fn model_for(&self, requested: Option<&str>) -> Option<BedrockModel> {
        requested
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or(self.default_model_id.as_deref())
            .map(|id| BedrockModel::new(self.client.clone(), id))
    }
}
