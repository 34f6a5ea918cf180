use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{debug, info};

use crate::error::ModelError;

/// Low temperature keeps triage output consistent between runs.
const DEFAULT_TEMPERATURE: f32 = 0.1;
const DEFAULT_MAX_TOKENS: i32 = 2000;

/// A chat-completion backend that returns raw response text.
pub trait ChatModel: Send + Sync {
    fn model_id(&self) -> &str;

    fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}

/// A Bedrock model invoked through the Converse API.
#[derive(Debug, Clone)]
pub struct BedrockModel {
    client: Client,
    model_id: String,
    temperature: f32,
    max_tokens: i32,
}

impl BedrockModel {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatModel for BedrockModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(&self, system_prompt: &str, user_message: &str) -> Result<String, ModelError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_message.to_string()))
            .build()
            .map_err(|e| ModelError::Invocation(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build();

        info!(model_id = %self.model_id, "invoking model");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| ModelError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| ModelError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if let Some(usage) = response.usage() {
            debug!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "model usage"
            );
        }

        Ok(text)
    }
}
