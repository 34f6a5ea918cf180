use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;

/// Build a Bedrock runtime client for `region` using the default credential
/// chain (environment, profile, instance role).
pub async fn build_client(region: &str) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await;
    Client::new(&config)
}
