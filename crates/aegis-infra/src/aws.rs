//! Shared AWS SDK configuration.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;

pub const DEFAULT_REGION: &str = "us-east-2";

/// AWS connection configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Region hosting the stream and the analysis service.
    pub region: String,
    /// Endpoint override (e.g., http://localhost:4566 for LocalStack)
    pub endpoint_url: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
        }
    }
}

impl AwsConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
        }
    }

    /// Resolve the SDK configuration shared by every client.
    pub async fn load(&self) -> SdkConfig {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(self.region.clone()));

        if let Some(url) = &self.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let config = loader.load().await;
        tracing::debug!(
            region = %self.region,
            endpoint = ?self.endpoint_url,
            "AWS SDK configuration loaded"
        );
        config
    }
}

/// Errors while preparing AWS clients.
#[derive(Debug, thiserror::Error)]
pub enum AwsError {
    #[error("AWS credentials not found: {0}")]
    MissingCredentials(String),
}

/// Resolve credentials once so a missing setup fails before any work starts.
pub async fn ensure_credentials(config: &SdkConfig) -> Result<(), AwsError> {
    let provider = config
        .credentials_provider()
        .ok_or_else(|| AwsError::MissingCredentials("no credentials provider".to_string()))?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| AwsError::MissingCredentials(e.to_string()))?;

    Ok(())
}
