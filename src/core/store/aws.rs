//! AWS Secrets Manager store.
//!
//! Credentials and region come from the default provider chain
//! (`AWS_ACCESS_KEY_ID`, `AWS_PROFILE`, `~/.aws/config`, instance roles, ...).
//! `--region` and `--profile` override the chain.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::config::AwsSettings;
use crate::core::types::SecretRef;
use crate::error::{Result, StoreError};

/// AWS Secrets Manager client.
///
/// The SDK is async; calls are driven to completion on a private
/// current-thread runtime so the rest of the program stays synchronous.
pub struct SecretsManager {
    runtime: Runtime,
    client: Client,
}

impl SecretsManager {
    /// Load AWS configuration and build a client.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot be created.
    pub fn connect(settings: &AwsSettings) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        let client = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &settings.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(profile) = &settings.profile {
                loader = loader.profile_name(profile);
            }
            let config = loader.load().await;
            debug!(
                region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
                "aws config loaded"
            );
            Client::new(&config)
        });

        Ok(Self { runtime, client })
    }
}

impl SecretStore for SecretsManager {
    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }

    fn fetch(&self, secret: &SecretRef) -> Result<Zeroizing<String>> {
        trace!(
            id = secret.id(),
            version_id = secret.version_id(),
            version_stage = secret.version_stage(),
            "GetSecretValue"
        );

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_secret_value()
                    .secret_id(secret.id())
                    .set_version_id(secret.version_id().map(String::from))
                    .set_version_stage(secret.version_stage().map(String::from))
                    .send(),
            )
            .map_err(|e| StoreError::Fetch {
                id: secret.id().to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let value = output
            .secret_string()
            .ok_or_else(|| StoreError::NotText(secret.id().to_string()))?;

        trace!(
            version_id = output.version_id(),
            len = value.len(),
            "secret fetched"
        );
        Ok(Zeroizing::new(value.to_string()))
    }

    fn update(&self, secret_id: &str, content: &str) -> Result<()> {
        trace!(id = secret_id, len = content.len(), "UpdateSecret");

        let output = self
            .runtime
            .block_on(
                self.client
                    .update_secret()
                    .secret_id(secret_id)
                    .secret_string(content)
                    .send(),
            )
            .map_err(|e| StoreError::Update {
                id: secret_id.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        trace!(version_id = output.version_id(), "secret updated");
        Ok(())
    }
}
