use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use aws_sdk_ssm::Client as SsmClient;
use tracing::info;

use crate::errors::ActionError;

/// Fixed application key the credential bundle is registered under.
pub const APP_KEY: &str = "sqsMessageSender";

/// Secret names significant to this action.
pub const AWS_ACCESS_KEY: &str = "awsAccessKey";
pub const AWS_SECRET_KEY: &str = "awsSecretKey";

/// A verified AWS credential pair. `Debug` redacts the secret key so the
/// value can never leak through logging.
#[derive(Clone)]
pub struct AwsCredentials {
    pub access_key: String,
    pub secret_key: String,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key", &key_prefix(&self.access_key))
            .field("secret_key", &"***")
            .finish()
    }
}

/// External secret store, queried by application key under a system-level
/// identity. Injected so the pipeline never reaches into process-wide state,
/// and so tests can substitute an in-memory bundle.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the secret bundle registered under `app_key`, or `None` if no
    /// bundle is configured.
    async fn get_secrets(
        &self,
        app_key: &str,
    ) -> Result<Option<HashMap<String, String>>, anyhow::Error>;
}

/// Look up the application's credential bundle and extract a usable pair.
///
/// The bundle is either fully usable (both named secrets present and
/// non-empty) or this fails before any network client is built; partial
/// credentials never reach the client factory.
///
/// # Errors
///
/// Returns `ActionError::Credential` when the bundle is absent, empty, or a
/// named secret is missing or empty, and `ActionError::Unexpected` when the
/// store lookup itself fails.
pub async fn resolve_credentials(store: &dyn SecretStore) -> Result<AwsCredentials, ActionError> {
    info!("Retrieving AWS credentials from the app configuration");

    let secrets = store
        .get_secrets(APP_KEY)
        .await
        .map_err(|e| ActionError::Unexpected(format!("Secret store lookup failed: {e}")))?;

    let Some(secrets) = secrets else {
        return Err(ActionError::Credential(
            "AWS SQS app secrets not found".to_string(),
        ));
    };
    if secrets.is_empty() {
        return Err(ActionError::Credential(
            "AWS SQS app configuration is empty".to_string(),
        ));
    }

    let access_key = named_secret(&secrets, AWS_ACCESS_KEY)
        .ok_or_else(|| ActionError::Credential("AWS Access Key is missing or empty".to_string()))?;
    let secret_key = named_secret(&secrets, AWS_SECRET_KEY)
        .ok_or_else(|| ActionError::Credential("AWS Secret Key is missing or empty".to_string()))?;

    // Partial prefix only; full secret values must never be logged.
    info!("Using AWS access key: {}...", key_prefix(&access_key));

    Ok(AwsCredentials {
        access_key,
        secret_key,
    })
}

fn named_secret(secrets: &HashMap<String, String>, name: &str) -> Option<String> {
    secrets
        .get(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn key_prefix(key: &str) -> String {
    key.chars().take(4).collect()
}

/// Secret store backed by AWS Systems Manager Parameter Store: the bundle
/// lives as SecureString parameters under `/{app_key}/`, one parameter per
/// secret name.
pub struct SsmSecretStore {
    client: SsmClient,
}

impl SsmSecretStore {
    pub fn new(client: SsmClient) -> Self {
        Self { client }
    }

    /// Build a store from the host's system-level AWS configuration. The
    /// identity used here is the host process's, not the workflow user's;
    /// credential administration stays separate from action configuration.
    pub async fn from_system_env() -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(SsmClient::new(&shared))
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn get_secrets(
        &self,
        app_key: &str,
    ) -> Result<Option<HashMap<String, String>>, anyhow::Error> {
        let path = format!("/{app_key}/");
        let mut secrets = HashMap::new();
        let mut next_token: Option<String> = None;

        loop {
            let resp = self
                .client
                .get_parameters_by_path()
                .path(&path)
                .with_decryption(true)
                .set_next_token(next_token.take())
                .send()
                .await?;

            for param in resp.parameters() {
                if let (Some(name), Some(value)) = (param.name(), param.value()) {
                    let name = name.rsplit('/').next().unwrap_or(name);
                    secrets.insert(name.to_string(), value.to_string());
                }
            }

            next_token = resp.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        // An absent bundle and an empty path are indistinguishable in SSM;
        // both surface as "not configured".
        if secrets.is_empty() {
            Ok(None)
        } else {
            Ok(Some(secrets))
        }
    }
}
