use std::collections::HashMap;

use async_trait::async_trait;
use sqs_message_action::errors::ActionError;
use sqs_message_action::secrets::{
    resolve_credentials, SecretStore, APP_KEY, AWS_ACCESS_KEY, AWS_SECRET_KEY,
};

/// In-memory stand-in for the external secret store.
struct MemoryStore {
    bundle: Option<HashMap<String, String>>,
    fail: bool,
}

impl MemoryStore {
    fn with_bundle(pairs: &[(&str, &str)]) -> Self {
        Self {
            bundle: Some(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            fail: false,
        }
    }

    fn not_configured() -> Self {
        Self {
            bundle: None,
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            bundle: None,
            fail: true,
        }
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn get_secrets(
        &self,
        app_key: &str,
    ) -> Result<Option<HashMap<String, String>>, anyhow::Error> {
        assert_eq!(app_key, APP_KEY, "store must be queried under the app key");
        if self.fail {
            anyhow::bail!("store unavailable");
        }
        Ok(self.bundle.clone())
    }
}

#[tokio::test]
async fn test_usable_bundle_yields_the_credential_pair() {
    let store = MemoryStore::with_bundle(&[
        (AWS_ACCESS_KEY, "AKIAEXAMPLE"),
        (AWS_SECRET_KEY, "shh-secret"),
    ]);

    let creds = resolve_credentials(&store).await.unwrap();
    assert_eq!(creds.access_key, "AKIAEXAMPLE");
    assert_eq!(creds.secret_key, "shh-secret");
}

#[tokio::test]
async fn test_absent_bundle_is_a_credential_error() {
    let err = resolve_credentials(&MemoryStore::not_configured())
        .await
        .unwrap_err();

    match err {
        ActionError::Credential(msg) => assert!(msg.contains("not found")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_bundle_is_a_credential_error() {
    let err = resolve_credentials(&MemoryStore::with_bundle(&[]))
        .await
        .unwrap_err();

    match err {
        ActionError::Credential(msg) => assert!(msg.contains("empty")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_access_key_names_the_field() {
    let store = MemoryStore::with_bundle(&[(AWS_SECRET_KEY, "shh-secret")]);
    let err = resolve_credentials(&store).await.unwrap_err();

    match err {
        ActionError::Credential(msg) => assert!(msg.contains("Access Key")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_secret_key_names_the_field() {
    let store = MemoryStore::with_bundle(&[
        (AWS_ACCESS_KEY, "AKIAEXAMPLE"),
        (AWS_SECRET_KEY, ""),
    ]);
    let err = resolve_credentials(&store).await.unwrap_err();

    match err {
        ActionError::Credential(msg) => assert!(msg.contains("Secret Key")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_store_failure_is_an_unexpected_error() {
    let err = resolve_credentials(&MemoryStore::failing())
        .await
        .unwrap_err();

    assert!(matches!(err, ActionError::Unexpected(_)));
}

#[tokio::test]
async fn test_credentials_debug_never_shows_the_secret_key() {
    let store = MemoryStore::with_bundle(&[
        (AWS_ACCESS_KEY, "AKIAEXAMPLE"),
        (AWS_SECRET_KEY, "shh-secret"),
    ]);

    let creds = resolve_credentials(&store).await.unwrap();
    let rendered = format!("{creds:?}");
    assert!(!rendered.contains("shh-secret"));
}
