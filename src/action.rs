use tracing::info;

use crate::client::{SenderFactory, SqsSenderFactory};
use crate::dispatch::{self, DispatchResult};
use crate::errors::ActionError;
use crate::params::{self, ActionParameters, Content};
use crate::secrets::{self, SecretStore, SsmSecretStore};

/// Run the full dispatch pipeline: resolve parameters, resolve credentials,
/// build a sender, send, tear down.
///
/// Control flows strictly downward and each invocation is a single attempt;
/// the host owns any retry of the whole action. Every value created here is
/// invocation-local, so concurrent invocations never share state.
///
/// # Errors
///
/// Returns the first `ActionError` produced by any pipeline stage.
pub async fn execute(
    params: &ActionParameters,
    content: &Content,
    store: &dyn SecretStore,
    factory: &dyn SenderFactory,
) -> Result<DispatchResult, ActionError> {
    let resolved = params::resolve_request(params, content)?;
    info!(
        "Dispatching to SQS queue {} in region {}",
        resolved.request.queue_url, resolved.region
    );

    let credentials = secrets::resolve_credentials(store).await?;
    let sender = factory.make_sender(&resolved.region, &credentials)?;

    dispatch::dispatch(sender, &resolved.request).await
}

/// Host-facing entry point wired to the production collaborators: the SSM
/// secret store under the system identity and the real SQS sender factory.
///
/// # Errors
///
/// See [`execute`].
pub async fn execute_action(
    params: &ActionParameters,
    content: &Content,
) -> Result<DispatchResult, ActionError> {
    let store = SsmSecretStore::from_system_env().await;
    execute(params, content, &store, &SqsSenderFactory).await
}
