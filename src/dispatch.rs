use tracing::{error, info};

use crate::client::{QueueSender, SendFailure};
use crate::errors::ActionError;
use crate::params::DispatchRequest;

/// Successful dispatch outcome: the service-assigned message identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub message_id: String,
}

/// Send one message and classify the outcome.
///
/// The sender is moved in and dropped on every exit path, so the underlying
/// client is released whether the send succeeds, the service rejects it, or
/// something unexpected breaks.
///
/// # Errors
///
/// Returns `ActionError::Dispatch` for a service-reported failure and
/// `ActionError::Unexpected` for any other transmission failure; both carry
/// the queue URL.
pub async fn dispatch(
    sender: Box<dyn QueueSender>,
    request: &DispatchRequest,
) -> Result<DispatchResult, ActionError> {
    let outcome = sender.send(request).await;
    drop(sender);

    match outcome {
        Ok(message_id) => {
            info!("Message sent to SQS queue. MessageId: {}", message_id);
            Ok(DispatchResult { message_id })
        }
        Err(SendFailure::Service(message)) => {
            error!(
                "Error sending message to SQS: {}. Queue: {}",
                message, request.queue_url
            );
            Err(ActionError::Dispatch {
                queue_url: request.queue_url.clone(),
                message,
            })
        }
        Err(SendFailure::Other(message)) => {
            error!(
                "Unexpected error sending message: {}. Queue: {}",
                message, request.queue_url
            );
            Err(ActionError::Unexpected(format!(
                "{message}. Queue: {}",
                request.queue_url
            )))
        }
    }
}
