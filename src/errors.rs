use thiserror::Error;

/// Failure taxonomy for the dispatch pipeline, in pipeline order.
///
/// This is the only error type that crosses the action boundary; every
/// internal failure is converted into one of these variants, and the
/// `Display` form carries enough context (stage, queue URL, region) for an
/// operator to diagnose the failure without raw logs.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A required action parameter is missing or invalid.
    #[error("Error processing parameters: {0}")]
    Parameter(String),

    /// The credential bundle is missing, empty, or incomplete. The message
    /// carries a remediation hint but never a secret value.
    #[error("{0}. Please configure the AWS credentials in the app configuration.")]
    Credential(String),

    /// The SQS client could not be constructed for the given region.
    #[error("Error initializing SQS client: {message}. Region: {region}")]
    ClientInit { region: String, message: String },

    /// The queueing service rejected or failed the send.
    #[error("Failed to send message to SQS: {message}. Queue: {queue_url}")]
    Dispatch { queue_url: String, message: String },

    /// Anything else that went wrong during dispatch. Full detail is logged;
    /// the surfaced message stays generic apart from the embedded context.
    #[error("Unexpected error sending message: {0}")]
    Unexpected(String),
}

impl From<anyhow::Error> for ActionError {
    fn from(error: anyhow::Error) -> Self {
        ActionError::Unexpected(error.to_string())
    }
}
