/// SQS message-sender action: one pluggable workflow step that delivers a
/// message to an AWS SQS queue.
///
/// Given a triggering content item and the action's configuration, the
/// pipeline resolves parameters, looks up AWS credentials from the app's
/// secret bundle, builds a region-bound SQS client for the duration of one
/// dispatch, sends the message, and reports the service-assigned message id
/// or a classified failure.
///
/// # Architecture
///
/// Four stages composed linearly, invoked once per triggering event:
/// 1. Parameter resolution ([`params`]) — untyped map to a typed request.
/// 2. Credential resolution ([`secrets`]) — SSM-backed secret bundle to a
///    verified key pair.
/// 3. Client construction ([`client`]) — one sender per invocation, no I/O
///    until first use.
/// 4. Dispatch ([`dispatch`]) — send, classify, tear down.
///
/// The secret store and sender factory are injected, so hosts and tests
/// control both external collaborators.
///
/// # Example
///
/// ```no_run
/// use sqs_message_action::{execute_action, ActionParameters, Content};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     sqs_message_action::setup_logging();
///
///     let params = ActionParameters::new()
///         .with("queueUrl", "https://sqs.eu-north-1.amazonaws.com/123456789012/my-queue")
///         .with("messageBody", "content published: $content.title")
///         .with("awsRegion", "eu-north-1")
///         .with("delaySeconds", "30");
///     let content = Content::new().with_field("title", "Hello");
///
///     let result = execute_action(&params, &content).await?;
///     println!("MessageId: {}", result.message_id);
///     Ok(())
/// }
/// ```
pub mod action;
pub mod client;
pub mod definition;
pub mod dispatch;
pub mod errors;
pub mod params;
pub mod secrets;

pub use action::{execute, execute_action};
pub use dispatch::DispatchResult;
pub use errors::ActionError;
pub use params::{ActionParameters, Content, DispatchRequest};

/// Configure structured logging with JSON format, suitable for `CloudWatch`
/// Logs integration. Call once at host startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
