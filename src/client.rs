use async_trait::async_trait;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_sqs::error::{DisplayErrorContext, SdkError};

use crate::errors::ActionError;
use crate::params::DispatchRequest;
use crate::secrets::AwsCredentials;

/// How a failed send is classified before it is mapped into the action's
/// error taxonomy: either the queueing service itself reported the failure,
/// or something else broke in transit.
#[derive(Debug)]
pub enum SendFailure {
    Service(String),
    Other(String),
}

/// One-shot message sender bound to a region and a credential pair. A sender
/// lives for a single dispatch and is dropped before the pipeline returns;
/// instances are never reused across invocations.
#[async_trait]
pub trait QueueSender: Send + Sync {
    /// Transmit the request and return the service-assigned message id.
    async fn send(&self, request: &DispatchRequest) -> Result<String, SendFailure>;
}

/// Builds a sender for one invocation. Injected so tests can observe the
/// construction boundary: no sender may exist before credentials are
/// verified.
pub trait SenderFactory: Send + Sync {
    /// # Errors
    ///
    /// Returns `ActionError::ClientInit` if the region string is not a
    /// recognized region identifier or the client cannot be constructed.
    fn make_sender(
        &self,
        region: &str,
        credentials: &AwsCredentials,
    ) -> Result<Box<dyn QueueSender>, ActionError>;
}

/// Production factory producing real SQS clients. Construction performs no
/// network I/O; the connection is established on first use.
pub struct SqsSenderFactory;

impl SenderFactory for SqsSenderFactory {
    fn make_sender(
        &self,
        region: &str,
        credentials: &AwsCredentials,
    ) -> Result<Box<dyn QueueSender>, ActionError> {
        validate_region(region)?;

        let provider = Credentials::new(
            credentials.access_key.clone(),
            credentials.secret_key.clone(),
            None,
            None,
            "sqs-message-action",
        );
        let config = aws_sdk_sqs::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(provider)
            .build();

        Ok(Box::new(SqsQueueSender {
            client: SqsClient::from_conf(config),
        }))
    }
}

// Region identifiers look like "eu-north-1": lowercase segments joined by
// hyphens, ending in a digit. The SDK accepts any string, so the shape check
// lives here.
fn validate_region(region: &str) -> Result<(), ActionError> {
    let well_formed = region.split('-').count() >= 3
        && region.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
        && region.ends_with(|c: char| c.is_ascii_digit());

    if well_formed {
        Ok(())
    } else {
        Err(ActionError::ClientInit {
            region: region.to_string(),
            message: "unrecognized AWS region".to_string(),
        })
    }
}

struct SqsQueueSender {
    client: SqsClient,
}

#[async_trait]
impl QueueSender for SqsQueueSender {
    async fn send(&self, request: &DispatchRequest) -> Result<String, SendFailure> {
        let resp = self
            .client
            .send_message()
            .queue_url(&request.queue_url)
            .message_body(&request.body)
            .delay_seconds(request.delay_seconds)
            .send()
            .await
            .map_err(|e| match e {
                SdkError::ServiceError(_) => {
                    SendFailure::Service(format!("{}", DisplayErrorContext(&e)))
                }
                other => SendFailure::Other(format!("{}", DisplayErrorContext(&other))),
            })?;

        resp.message_id()
            .map(str::to_string)
            .ok_or_else(|| SendFailure::Other("SQS response carried no message id".to_string()))
    }
}
