//! Static metadata the host uses to present the action: display name,
//! operator help text, and the configuration parameters it accepts.

use crate::params::{PARAM_AWS_REGION, PARAM_DELAY_SECONDS, PARAM_MESSAGE_BODY, PARAM_QUEUE_URL};

/// Display name shown in the host's workflow editor.
pub const NAME: &str = "Send Message to AWS SQS";

/// Operator-facing help text.
pub const HOW_TO: &str = "This action sends a message to an AWS SQS queue. You need to specify \
     the queue URL, message body and AWS region. You can optionally specify a delay in seconds \
     for the message delivery.";

/// One configurable parameter of the action, as declared to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// The action's parameter declarations, in display order.
pub fn parameter_definitions() -> Vec<ParameterDefinition> {
    vec![
        ParameterDefinition {
            key: PARAM_QUEUE_URL,
            label: "Queue URL",
            description: "The complete URL of the SQS queue",
            required: true,
        },
        ParameterDefinition {
            key: PARAM_MESSAGE_BODY,
            label: "Message Body",
            description: "The content of the message to send. Leave empty to send the \
                 triggering content's field map.",
            required: false,
        },
        ParameterDefinition {
            key: PARAM_AWS_REGION,
            label: "AWS Region",
            description: "eu-north-1",
            required: true,
        },
        ParameterDefinition {
            key: PARAM_DELAY_SECONDS,
            label: "Delay Seconds (0-900)",
            description: "0",
            required: false,
        },
    ]
}
