use sqs_message_action::definition::{parameter_definitions, HOW_TO, NAME};

#[test]
fn test_definition_declares_the_four_parameters_in_order() {
    let defs = parameter_definitions();
    let keys: Vec<&str> = defs.iter().map(|d| d.key).collect();
    assert_eq!(
        keys,
        vec!["queueUrl", "messageBody", "awsRegion", "delaySeconds"]
    );
}

#[test]
fn test_only_queue_url_and_region_are_required() {
    for def in parameter_definitions() {
        let expect_required = matches!(def.key, "queueUrl" | "awsRegion");
        assert_eq!(def.required, expect_required, "parameter {}", def.key);
    }
}

#[test]
fn test_name_and_how_to_are_presentable() {
    assert_eq!(NAME, "Send Message to AWS SQS");
    assert!(HOW_TO.contains("SQS queue"));
    assert!(HOW_TO.contains("delay"));
}
