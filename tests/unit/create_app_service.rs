//! Unit tests for the create-app service — pipeline scenarios against
//! mocked ports.

#![allow(clippy::expect_used)]

use std::time::Duration;

use serde_json::json;

use tapis_app_action::application::ports::DEFAULT_BASE_PATH;
use tapis_app_action::application::services::create_app::{
    ResolvedInputs, create_app, resolve_inputs,
};
use tapis_app_action::domain::CONTAINER_IMAGE_FIELD;

use crate::mocks::{
    CreatorFailing, CreatorOk, CreatorUnexpected, MapInputs, ReaderFailing, ReaderReturning,
    RecordingLog, RecordingOutputs, default_inputs, valid_spec_doc,
};

fn resolved(spec_path: &str, image_tags: &str) -> ResolvedInputs {
    ResolvedInputs {
        spec_path: spec_path.to_owned(),
        token: "test-token".to_owned(),
        base_path: DEFAULT_BASE_PATH.to_owned(),
        image_tags: image_tags.to_owned(),
        delay: None,
    }
}

// ── Input resolution ──────────────────────────────────────────────────────────

#[test]
fn test_resolve_inputs_defaults_base_path() {
    let opts = resolve_inputs(&default_inputs()).expect("inputs resolve");
    assert_eq!(opts.base_path, DEFAULT_BASE_PATH);
    assert_eq!(opts.spec_path, "path/to/app-spec.json");
    assert_eq!(opts.token, "test-token");
    assert_eq!(opts.delay, None);
}

#[test]
fn test_resolve_inputs_honors_base_path_override() {
    let inputs = MapInputs::new(&[
        ("TAPIS_TOKEN", "test-token"),
        ("TAPIS_BASE_PATH", "https://dev.tapis.example/v3"),
        ("docker_image_tags", "v1.0"),
    ]);
    let opts = resolve_inputs(&inputs).expect("inputs resolve");
    assert_eq!(opts.base_path, "https://dev.tapis.example/v3");
}

#[test]
fn test_missing_token_fails_with_runner_wording() {
    let inputs = MapInputs::new(&[
        ("tapis_app_spec", "path/to/app-spec.json"),
        ("docker_image_tags", "v1.0"),
    ]);
    let err = resolve_inputs(&inputs).expect_err("token is required");
    assert_eq!(
        err.to_string(),
        "Input required and not supplied: TAPIS_TOKEN"
    );
}

#[test]
fn test_missing_image_tags_fails_with_runner_wording() {
    let inputs = MapInputs::new(&[
        ("tapis_app_spec", "path/to/app-spec.json"),
        ("TAPIS_TOKEN", "test-token"),
    ]);
    let err = resolve_inputs(&inputs).expect_err("tags are required");
    assert_eq!(
        err.to_string(),
        "Input required and not supplied: docker_image_tags"
    );
}

#[test]
fn test_non_numeric_delay_is_rejected() {
    let inputs = MapInputs::new(&[
        ("tapis_app_spec", "path/to/app-spec.json"),
        ("TAPIS_TOKEN", "test-token"),
        ("docker_image_tags", "v1.0"),
        ("milliseconds", "this is not a number"),
    ]);
    let err = resolve_inputs(&inputs).expect_err("delay must be numeric");
    assert_eq!(err.to_string(), "milliseconds is not a number");
}

#[test]
fn test_numeric_delay_is_parsed() {
    let inputs = MapInputs::new(&[
        ("tapis_app_spec", "path/to/app-spec.json"),
        ("TAPIS_TOKEN", "test-token"),
        ("docker_image_tags", "v1.0"),
        ("milliseconds", "500"),
    ]);
    let opts = resolve_inputs(&inputs).expect("inputs resolve");
    assert_eq!(opts.delay, Some(Duration::from_millis(500)));
}

// ── Pipeline scenarios ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_successful_run_publishes_outputs() {
    let reader = ReaderReturning::new(valid_spec_doc());
    let creator = CreatorOk::new(json!({
        "result": {"url": "tapis://apps/test-app/1.0.0"},
        "status": "success"
    }));
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    create_app(
        &resolved("path/to/app-spec.json", "v1.0,latest"),
        &reader,
        &creator,
        &outputs,
        &log,
    )
    .await
    .expect("run should succeed");

    assert_eq!(
        reader.paths.lock().expect("lock").as_slice(),
        ["path/to/app-spec.json"]
    );

    let published = outputs.0.lock().expect("lock");
    assert_eq!(published.len(), 2);
    assert_eq!(published[0].0, "time");
    let time = &published[0].1;
    assert_eq!(time.len(), 8, "HH:MM:SS, got {time}");
    assert_eq!(&time[2..3], ":");
    assert_eq!(&time[5..6], ":");
    assert_eq!(published[1].0, "app_result");
    assert!(published[1].1.contains("tapis://apps/test-app/1.0.0"));

    assert_eq!(
        log.info_lines.lock().expect("lock").as_slice(),
        ["Successfully created Tapis app with image: v1.0"]
    );
}

#[tokio::test]
async fn test_first_tag_becomes_container_image() {
    let reader = ReaderReturning::new(valid_spec_doc());
    let creator = CreatorOk::new(json!({"status": "success"}));
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    create_app(
        &resolved("spec.json", "v2.1.0,stable,latest"),
        &reader,
        &creator,
        &outputs,
        &log,
    )
    .await
    .expect("run should succeed");

    let submitted = creator.submitted.lock().expect("lock");
    assert_eq!(submitted.len(), 1);
    assert_eq!(
        submitted[0].get(CONTAINER_IMAGE_FIELD),
        Some(&json!("v2.1.0"))
    );
    // The original document's fields ride along unchanged.
    assert_eq!(submitted[0].get("id"), Some(&json!("test-app")));
    assert_eq!(submitted[0].get("enabled"), Some(&json!(true)));
}

#[tokio::test]
async fn test_invalid_spec_fails_without_submission() {
    let reader = ReaderReturning::new(json!({
        "name": "test-app",
        "non_property": "non_property"
    }));
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    let err = create_app(
        &resolved("spec.json", "v1.0"),
        &reader,
        &CreatorUnexpected,
        &outputs,
        &log,
    )
    .await
    .expect_err("spec is invalid");

    assert_eq!(err.to_string(), "File is not a valid Tapis app spec");
    assert!(outputs.0.lock().expect("lock").is_empty());
    // The specific rejection reason is kept observable in the debug stream.
    let debug = log.debug_lines.lock().expect("lock");
    assert!(debug.iter().any(|line| line.contains("'id' is missing")));
}

#[tokio::test]
async fn test_read_failure_propagates_message_verbatim() {
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    let err = create_app(
        &resolved("path/to/app-spec.json", "v1.0"),
        &ReaderFailing("File path/to/app-spec.json does not exist"),
        &CreatorUnexpected,
        &outputs,
        &log,
    )
    .await
    .expect_err("read fails");

    assert_eq!(
        err.to_string(),
        "File path/to/app-spec.json does not exist"
    );
    assert!(outputs.0.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn test_remote_error_message_surfaces() {
    let reader = ReaderReturning::new(valid_spec_doc());
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    let err = create_app(
        &resolved("spec.json", "v1.0"),
        &reader,
        &CreatorFailing("quota exceeded"),
        &outputs,
        &log,
    )
    .await
    .expect_err("submission fails");

    assert_eq!(err.to_string(), "quota exceeded");
    assert!(outputs.0.lock().expect("lock").is_empty());
    assert!(log.info_lines.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn test_blank_tag_list_fails_before_submission() {
    let reader = ReaderReturning::new(valid_spec_doc());
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    let err = create_app(
        &resolved("spec.json", " , "),
        &reader,
        &CreatorUnexpected,
        &outputs,
        &log,
    )
    .await
    .expect_err("no usable tag");

    assert_eq!(err.to_string(), "No Docker image tags provided");
}

#[tokio::test]
async fn test_delay_is_logged_then_run_proceeds() {
    let reader = ReaderReturning::new(valid_spec_doc());
    let creator = CreatorOk::new(json!({"status": "success"}));
    let outputs = RecordingOutputs::default();
    let log = RecordingLog::default();

    let mut opts = resolved("spec.json", "v1.0");
    opts.delay = Some(Duration::from_millis(5));

    create_app(&opts, &reader, &creator, &outputs, &log)
        .await
        .expect("run should succeed");

    let debug = log.debug_lines.lock().expect("lock");
    assert!(debug.contains(&"Waiting 5 milliseconds ...".to_owned()));
    assert_eq!(creator.submitted.lock().expect("lock").len(), 1);
}
