mod common;

use common::{hub, CannedProvider};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use toolhub_app::commands::{failure_line, run_once};
use toolhub_app::HubError;
use toolhub_core::{CompletionStatus, InferenceOutput, SubmitRefusal};

#[tokio::test]
async fn test_sentiment_renders_confidence() {
    let provider = Arc::new(CannedProvider::default());
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(provider, &dir);

    hub.toggle("sentiment").unwrap();
    hub.set_input("I love this");
    assert_eq!(hub.submit().await.unwrap(), CompletionStatus::Applied);

    let rendered = hub.rendered_result().unwrap().to_string();
    assert_eq!(rendered, "POSITIVE\nConfidence: 87%");
    assert!(!hub.state().is_loading());
    assert_eq!(hub.metrics().completions, 1);
}

#[test]
fn test_toggle_validates_and_deselects() {
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(Arc::new(CannedProvider::default()), &dir);

    assert_eq!(
        hub.toggle("video-generation").unwrap_err(),
        HubError::UnknownTool("video-generation".to_string())
    );
    assert_eq!(hub.toggle("translation").unwrap().unwrap().id, "translation");
    assert!(hub.toggle("translation").unwrap().is_none());
    assert!(hub.state().active_tool().is_none());
}

#[tokio::test]
async fn test_switching_tools_clears_input_and_result() {
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(Arc::new(CannedProvider::default()), &dir);

    hub.toggle("translation").unwrap();
    hub.set_input("Hello");
    hub.submit().await.unwrap();
    assert!(hub.state().last_result().is_some());

    hub.toggle("image-caption").unwrap();
    assert!(hub.state().last_result().is_none());
    assert_eq!(hub.state().input_text(), "");
}

#[tokio::test]
async fn test_image_tool_reads_image_field() {
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(Arc::new(CannedProvider::default()), &dir);

    hub.toggle("image-classification").unwrap();
    hub.set_input("https://example.com/cat.jpg");
    assert_eq!(hub.state().input_image_url(), "https://example.com/cat.jpg");
    assert_eq!(hub.state().input_text(), "");

    hub.submit().await.unwrap();
    assert_eq!(
        hub.rendered_result().unwrap().to_string(),
        "tabby cat\nConfidence: 42%"
    );
}

#[tokio::test]
async fn test_empty_input_is_refused_without_call() {
    let provider = Arc::new(CannedProvider::default());
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(provider.clone(), &dir);

    assert_eq!(hub.submit().await.unwrap_err(), SubmitRefusal::NoActiveTool);

    hub.toggle("text-generation").unwrap();
    assert_eq!(hub.submit().await.unwrap_err(), SubmitRefusal::EmptyInput);
    assert_eq!(provider.call_count(), 0);
    assert_eq!(hub.metrics().submissions, 0);
}

#[tokio::test]
async fn test_unknown_tool_leaves_result_unchanged() {
    let provider = Arc::new(CannedProvider::default());
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(provider.clone(), &dir);

    hub.select("video-generation");
    hub.set_input("a cat surfing");
    assert_eq!(hub.submit().await.unwrap(), CompletionStatus::NoResult);

    assert!(hub.state().last_result().is_none());
    assert!(!hub.state().is_loading());
    assert_eq!(provider.call_count(), 0);
    assert_eq!(hub.metrics().unknown_tools, 1);
}

#[tokio::test]
async fn test_failure_keeps_previous_result() {
    let provider = Arc::new(CannedProvider::default());
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(provider.clone(), &dir);

    hub.toggle("translation").unwrap();
    hub.set_input("Hello");
    hub.submit().await.unwrap();

    provider.fail.store(true, Ordering::SeqCst);
    assert_eq!(hub.submit().await.unwrap(), CompletionStatus::Failed);

    assert!(!hub.state().is_loading());
    assert_eq!(
        hub.state().last_result().and_then(InferenceOutput::as_text),
        Some("Bonjour")
    );
    assert_eq!(hub.metrics().failures, 1);
}

#[tokio::test]
async fn test_completion_after_tool_change_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(Arc::new(CannedProvider::default()), &dir);

    hub.toggle("sentiment").unwrap();
    hub.set_input("great");
    let ticket = hub.begin().unwrap();
    assert_eq!(hub.begin().unwrap_err(), SubmitRefusal::InFlight);

    hub.toggle("translation").unwrap();
    let outcome = hub.dispatcher().invoke(&ticket.tool_id, &ticket.input).await;
    assert_eq!(hub.finish(&ticket, outcome), CompletionStatus::Stale);

    assert!(hub.state().last_result().is_none());
    assert_eq!(hub.metrics().stale_discarded, 1);
}

#[tokio::test]
async fn test_new_binary_result_releases_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(Arc::new(CannedProvider::default()), &dir);

    hub.toggle("text-to-speech").unwrap();
    hub.set_input("Hello");
    hub.submit().await.unwrap();
    let first = hub
        .state()
        .last_result()
        .and_then(InferenceOutput::as_binary)
        .unwrap()
        .path()
        .to_path_buf();
    assert!(first.exists());

    hub.submit().await.unwrap();
    let second = hub
        .state()
        .last_result()
        .and_then(InferenceOutput::as_binary)
        .unwrap()
        .path()
        .to_path_buf();

    assert_ne!(first, second);
    assert!(!first.exists());
    assert!(second.exists());
    assert!(hub.rendered_result().unwrap().to_string().starts_with("🔊 Audio"));

    hub.toggle("text-to-speech").unwrap();
    assert!(!second.exists());
}

#[tokio::test]
async fn test_run_once_failure_reports_tool_once() {
    let provider = Arc::new(CannedProvider::default());
    provider.fail.store(true, Ordering::SeqCst);
    let dir = tempfile::tempdir().unwrap();
    let mut hub = hub(provider, &dir);

    let err = run_once(&mut hub, "translation", "Hello").await.unwrap_err();
    let line = failure_line(&err);

    assert!(line.starts_with("❌ "));
    assert_eq!(line.matches("translation").count(), 1);
    assert_eq!(line.lines().count(), 1);
}
