mod common;

use common::{hub, CannedProvider, ScriptedInterface};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use toolhub_app::InteractiveSession;

async fn run_script(provider: Arc<CannedProvider>, lines: &[&str]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let interface = ScriptedInterface::new(lines);
    let mut session = InteractiveSession::new(hub(provider, &dir), interface.clone());
    session.run().await.unwrap();
    interface.transcript()
}

#[tokio::test]
async fn test_submission_result_is_shown_before_exit() {
    let provider = Arc::new(CannedProvider::default());
    let transcript = run_script(provider.clone(), &["use sentiment", "I love this"]).await;

    assert!(transcript.contains("🔧 Sentiment Analysis"));
    assert!(transcript.contains("POSITIVE\nConfidence: 87%"));
    assert!(transcript.ends_with("👋 Goodbye!"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_input_without_tool_is_rejected() {
    let provider = Arc::new(CannedProvider::default());
    let transcript = run_script(provider.clone(), &["hello there", "exit"]).await;

    assert!(transcript.contains("Select a tool first"));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_tool_and_category() {
    let transcript = run_script(
        Arc::new(CannedProvider::default()),
        &["use video-generation", "tools music", "quit"],
    )
    .await;

    assert!(transcript.contains("Unknown tool: video-generation"));
    assert!(transcript.contains("Unknown category: music"));
}

#[tokio::test]
async fn test_tools_filter_lists_category() {
    let transcript = run_script(
        Arc::new(CannedProvider::default()),
        &["tools audio", "categories", "exit"],
    )
    .await;

    assert!(transcript.contains("text-to-speech"));
    assert!(!transcript.contains("image-caption"));
    assert!(transcript.contains("All Models"));
}

#[tokio::test]
async fn test_failure_reports_without_result() {
    let provider = Arc::new(CannedProvider::default());
    provider.fail.store(true, Ordering::SeqCst);
    let transcript = run_script(provider, &["use translation", "Hello"]).await;

    assert!(transcript.contains("❌ Request failed"));
    assert!(!transcript.contains("Bonjour"));
}

#[tokio::test]
async fn test_switching_tool_discards_pending_result() {
    let provider = Arc::new(CannedProvider::default());
    provider.hang.store(true, Ordering::SeqCst);
    let transcript = run_script(
        provider,
        &["use sentiment", "I love this", "use translation", "status"],
    )
    .await;

    assert!(!transcript.contains("Confidence"));
    assert!(transcript.contains("Active tool: Translation (translation)"));
    assert!(transcript.contains("Loading: false"));
    assert!(transcript.contains("Success rate: 100%"));
}

#[tokio::test]
async fn test_result_before_any_submission() {
    let transcript = run_script(
        Arc::new(CannedProvider::default()),
        &["result", "use translation"],
    )
    .await;
    assert!(transcript.contains("No result yet"));
}

#[tokio::test]
async fn test_input_starting_with_command_word_is_submitted() {
    let provider = Arc::new(CannedProvider::default());
    let transcript = run_script(
        provider.clone(),
        &["use text-generation", "exit strategy for startups"],
    )
    .await;

    assert_eq!(provider.call_count(), 1);
    assert!(transcript.contains("exit strategy for startups and then"));
    assert!(transcript.ends_with("👋 Goodbye!"));
}

#[tokio::test]
async fn test_clear_with_text_is_not_a_command() {
    let provider = Arc::new(CannedProvider::default());
    let transcript = run_script(provider.clone(), &["use text-generation", "clear skies ahead"]).await;

    assert_eq!(provider.call_count(), 1);
    assert!(!transcript.contains("\x1B[2J"));
    assert!(transcript.contains("clear skies ahead and then"));
}

#[tokio::test]
async fn test_send_submits_text_that_starts_with_use() {
    let provider = Arc::new(CannedProvider::default());
    let transcript = run_script(provider.clone(), &["use text-generation", "send use the force"]).await;

    assert_eq!(provider.call_count(), 1);
    assert!(transcript.contains("use the force and then"));
    assert!(!transcript.contains("Unknown tool"));
}

#[tokio::test]
async fn test_use_shows_model() {
    let transcript = run_script(Arc::new(CannedProvider::default()), &["use translation"]).await;
    assert!(transcript.contains("Model: Helsinki-NLP/opus-mt-en-fr"));
}
