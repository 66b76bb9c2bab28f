use mindmap_client::SubmitError;
use mindmap_common::MindmapResult;
use mindmap_core::OutcomeSink;

/// Results go to stdout as pretty JSON, failures to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutcomeSink for ConsoleSink {
    fn on_success(&self, submission_id: &str, result: &MindmapResult) {
        tracing::info!(submission_id, "mindmap generated");
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{result}"),
        }
    }

    fn on_failure(&self, submission_id: &str, error: &SubmitError) {
        tracing::error!(submission_id, %error, "mindmap request failed");
        eprintln!("Error: {error}");
    }
}
