use mindmap_client::SubmitError;
use mindmap_common::MindmapResult;

/// Destination for the outcome of a submission. Exactly one method is called
/// once per submission that resolves.
pub trait OutcomeSink: Send + Sync {
    fn on_success(&self, submission_id: &str, result: &MindmapResult);

    fn on_failure(&self, submission_id: &str, error: &SubmitError);
}

/// Logs outcomes as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn on_success(&self, submission_id: &str, result: &MindmapResult) {
        tracing::info!(submission_id, %result, "mindmap generated");
    }

    fn on_failure(&self, submission_id: &str, error: &SubmitError) {
        tracing::error!(submission_id, %error, "mindmap request failed");
    }
}
