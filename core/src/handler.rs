use std::sync::Arc;

use mindmap_common::{MindmapRequest, GENERATE_MINDMAP_ID};
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{FormError, Result};
use crate::form::{read_request, FormSource};
use crate::sink::OutcomeSink;
use crate::submitter::Submitter;

/// Turns each trigger into one independent submission.
///
/// Submissions are never cancelled, retried or ordered relative to each
/// other. A submission that never resolves never reaches the sink.
#[derive(Clone)]
pub struct SubmissionHandler {
    form: Arc<dyn FormSource>,
    submitter: Arc<dyn Submitter>,
    sink: Arc<dyn OutcomeSink>,
}

impl SubmissionHandler {
    /// Attach to a form. The trigger element must exist; input elements are
    /// looked up on every trigger.
    pub fn bind(
        form: Arc<dyn FormSource>,
        submitter: Arc<dyn Submitter>,
        sink: Arc<dyn OutcomeSink>,
    ) -> Result<Self> {
        if !form.contains(GENERATE_MINDMAP_ID) {
            return Err(FormError::MissingElement {
                id: GENERATE_MINDMAP_ID.to_string(),
            });
        }
        tracing::debug!("bound submission handler to #{GENERATE_MINDMAP_ID}");

        Ok(Self {
            form,
            submitter,
            sink,
        })
    }

    /// Read the form and start a submission. Returns as soon as the request is
    /// spawned; the handle resolves once the sink has been called.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self) -> Result<JoinHandle<()>> {
        let request = match read_request(self.form.as_ref()) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "cannot read form, nothing submitted");
                return Err(e);
            }
        };
        Ok(self.dispatch(request))
    }

    /// Submit an already built payload.
    pub fn dispatch(&self, request: MindmapRequest) -> JoinHandle<()> {
        let submission_id = Uuid::new_v4().to_string();
        let submitter = Arc::clone(&self.submitter);
        let sink = Arc::clone(&self.sink);

        let span = tracing::info_span!("submission", id = %submission_id);
        tracing::debug!(parent: &span, "submission triggered");

        tokio::spawn(
            async move {
                match submitter.submit(&request).await {
                    Ok(result) => sink.on_success(&submission_id, &result),
                    Err(error) => sink.on_failure(&submission_id, &error),
                }
            }
            .instrument(span),
        )
    }
}
