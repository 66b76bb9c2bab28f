use async_trait::async_trait;
use mindmap_client::{MindmapClient, SubmitError};
use mindmap_common::{MindmapRequest, MindmapResult};

/// Sends one payload and resolves to the server's JSON.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &MindmapRequest) -> Result<MindmapResult, SubmitError>;
}

#[async_trait]
impl Submitter for MindmapClient {
    async fn submit(&self, request: &MindmapRequest) -> Result<MindmapResult, SubmitError> {
        MindmapClient::submit(self, request).await
    }
}
