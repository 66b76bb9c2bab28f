use mindmap_common::{MindmapRequest, MindmapResult, GENERATE_MINDMAP_PATH};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error::{ClientError, SubmitError};

/// How the HTTP status of a response is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Any response whose body parses as JSON is a success, whatever its status.
    #[default]
    Lenient,
    /// Non-2xx responses fail with [`SubmitError::Status`].
    Strict,
}

impl StatusPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

#[derive(Debug, Clone)]
pub struct MindmapClient {
    client: reqwest::Client,
    endpoint: Url,
    status_policy: StatusPolicy,
}

impl MindmapClient {
    pub fn new(base_url: &str, status_policy: StatusPolicy) -> Result<Self, ClientError> {
        Self::with_endpoint(base_url, GENERATE_MINDMAP_PATH, status_policy)
    }

    /// The endpoint is resolved against `base_url` the way a browser resolves
    /// a relative URL, so an absolute path replaces any path on the base.
    pub fn with_endpoint(
        base_url: &str,
        endpoint: &str,
        status_policy: StatusPolicy,
    ) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let endpoint = base.join(endpoint).map_err(|source| ClientError::InvalidUrl {
            url: endpoint.to_string(),
            source,
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("mindmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            endpoint,
            status_policy,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy
    }

    /// Post one request and parse whatever JSON comes back.
    #[tracing::instrument(skip(self, request), fields(url = %self.endpoint))]
    pub async fn submit(&self, request: &MindmapRequest) -> Result<MindmapResult, SubmitError> {
        tracing::debug!(?request, "posting mindmap request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "mindmap response received");

        if self.status_policy == StatusPolicy::Strict && !status.is_success() {
            let body = response.text().await?;
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let result = serde_json::from_slice(&bytes)?;
        Ok(result)
    }
}
