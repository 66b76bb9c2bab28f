//! HTTP client for the mindmap generation endpoint.

pub mod client;
pub mod error;

pub use client::{MindmapClient, StatusPolicy};
pub use error::{ClientError, SubmitError};
