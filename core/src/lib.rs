//! Form submission handling: reads the course form on each trigger, posts it,
//! and routes the outcome to a sink.

pub mod error;
pub mod form;
pub mod handler;
pub mod sink;
pub mod submitter;

pub use error::FormError;
pub use form::{read_request, Form, FormSource};
pub use handler::SubmissionHandler;
pub use sink::{OutcomeSink, TracingSink};
pub use submitter::Submitter;
