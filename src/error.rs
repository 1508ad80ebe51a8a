// Typed errors for the export parsing pipeline
use thiserror::Error;

use crate::infrastructure::payload::PAYLOAD_MARKER;

/// Failures while turning a raw export document into an index data set.
///
/// Only parsing can fail; the downstream alignment, filtering, and axis
/// computations degrade gracefully instead of erroring. Messages describe the
/// structural problem without echoing the payload itself.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document never contains the payload marker; most likely the wrong
    /// file was supplied.
    #[error(
        "no embedded index payload found (expected the `{marker}` marker)",
        marker = PAYLOAD_MARKER
    )]
    MissingPayloadMarker,

    /// The marker is present but what follows is not a usable payload.
    #[error("embedded index payload is malformed: {reason}")]
    MalformedPayload { reason: String },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedPayload {
            reason: reason.into(),
        }
    }
}
