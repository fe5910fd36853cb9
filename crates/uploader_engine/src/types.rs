use std::fmt;

use bytes::Bytes;
use thiserror::Error;

pub type RequestId = u64;

/// Wire payload for one extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Bytes,
}

/// Fields the service extracted. Members the service omitted are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedFields {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Finished {
        request_id: RequestId,
        result: Result<ExtractedFields, ExtractError>,
    },
}

/// Failed extraction request. `message` is the text the form shows;
/// `kind` carries the classification for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractError {
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Service answered 2xx but reported `success: false`.
    ServiceRejected,
    HttpStatus(u16),
    MalformedResponse,
    Network,
    /// The request could not be constructed locally.
    InvalidRequest,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::ServiceRejected => write!(f, "service rejected"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
        }
    }
}
