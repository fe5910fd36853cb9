use crate::{ContactFields, Phase};

/// Read-only projection of [`crate::UploadState`] for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadViewModel {
    pub phase: Phase,
    pub fields: ContactFields,
    /// Non-empty exactly when `phase` is [`Phase::Error`].
    pub error_message: String,
    /// A request is outstanding; consumers must keep the file input disabled.
    pub is_busy: bool,
    pub dirty: bool,
}
