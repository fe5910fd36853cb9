use bytes::Bytes;

use crate::view_model::UploadViewModel;

pub type RequestId = u64;

/// Lifecycle of the upload form. `Idle` only exists before the first
/// selection; afterwards the machine cycles between the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// File descriptor handed over by the picker: the payload plus the metadata
/// the picker declared for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub media_type: String,
    /// Size the picker declared, in bytes. Validation consults this, not the
    /// payload length.
    pub declared_len: u64,
    pub bytes: Bytes,
}

/// Contact fields extracted from a document. Empty strings until the first
/// successful extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Result of one extraction request, consumed exactly once by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Success(ContactFields),
    Failure(String),
}

/// The single mutable value behind the form. Only `update` writes it; the
/// presentation layer reads snapshots through [`UploadState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadState {
    phase: Phase,
    fields: ContactFields,
    error_message: String,
    last_request_id: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A request is outstanding. While this holds, new selections are dropped.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn view(&self) -> UploadViewModel {
        UploadViewModel {
            phase: self.phase,
            fields: self.fields.clone(),
            error_message: self.error_message.clone(),
            is_busy: self.is_busy(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and resets the
    /// flag. The render loop uses this to coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// Moves into `Loading` and returns the id assigned to the new request.
    pub(crate) fn begin_upload(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.in_flight = Some(request_id);
        self.phase = Phase::Loading;
        self.error_message.clear();
        self.dirty = true;
        request_id
    }

    /// Local rejection before any request is made. Fields stay as they were.
    pub(crate) fn reject(&mut self, message: String) {
        self.phase = Phase::Error;
        self.error_message = message;
        self.dirty = true;
    }

    /// Applies the completion for `request_id`. Completions that do not match
    /// the outstanding request are ignored.
    pub(crate) fn apply_outcome(&mut self, request_id: RequestId, outcome: ExtractionOutcome) {
        if self.in_flight != Some(request_id) {
            return;
        }
        self.in_flight = None;
        match outcome {
            ExtractionOutcome::Success(fields) => {
                self.phase = Phase::Success;
                self.fields = fields;
            }
            ExtractionOutcome::Failure(message) => {
                self.phase = Phase::Error;
                self.error_message = message;
            }
        }
        self.dirty = true;
    }
}
