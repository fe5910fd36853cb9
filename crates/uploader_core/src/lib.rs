//! Uploader core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{ContactFields, ExtractionOutcome, Phase, RequestId, SelectedFile, UploadState};
pub use update::update;
pub use validate::{validate, RejectReason, MAX_UPLOAD_BYTES};
pub use view_model::UploadViewModel;
