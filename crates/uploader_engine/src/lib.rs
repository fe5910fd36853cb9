//! Uploader engine: extraction requests and their execution.
mod engine;
mod extract;
mod types;

pub use engine::EngineHandle;
pub use extract::{ExtractSettings, ExtractionClient, ReqwestExtractionClient, DEFAULT_ENDPOINT};
pub use types::{EngineEvent, ExtractError, ExtractedFields, FailureKind, FileUpload, RequestId};
