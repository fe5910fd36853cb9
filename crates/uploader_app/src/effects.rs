use uploader_core::{ContactFields, Effect, ExtractionOutcome, Msg, SelectedFile};
use uploader_engine::{EngineEvent, EngineHandle, ExtractSettings, ExtractedFields, FileUpload};
use uploader_logging::{uploader_info, uploader_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ExtractSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitFile { request_id, file } => {
                    uploader_info!(
                        "SubmitFile request_id={} file={} declared_len={}",
                        request_id,
                        file.file_name,
                        file.declared_len
                    );
                    self.engine.submit(request_id, to_upload(file));
                }
            }
        }
    }

    /// Blocks until the outstanding request resolves.
    pub fn recv_event(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn to_upload(file: SelectedFile) -> FileUpload {
    FileUpload {
        file_name: file.file_name,
        media_type: file.media_type,
        bytes: file.bytes,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Finished { request_id, result } => {
            let outcome = match result {
                Ok(fields) => ExtractionOutcome::Success(to_fields(fields)),
                Err(err) => {
                    uploader_warn!("Request {} failed: {}", request_id, err.kind);
                    ExtractionOutcome::Failure(err.message)
                }
            };
            Msg::ExtractionFinished {
                request_id,
                outcome,
            }
        }
    }
}

fn to_fields(fields: ExtractedFields) -> ContactFields {
    ContactFields {
        name: fields.name,
        phone: fields.phone,
        address: fields.address,
    }
}
