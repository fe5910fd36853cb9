use crate::{validate, Effect, Msg, UploadState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: UploadState, msg: Msg) -> (UploadState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileSelected(file) => {
            // A selection made while a request is outstanding is dropped, not
            // queued. The presentation layer disables intake while busy; this
            // guard holds for callers that do not honor `is_busy`.
            if state.is_busy() {
                return (state, Vec::new());
            }
            match validate(&file) {
                Err(reason) => {
                    state.reject(reason.to_string());
                    Vec::new()
                }
                Ok(()) => {
                    let request_id = state.begin_upload();
                    vec![Effect::SubmitFile { request_id, file }]
                }
            }
        }
        Msg::ExtractionFinished {
            request_id,
            outcome,
        } => {
            state.apply_outcome(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
