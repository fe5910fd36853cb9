use std::sync::Once;

use bytes::Bytes;
use uploader_core::{
    update, ContactFields, Effect, ExtractionOutcome, Msg, Phase, SelectedFile, UploadState,
    MAX_UPLOAD_BYTES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(uploader_logging::initialize_for_tests);
}

fn pdf_file(declared_len: u64) -> SelectedFile {
    SelectedFile {
        file_name: "resume.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        declared_len,
        bytes: Bytes::from_static(b"%PDF-1.4"),
    }
}

#[test]
fn oversized_selection_is_rejected_locally() {
    init_logging();
    let state = UploadState::new();

    let (mut next, effects) = update(state, Msg::FileSelected(pdf_file(MAX_UPLOAD_BYTES + 1)));
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, Phase::Error);
    assert_eq!(view.error_message, "File size exceeds 10MB limit");
    assert_eq!(view.fields, ContactFields::default());
    assert!(next.consume_dirty());
}

#[test]
fn selection_at_limit_is_accepted() {
    init_logging();
    let state = UploadState::new();

    let (next, effects) = update(state, Msg::FileSelected(pdf_file(MAX_UPLOAD_BYTES)));

    assert_eq!(next.view().phase, Phase::Loading);
    assert_eq!(effects.len(), 1);
}

#[test]
fn valid_selection_starts_upload_and_clears_error() {
    init_logging();
    let state = UploadState::new();

    // A rejected selection first, so there is an error message to clear.
    let (state, _effects) = update(state, Msg::FileSelected(pdf_file(MAX_UPLOAD_BYTES + 1)));
    assert_eq!(state.view().phase, Phase::Error);

    let file = pdf_file(1024);
    let (mut next, effects) = update(state, Msg::FileSelected(file.clone()));
    let view = next.view();

    assert_eq!(view.phase, Phase::Loading);
    assert!(view.is_busy);
    assert!(view.error_message.is_empty());
    assert_eq!(
        effects,
        vec![Effect::SubmitFile {
            request_id: 1,
            file,
        }]
    );
    assert!(next.consume_dirty());
}

#[test]
fn selection_while_loading_is_dropped() {
    init_logging();
    let state = UploadState::new();
    let (mut state, effects) = update(state, Msg::FileSelected(pdf_file(1024)));
    assert_eq!(effects.len(), 1);
    assert!(state.consume_dirty());

    let before = state.clone();
    let (mut next, effects) = update(state, Msg::FileSelected(pdf_file(2048)));

    assert_eq!(next, before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn rejection_keeps_previously_extracted_fields() {
    init_logging();
    let state = UploadState::new();
    let (state, _effects) = update(state, Msg::FileSelected(pdf_file(1024)));
    let fields = ContactFields {
        name: "Ada".to_string(),
        phone: "555-0100".to_string(),
        address: "12 Engine St".to_string(),
    };
    let (state, _effects) = update(
        state,
        Msg::ExtractionFinished {
            request_id: 1,
            outcome: ExtractionOutcome::Success(fields.clone()),
        },
    );
    assert_eq!(state.view().phase, Phase::Success);

    let (next, effects) = update(state, Msg::FileSelected(pdf_file(MAX_UPLOAD_BYTES + 1)));
    let view = next.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, Phase::Error);
    assert_eq!(view.fields, fields);
}
