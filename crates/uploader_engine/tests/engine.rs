use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde_json::json;
use uploader_engine::{
    EngineEvent, EngineHandle, ExtractError, ExtractSettings, ExtractedFields, ExtractionClient,
    FailureKind, FileUpload,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn upload(name: &str) -> FileUpload {
    FileUpload {
        file_name: name.to_string(),
        media_type: "application/pdf".to_string(),
        bytes: Bytes::from_static(b"%PDF-1.4"),
    }
}

/// Succeeds with the uploaded file name echoed back as the contact name.
struct EchoClient;

#[async_trait::async_trait]
impl ExtractionClient for EchoClient {
    async fn extract(&self, file: FileUpload) -> Result<ExtractedFields, ExtractError> {
        Ok(ExtractedFields {
            name: file.file_name,
            ..ExtractedFields::default()
        })
    }
}

struct FailingClient;

#[async_trait::async_trait]
impl ExtractionClient for FailingClient {
    async fn extract(&self, _file: FileUpload) -> Result<ExtractedFields, ExtractError> {
        Err(ExtractError {
            kind: FailureKind::Network,
            message: "Server Error".to_string(),
        })
    }
}

#[test]
fn submissions_resolve_in_order() {
    let engine = EngineHandle::with_client(Arc::new(EchoClient));

    engine.submit(1, upload("first.pdf"));
    engine.submit(2, upload("second.pdf"));

    let first = engine.recv().expect("first event");
    let second = engine.recv().expect("second event");

    match first {
        EngineEvent::Finished { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.expect("ok").name, "first.pdf");
        }
    }
    match second {
        EngineEvent::Finished { request_id, result } => {
            assert_eq!(request_id, 2);
            assert_eq!(result.expect("ok").name, "second.pdf");
        }
    }
}

#[test]
fn failures_are_reported_as_events() {
    let engine = EngineHandle::with_client(Arc::new(FailingClient));

    engine.submit(7, upload("resume.pdf"));

    let EngineEvent::Finished { request_id, result } = engine.recv().expect("event");
    assert_eq!(request_id, 7);
    let err = result.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, "Server Error");
}

#[tokio::test]
async fn default_client_reaches_the_extraction_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "name": "Ada", "phone": "555-0100", "address": "12 Engine St" }
        })))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(ExtractSettings {
        endpoint: format!("{}/extract", server.uri()),
    });
    engine.submit(1, upload("resume.pdf"));

    // Poll instead of blocking so the mock server keeps running on this
    // test's runtime.
    let event = loop {
        if let Some(event) = engine.try_recv() {
            break event;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    };

    let EngineEvent::Finished { request_id, result } = event;
    assert_eq!(request_id, 1);
    let fields = result.expect("extract ok");
    assert_eq!(fields.name, "Ada");
    assert_eq!(fields.phone, "555-0100");
    assert_eq!(fields.address, "12 Engine St");
}
