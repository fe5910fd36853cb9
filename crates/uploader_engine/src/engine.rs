use std::sync::{mpsc, Arc};
use std::thread;

use crate::{
    EngineEvent, ExtractSettings, ExtractionClient, FileUpload, ReqwestExtractionClient, RequestId,
};

enum EngineCommand {
    Submit {
        request_id: RequestId,
        file: FileUpload,
    },
}

/// Bridge between the synchronous shell and the async extraction client.
///
/// Commands are handled strictly one at a time: the engine thread resolves
/// the current request before it picks up the next command, so a second
/// submission can never overlap the outstanding one.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ExtractSettings) -> Self {
        Self::with_client(Arc::new(ReqwestExtractionClient::new(settings)))
    }

    /// Builds a handle around any client implementation. Tests use this to
    /// substitute a fake without network access.
    pub fn with_client(client: Arc<dyn ExtractionClient>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let EngineCommand::Submit { request_id, file } = command;
                let result = runtime.block_on(client.extract(file));
                if event_tx
                    .send(EngineEvent::Finished { request_id, result })
                    .is_err()
                {
                    break;
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request_id: RequestId, file: FileUpload) {
        let _ = self.cmd_tx.send(EngineCommand::Submit { request_id, file });
    }

    /// Non-blocking poll for the next engine event.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next engine event, or returns `None` once the
    /// engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}
