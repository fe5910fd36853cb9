#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file; carries the payload and the picker's metadata.
    FileSelected(crate::SelectedFile),
    /// The outstanding extraction request resolved.
    ExtractionFinished {
        request_id: crate::RequestId,
        outcome: crate::ExtractionOutcome,
    },
    /// Fallback for wiring that has nothing to report.
    NoOp,
}
