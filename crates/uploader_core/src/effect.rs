#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the file to the extraction service. At most one of these is
    /// outstanding at any time.
    SubmitFile {
        request_id: crate::RequestId,
        file: crate::SelectedFile,
    },
}
