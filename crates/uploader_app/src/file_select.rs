use std::fs;
use std::io;
use std::path::Path;

use bytes::Bytes;
use uploader_core::SelectedFile;

const PDF_MEDIA_TYPE: &str = "application/pdf";
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Loads a path into the descriptor the state machine expects.
///
/// This plays the role of the file picker: the declared size comes from file
/// metadata and the media type from the extension, and neither is verified
/// against the payload.
pub fn load(path: &Path) -> io::Result<SelectedFile> {
    let declared_len = fs::metadata(path)?.len();
    let bytes = Bytes::from(fs::read(path)?);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());

    Ok(SelectedFile {
        file_name,
        media_type: media_type_for(path).to_string(),
        declared_len,
        bytes,
    })
}

fn media_type_for(path: &Path) -> &'static str {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        PDF_MEDIA_TYPE
    } else {
        FALLBACK_MEDIA_TYPE
    }
}
