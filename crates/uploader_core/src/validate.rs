use std::fmt;

use crate::SelectedFile;

/// Upper bound on an accepted upload, in bytes. A file of exactly this size
/// still passes; only strictly larger files are rejected.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    TooLarge { declared_len: u64 },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::TooLarge { .. } => write!(f, "File size exceeds 10MB limit"),
        }
    }
}

/// Gate applied to a selection before any network activity.
///
/// Only the declared size is checked. Media-type filtering is left to the
/// picker's accept hint; this is a minimal intake check, not a security
/// boundary.
pub fn validate(file: &SelectedFile) -> Result<(), RejectReason> {
    if file.declared_len > MAX_UPLOAD_BYTES {
        return Err(RejectReason::TooLarge {
            declared_len: file.declared_len,
        });
    }
    Ok(())
}
