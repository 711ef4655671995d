use crate::codes::HResult;
use crate::kind::VssErrorKind;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error("unknown error kind: {name}")]
    UnknownKind { name: String },

    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: VssErrorKind,
        found: VssErrorKind,
    },

    #[error("code mismatch for {kind}: expected {expected:#010X}, found {found:#010X}")]
    CodeMismatch {
        kind: VssErrorKind,
        expected: HResult,
        found: HResult,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
