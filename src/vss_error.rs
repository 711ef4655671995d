use crate::codes::HResult;
use crate::kind::VssErrorKind;

/// Boxed error kept as the cause of a [`VssError`].
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed VSS call: the failure kind, its fixed code, a message and an
/// optional lower-level cause.
///
/// The code is never stored separately; it always comes from the kind, so no
/// constructor can produce an error whose code disagrees with its tag.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct VssError {
    kind: VssErrorKind,
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl VssError {
    /// Error of `kind` with the kind's default message.
    pub fn new(kind: VssErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            cause: None,
        }
    }

    pub fn with_message(kind: VssErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Error of `kind` wrapping `cause`. If the cause is itself a [`VssError`]
    /// its code is not inherited.
    pub fn with_cause(
        kind: VssErrorKind,
        message: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub(crate) fn from_parts(kind: VssErrorKind, message: String, cause: Option<Cause>) -> Self {
        Self {
            kind,
            message,
            cause,
        }
    }

    pub fn kind(&self) -> VssErrorKind {
        self.kind
    }

    pub fn code(&self) -> HResult {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is(&self, kind: VssErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<VssErrorKind> for VssError {
    fn from(kind: VssErrorKind) -> Self {
        Self::new(kind)
    }
}
