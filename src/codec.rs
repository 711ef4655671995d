use serde::{Deserialize, Serialize};

use crate::codes::{self, HResult};
use crate::error::Error;
use crate::kind::VssErrorKind;
use crate::vss_error::{Cause, VssError};

/// Encoded form of a [`VssError`], suitable for crossing a process or
/// persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedState {
    /// Kind tag, e.g. `"TransactionThawTimeout"`.
    pub kind: String,
    /// Code the error carried when it was encoded.
    pub code: HResult,
    pub message: String,
    /// Messages of the cause chain, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

/// Where encoded state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContextOrigin {
    CrossProcess,
    CrossMachine,
    Persistence,
    #[default]
    Other,
}

/// Context supplied when reconstructing an error from [`SerializedState`].
///
/// With `strict` set, a stored code that differs from the kind's code in this
/// build is rejected. Otherwise the kind's code wins and the mismatch is only
/// logged, which is what state written by a build for another platform
/// target needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeContext {
    pub origin: ContextOrigin,
    pub strict: bool,
}

impl DecodeContext {
    pub fn strict(origin: ContextOrigin) -> Self {
        Self {
            origin,
            strict: true,
        }
    }
}

/// Stand-in for a cause that was encoded as text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteCause {
    message: String,
    #[source]
    source: Option<Box<RemoteCause>>,
}

impl RemoteCause {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rebuilds a cause chain from messages ordered outermost first.
    fn chain(messages: &[String]) -> Option<Self> {
        messages.iter().rev().fold(None, |source, message| {
            Some(Self {
                message: message.clone(),
                source: source.map(Box::new),
            })
        })
    }
}

impl SerializedState {
    pub fn from_error(err: &VssError) -> Self {
        let mut causes = Vec::new();
        let mut next = err.cause().map(|c| c as &(dyn std::error::Error + 'static));
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }
        Self {
            kind: err.kind().to_string(),
            code: err.code(),
            message: err.message().to_string(),
            causes,
        }
    }
}

impl VssError {
    pub fn to_state(&self) -> SerializedState {
        SerializedState::from_error(self)
    }

    /// Reconstructs an error from encoded state. The code is always taken
    /// from the kind, never from the state.
    pub fn from_state(state: &SerializedState, ctx: &DecodeContext) -> Result<Self, Error> {
        let kind = state
            .kind
            .parse::<VssErrorKind>()
            .map_err(|_| Error::UnknownKind {
                name: state.kind.clone(),
            })?;

        if state.code != kind.code() {
            if ctx.strict {
                return Err(Error::CodeMismatch {
                    kind,
                    expected: kind.code(),
                    found: state.code,
                });
            }
            tracing::warn!(
                kind = %kind,
                expected = %codes::to_hex(kind.code()),
                found = %codes::to_hex(state.code),
                origin = ?ctx.origin,
                "encoded code differs from this build, keeping the kind's code"
            );
        }

        let cause = RemoteCause::chain(&state.causes).map(|c| Box::new(c) as Cause);
        Ok(Self::from_parts(kind, state.message.clone(), cause))
    }

    /// Like [`Self::from_state`], but the state must describe `expected`.
    pub fn from_state_as(
        expected: VssErrorKind,
        state: &SerializedState,
        ctx: &DecodeContext,
    ) -> Result<Self, Error> {
        let err = Self::from_state(state, ctx)?;
        if err.kind() != expected {
            return Err(Error::KindMismatch {
                expected,
                found: err.kind(),
            });
        }
        Ok(err)
    }
}

/// Encodes an error as JSON.
pub fn encode(err: &VssError) -> Result<String, Error> {
    Ok(serde_json::to_string(&err.to_state())?)
}

/// Decodes an error previously produced by [`encode`].
pub fn decode(input: &str, ctx: &DecodeContext) -> Result<VssError, Error> {
    if input.trim().is_empty() {
        return Err(Error::Decode {
            reason: "empty input".into(),
        });
    }
    let state: SerializedState = serde_json::from_str(input)?;
    tracing::debug!(kind = %state.kind, origin = ?ctx.origin, "decoding vss error");
    VssError::from_state(&state, ctx)
}
