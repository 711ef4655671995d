//! One nominal error type per [`VssErrorKind`].
//!
//! Each type wraps a [`VssError`] whose kind is fixed by the type, so callers
//! can match on either the Rust type or [`VssError::kind`].

use crate::codec::{DecodeContext, SerializedState};
use crate::codes::HResult;
use crate::error::Error;
use crate::kind::VssErrorKind;
use crate::vss_error::{Cause, VssError};

macro_rules! leaf_error {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(thiserror::Error, Debug)]
            #[error(transparent)]
            pub struct $name(VssError);

            impl $name {
                pub const KIND: VssErrorKind = VssErrorKind::$kind;

                /// Code every instance carries in this build.
                pub const CODE: HResult = VssErrorKind::$kind.code();

                pub fn new() -> Self {
                    Self(VssError::new(Self::KIND))
                }

                pub fn with_message(message: impl Into<String>) -> Self {
                    Self(VssError::with_message(Self::KIND, message))
                }

                pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
                    Self(VssError::with_cause(Self::KIND, message, cause))
                }

                /// Rebuilds an instance from encoded state. Fails if the state
                /// describes another kind.
                pub fn from_state(
                    state: &SerializedState,
                    ctx: &DecodeContext,
                ) -> Result<Self, Error> {
                    VssError::from_state_as(Self::KIND, state, ctx).map(Self)
                }

                pub fn kind(&self) -> VssErrorKind {
                    self.0.kind()
                }

                pub fn code(&self) -> HResult {
                    self.0.code()
                }

                pub fn message(&self) -> &str {
                    self.0.message()
                }

                pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
                    self.0.cause()
                }

                pub fn as_vss_error(&self) -> &VssError {
                    &self.0
                }

                pub fn into_inner(self) -> VssError {
                    self.0
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl From<$name> for VssError {
                fn from(err: $name) -> Self {
                    err.0
                }
            }

            impl TryFrom<VssError> for $name {
                type Error = VssError;

                fn try_from(err: VssError) -> Result<Self, Self::Error> {
                    if err.is(Self::KIND) {
                        Ok(Self(err))
                    } else {
                        Err(err)
                    }
                }
            }
        )+
    };
}

leaf_error! {
    UnexpectedError => Unexpected;
    BadStateError => BadState;
    ProviderAlreadyRegisteredError => ProviderAlreadyRegistered;
    ProviderNotRegisteredError => ProviderNotRegistered;
    ProviderVetoError => ProviderVeto;
    ProviderInUseError => ProviderInUse;
    ObjectNotFoundError => ObjectNotFound;
    VolumeNotSupportedError => VolumeNotSupported;
    ObjectAlreadyExistsError => ObjectAlreadyExists;
    VolumeNotSupportedByProviderError => VolumeNotSupportedByProvider;
    UnexpectedProviderError => UnexpectedProviderError;
    InvalidXmlDocumentError => InvalidXmlDocument;
    MaximumNumberOfVolumesReachedError => MaximumNumberOfVolumesReached;
    FlushWritesTimeoutError => FlushWritesTimeout;
    HoldWritesTimeoutError => HoldWritesTimeout;
    UnexpectedWriterError => UnexpectedWriterError;
    SnapshotSetInProgressError => SnapshotSetInProgress;
    MaximumNumberOfSnapshotsReachedError => MaximumNumberOfSnapshotsReached;
    WriterInfrastructureError => WriterInfrastructure;
    WriterNotRespondingError => WriterNotResponding;
    WriterAlreadySubscribedError => WriterAlreadySubscribed;
    UnsupportedContextError => UnsupportedContext;
    VolumeInUseError => VolumeInUse;
    MaximumDiffAreaAssociationsReachedError => MaximumDiffAreaAssociationsReached;
    InsufficientStorageError => InsufficientStorage;
    NoSnapshotsImportedError => NoSnapshotsImported;
    SomeSnapshotsNotImportedError => SomeSnapshotsNotImported;
    RevertInProgressError => RevertInProgress;
    RebootRequiredError => RebootRequired;
    TransactionFreezeTimeoutError => TransactionFreezeTimeout;
    /// The system was unable to thaw the Distributed Transaction Coordinator
    /// (DTC) or the Kernel Transaction Manager (KTM).
    ///
    /// Carries `VSS_E_TRANSACTION_THAW_TIMEOUT`, or `E_UNEXPECTED` when built
    /// for a target older than Windows Server 2008.
    TransactionThawTimeoutError => TransactionThawTimeout;
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::codes;

    const THAW_MESSAGE: &str = "The system was unable to thaw the Distributed Transaction Coordinator (DTC) or the Kernel Transaction Manager (KTM).";

    #[test]
    fn default_construction_uses_fixed_code_and_message() {
        let err = TransactionThawTimeoutError::new();
        assert_eq!(err.code(), codes::TRANSACTION_THAW_TIMEOUT);
        assert_eq!(err.message(), THAW_MESSAGE);
        assert_eq!(err.to_string(), THAW_MESSAGE);
        assert!(err.cause().is_none());
    }

    #[test]
    fn custom_message_keeps_code() {
        let err = TransactionThawTimeoutError::with_message("custom msg");
        assert_eq!(err.message(), "custom msg");
        assert_eq!(err.code(), TransactionThawTimeoutError::CODE);

        let empty = TransactionThawTimeoutError::with_message("");
        assert_eq!(empty.message(), "");
        assert_eq!(empty.code(), TransactionThawTimeoutError::CODE);
    }

    #[test]
    fn cause_code_does_not_leak() {
        let inner = ProviderVetoError::new();
        let err = TransactionThawTimeoutError::with_cause("custom msg", inner);

        assert_eq!(err.code(), codes::TRANSACTION_THAW_TIMEOUT);
        assert_eq!(err.message(), "custom msg");
        let source = err.source().unwrap();
        let veto = source.downcast_ref::<ProviderVetoError>().unwrap();
        assert_eq!(veto.code(), codes::VSS_E_PROVIDER_VETO);
    }

    #[test]
    fn conversions_respect_kind() {
        let base: VssError = TransactionThawTimeoutError::new().into();
        assert_eq!(base.kind(), VssErrorKind::TransactionThawTimeout);

        let back = TransactionThawTimeoutError::try_from(base).unwrap();
        assert_eq!(back.kind(), VssErrorKind::TransactionThawTimeout);

        let freeze: VssError = TransactionFreezeTimeoutError::new().into();
        let rejected = TransactionThawTimeoutError::try_from(freeze).unwrap_err();
        assert_eq!(rejected.kind(), VssErrorKind::TransactionFreezeTimeout);
    }

    #[test]
    fn default_trait_matches_new() {
        let err = TransactionThawTimeoutError::default();
        assert_eq!(err.message(), THAW_MESSAGE);
    }
}
