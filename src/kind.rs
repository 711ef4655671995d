use crate::codes::{self, HResult};
use crate::platform::{Platform, TARGET};

/// Every native VSS failure the binding distinguishes.
///
/// The variant name is the stable tag used by the state codec, so renaming a
/// variant breaks previously encoded errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum VssErrorKind {
    Unexpected,
    BadState,
    ProviderAlreadyRegistered,
    ProviderNotRegistered,
    ProviderVeto,
    ProviderInUse,
    ObjectNotFound,
    VolumeNotSupported,
    ObjectAlreadyExists,
    VolumeNotSupportedByProvider,
    UnexpectedProviderError,
    InvalidXmlDocument,
    MaximumNumberOfVolumesReached,
    FlushWritesTimeout,
    HoldWritesTimeout,
    UnexpectedWriterError,
    SnapshotSetInProgress,
    MaximumNumberOfSnapshotsReached,
    WriterInfrastructure,
    WriterNotResponding,
    WriterAlreadySubscribed,
    UnsupportedContext,
    VolumeInUse,
    MaximumDiffAreaAssociationsReached,
    InsufficientStorage,
    NoSnapshotsImported,
    SomeSnapshotsNotImported,
    RevertInProgress,
    RebootRequired,
    TransactionFreezeTimeout,
    TransactionThawTimeout,
}

impl VssErrorKind {
    /// Code as defined by Windows, regardless of the build target.
    pub const fn native_code(self) -> HResult {
        match self {
            Self::Unexpected => codes::E_UNEXPECTED,
            Self::BadState => codes::VSS_E_BAD_STATE,
            Self::ProviderAlreadyRegistered => codes::VSS_E_PROVIDER_ALREADY_REGISTERED,
            Self::ProviderNotRegistered => codes::VSS_E_PROVIDER_NOT_REGISTERED,
            Self::ProviderVeto => codes::VSS_E_PROVIDER_VETO,
            Self::ProviderInUse => codes::VSS_E_PROVIDER_IN_USE,
            Self::ObjectNotFound => codes::VSS_E_OBJECT_NOT_FOUND,
            Self::VolumeNotSupported => codes::VSS_E_VOLUME_NOT_SUPPORTED,
            Self::ObjectAlreadyExists => codes::VSS_E_OBJECT_ALREADY_EXISTS,
            Self::VolumeNotSupportedByProvider => codes::VSS_E_VOLUME_NOT_SUPPORTED_BY_PROVIDER,
            Self::UnexpectedProviderError => codes::VSS_E_UNEXPECTED_PROVIDER_ERROR,
            Self::InvalidXmlDocument => codes::VSS_E_INVALID_XML_DOCUMENT,
            Self::MaximumNumberOfVolumesReached => codes::VSS_E_MAXIMUM_NUMBER_OF_VOLUMES_REACHED,
            Self::FlushWritesTimeout => codes::VSS_E_FLUSH_WRITES_TIMEOUT,
            Self::HoldWritesTimeout => codes::VSS_E_HOLD_WRITES_TIMEOUT,
            Self::UnexpectedWriterError => codes::VSS_E_UNEXPECTED_WRITER_ERROR,
            Self::SnapshotSetInProgress => codes::VSS_E_SNAPSHOT_SET_IN_PROGRESS,
            Self::MaximumNumberOfSnapshotsReached => {
                codes::VSS_E_MAXIMUM_NUMBER_OF_SNAPSHOTS_REACHED
            }
            Self::WriterInfrastructure => codes::VSS_E_WRITER_INFRASTRUCTURE,
            Self::WriterNotResponding => codes::VSS_E_WRITER_NOT_RESPONDING,
            Self::WriterAlreadySubscribed => codes::VSS_E_WRITER_ALREADY_SUBSCRIBED,
            Self::UnsupportedContext => codes::VSS_E_UNSUPPORTED_CONTEXT,
            Self::VolumeInUse => codes::VSS_E_VOLUME_IN_USE,
            Self::MaximumDiffAreaAssociationsReached => {
                codes::VSS_E_MAXIMUM_DIFFAREA_ASSOCIATIONS_REACHED
            }
            Self::InsufficientStorage => codes::VSS_E_INSUFFICIENT_STORAGE,
            Self::NoSnapshotsImported => codes::VSS_E_NO_SNAPSHOTS_IMPORTED,
            Self::SomeSnapshotsNotImported => codes::VSS_E_SOME_SNAPSHOTS_NOT_IMPORTED,
            Self::RevertInProgress => codes::VSS_E_REVERT_IN_PROGRESS,
            Self::RebootRequired => codes::VSS_E_REBOOT_REQUIRED,
            Self::TransactionFreezeTimeout => codes::VSS_E_TRANSACTION_FREEZE_TIMEOUT,
            Self::TransactionThawTimeout => codes::VSS_E_TRANSACTION_THAW_TIMEOUT,
        }
    }

    /// Oldest platform that defines [`Self::native_code`].
    pub const fn introduced_in(self) -> Platform {
        match self {
            Self::RevertInProgress
            | Self::RebootRequired
            | Self::TransactionFreezeTimeout
            | Self::TransactionThawTimeout => Platform::WindowsServer2008,
            _ => Platform::WindowsXp,
        }
    }

    /// Whether the build target defines this kind's native code.
    pub const fn is_native(self) -> bool {
        TARGET.supports(self.introduced_in())
    }

    /// Fixed code carried by every error of this kind in this build.
    pub const fn code(self) -> HResult {
        codes::resolve(self.native_code(), self.introduced_in())
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            Self::Unexpected => "An unexpected error occurred.",
            Self::BadState => {
                "A method call was made at an invalid point in the shadow copy operation sequence."
            }
            Self::ProviderAlreadyRegistered => "The shadow copy provider is already registered.",
            Self::ProviderNotRegistered => "The shadow copy provider is not registered.",
            Self::ProviderVeto => {
                "The provider returned an unexpected error while performing the requested operation."
            }
            Self::ProviderInUse => "The shadow copy provider is currently in use.",
            Self::ObjectNotFound => "The requested object was not found.",
            Self::VolumeNotSupported => "Shadow copies are not supported on the specified volume.",
            Self::ObjectAlreadyExists => "The object already exists.",
            Self::VolumeNotSupportedByProvider => {
                "The specified volume is not supported by the specified provider."
            }
            Self::UnexpectedProviderError => {
                "The shadow copy provider returned an unexpected error code."
            }
            Self::InvalidXmlDocument => "The XML document is not valid.",
            Self::MaximumNumberOfVolumesReached => {
                "The maximum number of volumes has been added to the shadow copy set."
            }
            Self::FlushWritesTimeout => {
                "The system or provider timed out while flushing writes to the volumes being shadow copied."
            }
            Self::HoldWritesTimeout => {
                "The system or provider timed out while holding writes to the volumes being shadow copied."
            }
            Self::UnexpectedWriterError => "An unexpected error was returned by a writer.",
            Self::SnapshotSetInProgress => "The creation of a shadow copy is already in progress.",
            Self::MaximumNumberOfSnapshotsReached => {
                "The volume has reached its maximum number of shadow copies."
            }
            Self::WriterInfrastructure => {
                "An error was detected in the writer infrastructure."
            }
            Self::WriterNotResponding => "A writer did not respond to a GatherWriterStatus call.",
            Self::WriterAlreadySubscribed => "The writer has already subscribed.",
            Self::UnsupportedContext => "The shadow copy context is not supported.",
            Self::VolumeInUse => "The volume is in use and cannot be reconfigured.",
            Self::MaximumDiffAreaAssociationsReached => {
                "The maximum number of shadow copy storage associations has been reached."
            }
            Self::InsufficientStorage => {
                "There is not enough storage on the volume to create a shadow copy."
            }
            Self::NoSnapshotsImported => "No shadow copies were successfully imported.",
            Self::SomeSnapshotsNotImported => "Some shadow copies were not successfully imported.",
            Self::RevertInProgress => "A revert operation is currently in progress on the volume.",
            Self::RebootRequired => {
                "The provider encountered an error that requires the user to restart the computer."
            }
            Self::TransactionFreezeTimeout => {
                "The system was unable to freeze the Distributed Transaction Coordinator (DTC) or the Kernel Transaction Manager (KTM)."
            }
            Self::TransactionThawTimeout => {
                "The system was unable to thaw the Distributed Transaction Coordinator (DTC) or the Kernel Transaction Manager (KTM)."
            }
        }
    }

    /// Kind whose code is natively defined on the build target and equals `code`.
    ///
    /// Kinds that fall back to `E_UNEXPECTED` on this target never match, so
    /// `E_UNEXPECTED` always resolves to [`Self::Unexpected`].
    pub fn from_code(code: HResult) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter()
            .find(|kind| kind.is_native() && kind.native_code() == code)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn native_codes_are_unique() {
        let kinds: Vec<VssErrorKind> = VssErrorKind::iter().collect();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.native_code(), b.native_code(), "{a} and {b} share a code");
            }
        }
    }

    #[test]
    fn every_native_kind_round_trips_through_its_code() {
        for kind in VssErrorKind::iter().filter(|k| k.is_native()) {
            assert_eq!(VssErrorKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unexpected_resolves_from_e_unexpected() {
        assert_eq!(
            VssErrorKind::from_code(codes::E_UNEXPECTED),
            Some(VssErrorKind::Unexpected)
        );
        assert_eq!(VssErrorKind::from_code(codes::E_INVALIDARG), None);
        assert_eq!(VssErrorKind::from_code(codes::S_OK), None);
    }

    #[test]
    fn thaw_timeout_code_matches_resolved_constant() {
        assert_eq!(
            VssErrorKind::TransactionThawTimeout.code(),
            codes::TRANSACTION_THAW_TIMEOUT
        );
        assert_eq!(
            VssErrorKind::TransactionThawTimeout.native_code(),
            codes::VSS_E_TRANSACTION_THAW_TIMEOUT
        );
    }

    #[test]
    fn kind_names_parse_back() {
        for kind in VssErrorKind::iter() {
            assert_eq!(kind.to_string().parse::<VssErrorKind>().ok(), Some(kind));
        }
        assert_eq!("NotAKind".parse::<VssErrorKind>().ok(), None);
    }

    #[test]
    fn every_kind_has_a_message() {
        for kind in VssErrorKind::iter() {
            assert!(!kind.default_message().is_empty(), "{kind} has no message");
        }
    }
}
