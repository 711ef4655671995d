use crate::codes::{self, HResult};
use crate::kind::VssErrorKind;
use crate::vss_error::VssError;

/// Error for a failed native call, or `None` if `hr` signals success.
///
/// Failure codes the binding does not recognise become
/// [`VssErrorKind::Unexpected`] with the raw code in the message.
pub fn error_for_code(hr: HResult) -> Option<VssError> {
    if codes::succeeded(hr) {
        return None;
    }
    match VssErrorKind::from_code(hr) {
        Some(kind) => {
            tracing::debug!(code = %codes::to_hex(hr), kind = %kind, "mapped vss result code");
            Some(VssError::new(kind))
        }
        None => {
            tracing::debug!(code = %codes::to_hex(hr), "unrecognised vss result code");
            Some(VssError::with_message(
                VssErrorKind::Unexpected,
                format!(
                    "The native call failed with unrecognised result code {}.",
                    codes::to_hex(hr)
                ),
            ))
        }
    }
}

/// Turns the result code of a native VSS call into a `Result`.
pub fn check(hr: HResult) -> Result<(), VssError> {
    match error_for_code(hr) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::leaf::TransactionThawTimeoutError;

    #[test]
    fn success_codes_pass() {
        assert!(check(codes::S_OK).is_ok());
        assert!(check(codes::S_FALSE).is_ok());
    }

    #[test]
    fn every_native_code_maps_to_its_kind() {
        for kind in VssErrorKind::iter().filter(|k| k.is_native()) {
            let err = check(kind.code()).unwrap_err();
            assert_eq!(err.kind(), kind);
            assert_eq!(err.code(), kind.code());
            assert_eq!(err.message(), kind.default_message());
        }
    }

    #[cfg(not(any(feature = "target-winxp", feature = "target-win2003")))]
    #[test]
    fn thaw_timeout_maps_to_leaf() {
        let err = check(codes::VSS_E_TRANSACTION_THAW_TIMEOUT).unwrap_err();
        let leaf = TransactionThawTimeoutError::try_from(err).unwrap();
        assert_eq!(leaf.code(), codes::VSS_E_TRANSACTION_THAW_TIMEOUT);
    }

    #[cfg(any(feature = "target-winxp", feature = "target-win2003"))]
    #[test]
    fn thaw_timeout_is_unrecognised_on_legacy_targets() {
        let err = check(codes::VSS_E_TRANSACTION_THAW_TIMEOUT).unwrap_err();
        assert!(TransactionThawTimeoutError::try_from(err).is_err());
    }

    #[test]
    fn unknown_failure_becomes_unexpected() {
        let err = check(codes::E_ACCESSDENIED).unwrap_err();
        assert_eq!(err.kind(), VssErrorKind::Unexpected);
        assert_eq!(err.code(), codes::E_UNEXPECTED);
        assert!(err.message().contains("0x80070005"));
    }
}
