//! Native HRESULT values returned by the VSS API.
//!
//! Constants carry the values defined by `vsserror.h`/`winerror.h`. Codes that
//! only exist from Windows Server 2008 on are also exported through
//! [`resolve`], which falls back to [`E_UNEXPECTED`] on older build targets.

use crate::platform::{Platform, TARGET};

/// Raw native result code.
pub type HResult = i32;

pub const S_OK: HResult = 0;
pub const S_FALSE: HResult = 1;

pub const E_UNEXPECTED: HResult = 0x8000_FFFF_u32 as i32;
pub const E_ACCESSDENIED: HResult = 0x8007_0005_u32 as i32;
pub const E_OUTOFMEMORY: HResult = 0x8007_000E_u32 as i32;
pub const E_INVALIDARG: HResult = 0x8007_0057_u32 as i32;

pub const VSS_E_BAD_STATE: HResult = 0x8004_2301_u32 as i32;
pub const VSS_E_PROVIDER_ALREADY_REGISTERED: HResult = 0x8004_2303_u32 as i32;
pub const VSS_E_PROVIDER_NOT_REGISTERED: HResult = 0x8004_2304_u32 as i32;
pub const VSS_E_PROVIDER_VETO: HResult = 0x8004_2306_u32 as i32;
pub const VSS_E_PROVIDER_IN_USE: HResult = 0x8004_2307_u32 as i32;
pub const VSS_E_OBJECT_NOT_FOUND: HResult = 0x8004_2308_u32 as i32;
pub const VSS_E_VOLUME_NOT_SUPPORTED: HResult = 0x8004_230C_u32 as i32;
pub const VSS_E_OBJECT_ALREADY_EXISTS: HResult = 0x8004_230D_u32 as i32;
pub const VSS_E_VOLUME_NOT_SUPPORTED_BY_PROVIDER: HResult = 0x8004_230E_u32 as i32;
pub const VSS_E_UNEXPECTED_PROVIDER_ERROR: HResult = 0x8004_230F_u32 as i32;
pub const VSS_E_INVALID_XML_DOCUMENT: HResult = 0x8004_2311_u32 as i32;
pub const VSS_E_MAXIMUM_NUMBER_OF_VOLUMES_REACHED: HResult = 0x8004_2312_u32 as i32;
pub const VSS_E_FLUSH_WRITES_TIMEOUT: HResult = 0x8004_2313_u32 as i32;
pub const VSS_E_HOLD_WRITES_TIMEOUT: HResult = 0x8004_2314_u32 as i32;
pub const VSS_E_UNEXPECTED_WRITER_ERROR: HResult = 0x8004_2315_u32 as i32;
pub const VSS_E_SNAPSHOT_SET_IN_PROGRESS: HResult = 0x8004_2316_u32 as i32;
pub const VSS_E_MAXIMUM_NUMBER_OF_SNAPSHOTS_REACHED: HResult = 0x8004_2317_u32 as i32;
pub const VSS_E_WRITER_INFRASTRUCTURE: HResult = 0x8004_2318_u32 as i32;
pub const VSS_E_WRITER_NOT_RESPONDING: HResult = 0x8004_2319_u32 as i32;
pub const VSS_E_WRITER_ALREADY_SUBSCRIBED: HResult = 0x8004_231A_u32 as i32;
pub const VSS_E_UNSUPPORTED_CONTEXT: HResult = 0x8004_231B_u32 as i32;
pub const VSS_E_VOLUME_IN_USE: HResult = 0x8004_231D_u32 as i32;
pub const VSS_E_MAXIMUM_DIFFAREA_ASSOCIATIONS_REACHED: HResult = 0x8004_231E_u32 as i32;
pub const VSS_E_INSUFFICIENT_STORAGE: HResult = 0x8004_231F_u32 as i32;
pub const VSS_E_NO_SNAPSHOTS_IMPORTED: HResult = 0x8004_2320_u32 as i32;
pub const VSS_E_SOME_SNAPSHOTS_NOT_IMPORTED: HResult = 0x8004_2321_u32 as i32;
pub const VSS_E_REVERT_IN_PROGRESS: HResult = 0x8004_2325_u32 as i32;
pub const VSS_E_REBOOT_REQUIRED: HResult = 0x8004_2327_u32 as i32;
pub const VSS_E_TRANSACTION_FREEZE_TIMEOUT: HResult = 0x8004_2328_u32 as i32;
pub const VSS_E_TRANSACTION_THAW_TIMEOUT: HResult = 0x8004_2329_u32 as i32;

/// Resolves a code introduced with `since` against the build target.
pub const fn resolve(code: HResult, since: Platform) -> HResult {
    if TARGET.supports(since) {
        code
    } else {
        E_UNEXPECTED
    }
}

/// Thaw-timeout code as seen by this build.
pub const TRANSACTION_THAW_TIMEOUT: HResult =
    resolve(VSS_E_TRANSACTION_THAW_TIMEOUT, Platform::WindowsServer2008);

/// Freeze-timeout code as seen by this build.
pub const TRANSACTION_FREEZE_TIMEOUT: HResult =
    resolve(VSS_E_TRANSACTION_FREEZE_TIMEOUT, Platform::WindowsServer2008);

/// Reboot-required code as seen by this build.
pub const REBOOT_REQUIRED: HResult = resolve(VSS_E_REBOOT_REQUIRED, Platform::WindowsServer2008);

/// Revert-in-progress code as seen by this build.
pub const REVERT_IN_PROGRESS: HResult =
    resolve(VSS_E_REVERT_IN_PROGRESS, Platform::WindowsServer2008);

pub const fn succeeded(hr: HResult) -> bool {
    hr >= 0
}

pub const fn failed(hr: HResult) -> bool {
    hr < 0
}

/// Formats a code the way Windows tools print it, e.g. `0x80042329`.
pub fn to_hex(hr: HResult) -> String {
    format!("{:#010X}", hr as u32)
}
