#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod codec;
pub mod codes;
pub mod error;
pub mod kind;
pub mod leaf;
pub mod mapping;
pub mod platform;
pub mod vss_error;

pub use codec::{ContextOrigin, DecodeContext, RemoteCause, SerializedState, decode, encode};
pub use codes::HResult;
pub use error::Error;
pub use kind::VssErrorKind;
pub use leaf::*;
pub use mapping::{check, error_for_code};
pub use platform::{Platform, TARGET};
pub use vss_error::{Cause, VssError};
