//! Error types for the string-facing edges of the crate
//!
//! The numeric core never fails: bad text turns into NaN and out-of-range
//! values clamp. These errors only show up where a caller hands us a
//! name we can't map to a [`Scale`](crate::Scale), or explicitly asks for
//! a NaN result to be treated as a failure.

use crate::scale::Scale;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("unknown scale '{0}' (expected one of: punter, michaelchan, scheep, grassy)")]
    UnknownScale(String),

    #[error("'{input}' is not a {scale} difficulty")]
    NotANumber { input: String, scale: Scale },
}
