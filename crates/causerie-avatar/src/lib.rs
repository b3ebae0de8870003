#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

mod convert;
mod error;
mod format;

pub use convert::{convert_avatar, convert_avatar_file, encode_avatar, Avatar, AvatarOptions};
pub use error::AvatarError;
pub use format::{AvatarFormat, FormatParseError};

/// Quality used when nothing else is configured (0.9 on a 0..1 scale).
pub const DEFAULT_QUALITY: u8 = 90;

/// Inputs larger than this are rejected before decoding.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;
