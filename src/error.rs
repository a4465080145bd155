//! Errors raised while turning user supplied text into CRC parameters.
//!
//! Computing a CRC never fails; only configuration parsing does.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the accepted direction names
    #[error("invalid direction '{0}', expected msb or lsb")]
    Direction(String),

    /// Register width with no matching unsigned integer type
    #[error("unsupported width {0}, expected 8, 16, 32 or 64")]
    Width(String),

    /// Not a hexadecimal literal
    #[error("invalid hex value '{0}'")]
    Hex(String),

    /// Value needs more bits than the register has
    #[error("value 0x{value:X} does not fit in {bits} bits")]
    TooWide { value: u64, bits: u32 },
}

pub type ParseResult<T> = Result<T, ParseError>;
