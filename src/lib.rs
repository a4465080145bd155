//! CRC computation for any register width (8, 16, 32 or 64 bits), any
//! polynomial and either bit order.
//!
//! Two engines produce bit-identical results: [`BitwiseCrc`] shifts one bit
//! at a time and needs no setup, [`TableCrc`] precomputes a 256 entry table
//! and consumes a byte per lookup.
//!
//! ```
//! use libgencrc::prelude::*;
//!
//! // CRC-16/KERMIT
//! let crc = TableCrc::<u16, ShiftRight>::new(0x1021);
//! let head = crc.compute(b"1234", 0);
//! assert_eq!(crc.compute(b"56789", head), 0x2189);
//! ```
//!
//! Initial and final complements are not part of the engines. Algorithms
//! such as CRC-32 apply them around [`CrcEngine::compute`]:
//!
//! ```
//! use libgencrc::prelude::*;
//!
//! let crc32 = TableCrc::<u32, ShiftRight>::new(0x04C11DB7);
//! assert_eq!(!crc32.compute(b"123456789", !0), 0xCBF43926);
//! ```

pub mod digest;
pub mod engine;
pub mod error;
pub mod io;
pub mod shift;
pub mod word;

pub use digest::{CrcDigest, Digest};
pub use engine::{BitwiseCrc, CrcEngine, CrcParams, TableCrc};
pub use error::ParseError;
pub use shift::{Direction, ShiftLeft, ShiftRight, Shifter};
pub use word::{reverse, CrcWord, Width};

pub mod prelude {
    pub use crate::digest::{CrcDigest, Digest};
    pub use crate::engine::{BitwiseCrc, CrcEngine, TableCrc};
    pub use crate::shift::{Direction, ShiftLeft, ShiftRight, Shifter};
    pub use crate::word::CrcWord;
}
