use core::fmt::{self, Debug, UpperHex};
use core::ops::{BitAnd, BitXor, BitXorAssign};
use core::str::FromStr;

use crate::error::{ParseError, ParseResult};

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer usable as a CRC register.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only, so the register width
/// is fixed by the type an engine is instantiated with.
pub trait CrcWord:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + Default
    + UpperHex
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + BitXorAssign
    + TryFrom<u64>
    + 'static
{
    /// Register width in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Widens a byte into the low bits of the register.
    fn from_byte(byte: u8) -> Self;

    /// Low eight bits of the register.
    fn low_byte(self) -> u8;

    /// Left shift where shifting out every bit gives zero instead of overflowing.
    fn shift_left(self, bits: u32) -> Self;

    /// Right shift where shifting out every bit gives zero instead of overflowing.
    fn shift_right(self, bits: u32) -> Self;

    fn reverse_bits(self) -> Self;

    /// Hex digits needed to print a full register.
    fn hex_digits() -> usize {
        (Self::BITS / 4) as usize
    }
}

macro_rules! impl_crc_word {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl CrcWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    byte as $ty
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn shift_left(self, bits: u32) -> Self {
                    self.checked_shl(bits).unwrap_or(0)
                }

                #[inline]
                fn shift_right(self, bits: u32) -> Self {
                    self.checked_shr(bits).unwrap_or(0)
                }

                #[inline]
                fn reverse_bits(self) -> Self {
                    <$ty>::reverse_bits(self)
                }
            }
        )*
    };
}

impl_crc_word!(u8, u16, u32, u64);

/// Reverses the order of all bits of `word`: bit 0 becomes bit `BITS - 1`.
///
/// Turns a polynomial written in the usual MSB-first notation into the
/// mirrored form LSB-first processing works with.
#[inline]
pub fn reverse<T: CrcWord>(word: T) -> T {
    word.reverse_bits()
}

/// Parses a hexadecimal literal, with or without a `0x` prefix, into a
/// register of type `T`.
pub fn parse_hex<T: CrcWord>(text: &str) -> ParseResult<T> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
        .replace('_', "");
    // from_str_radix takes a leading sign
    if digits.starts_with(['+', '-']) {
        return Err(ParseError::Hex(text.to_owned()));
    }
    let value =
        u64::from_str_radix(&digits, 16).map_err(|_| ParseError::Hex(text.to_owned()))?;
    T::try_from(value).map_err(|_| ParseError::TooWide {
        value,
        bits: T::BITS,
    })
}

/// Register widths available at runtime, one per [`CrcWord`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = ParseError;

    fn try_from(bits: u32) -> ParseResult<Self> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            other => Err(ParseError::Width(other.to_string())),
        }
    }
}

impl FromStr for Width {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let bits = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseError::Width(s.to_owned()))?;
        Width::try_from(bits)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Formats `word` as uppercase hex zero-padded to the full register width.
pub fn to_hex<T: CrcWord>(word: T) -> String {
    format!("{:0width$X}", word, width = T::hex_digits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(0x01u8), 0x80);
        assert_eq!(reverse(0x07u8), 0xE0);
        assert_eq!(reverse(0x1021u16), 0x8408);
        assert_eq!(reverse(0x8005u16), 0xA001);
        assert_eq!(reverse(0x04C11DB7u32), 0xEDB88320);
        assert_eq!(reverse(0x1EDC6F41u32), 0x82F63B78);
        assert_eq!(reverse(0x42F0E1EBA9EA3693u64), 0xC96C5795D7870F42);
    }

    #[test]
    fn test_reverse_involution_u8() {
        for word in 0..=u8::MAX {
            assert_eq!(reverse(reverse(word)), word);
        }
    }

    #[test]
    fn test_reverse_involution_u16() {
        for word in 0..=u16::MAX {
            assert_eq!(reverse(reverse(word)), word);
        }
    }

    #[test]
    fn test_shift_out_of_range() {
        assert_eq!(CrcWord::shift_left(0xFFu8, 8), 0);
        assert_eq!(CrcWord::shift_right(0xFFu8, 8), 0);
        assert_eq!(CrcWord::shift_left(0xFFu8, 7), 0x80);
        assert_eq!(CrcWord::shift_right(0xFFFFu16, 8), 0xFF);
        assert_eq!(CrcWord::shift_left(1u64, 63), 1 << 63);
        assert_eq!(CrcWord::shift_left(1u64, 64), 0);
    }

    #[test]
    fn test_bytes() {
        assert_eq!(<u32 as CrcWord>::from_byte(0xAB), 0xAB);
        assert_eq!(0x1234u16.low_byte(), 0x34);
        assert_eq!(0xFF00_0000_0000_0001u64.low_byte(), 0x01);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex::<u16>("1021"), Ok(0x1021));
        assert_eq!(parse_hex::<u16>("0x8005"), Ok(0x8005));
        assert_eq!(parse_hex::<u32>("0X04C1_1DB7"), Ok(0x04C11DB7));
        assert_eq!(parse_hex::<u64>("ffffffffffffffff"), Ok(u64::MAX));
        assert_eq!(
            parse_hex::<u8>("107"),
            Err(ParseError::TooWide {
                value: 0x107,
                bits: 8
            })
        );
        assert_eq!(parse_hex::<u32>("xyz"), Err(ParseError::Hex("xyz".to_owned())));
        assert_eq!(parse_hex::<u32>(""), Err(ParseError::Hex(String::new())));
    }

    #[test]
    fn test_parse_hex_rejects_sign() {
        for text in ["+1021", "0x+1021", "-1", "0X-1"] {
            assert_eq!(parse_hex::<u16>(text), Err(ParseError::Hex(text.to_owned())));
        }
    }

    #[test]
    fn test_width() {
        assert_eq!("16".parse::<Width>(), Ok(Width::W16));
        assert_eq!(Width::try_from(64u32), Ok(Width::W64));
        assert_eq!(Width::try_from(24u32), Err(ParseError::Width("24".to_owned())));
        assert_eq!(Width::W8.to_string(), "8");
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(0x0Fu8), "0F");
        assert_eq!(to_hex(0x1021u16), "1021");
        assert_eq!(to_hex(0u16), "0000");
        assert_eq!(to_hex(0xCBF43926u32), "CBF43926");
        assert_eq!(to_hex(1u64), "0000000000000001");
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(u8::hex_digits(), 2);
        assert_eq!(u16::hex_digits(), 4);
        assert_eq!(u32::hex_digits(), 8);
        assert_eq!(u64::hex_digits(), 16);
    }
}
