use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::word::CrcWord;

/// Order in which the bits of every input byte are fed into the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Most significant bit first, register shifts left.
    MsbFirst,
    /// Least significant bit first, register shifts right.
    LsbFirst,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::MsbFirst => f.write_str("msb-first"),
            Direction::LsbFirst => f.write_str("lsb-first"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msb" | "msb-first" | "left" => Ok(Direction::MsbFirst),
            "lsb" | "lsb-first" | "right" => Ok(Direction::LsbFirst),
            _ => Err(ParseError::Direction(s.to_owned())),
        }
    }
}

/// Register shift in one fixed direction.
///
/// Both engines are generic over a `Shifter`, so the direction is chosen by
/// type and the shift gets inlined into the hot loop.
pub trait Shifter: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const DIRECTION: Direction;

    fn shift<T: CrcWord>(value: T, bits: u32) -> T;
}

/// MSB-first processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftLeft;

/// LSB-first processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftRight;

impl Shifter for ShiftLeft {
    const DIRECTION: Direction = Direction::MsbFirst;

    #[inline(always)]
    fn shift<T: CrcWord>(value: T, bits: u32) -> T {
        value.shift_left(bits)
    }
}

impl Shifter for ShiftRight {
    const DIRECTION: Direction = Direction::LsbFirst;

    #[inline(always)]
    fn shift<T: CrcWord>(value: T, bits: u32) -> T {
        value.shift_right(bits)
    }
}
