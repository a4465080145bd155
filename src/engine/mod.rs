use crate::shift::Direction;
use crate::word::{reverse, CrcWord};

pub mod bitwise;
pub mod table;

pub use bitwise::BitwiseCrc;
pub use table::TableCrc;

/// Constants derived once from the polynomial and the processing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcParams<T: CrcWord> {
    polynomial: T,
    direction: Direction,
    /// Polynomial as the register sees it, mirrored for LSB-first.
    divisor: T,
    /// Bit tested before every shift: top bit for MSB-first, bottom bit for LSB-first.
    mask: T,
    /// Shift that lines an input byte up with the byte the register consumes next.
    pack: u32,
}

impl<T: CrcWord> CrcParams<T> {
    pub fn new(polynomial: T, direction: Direction) -> Self {
        match direction {
            Direction::MsbFirst => Self {
                polynomial,
                direction,
                divisor: polynomial,
                mask: T::ONE.shift_left(T::BITS - 1),
                pack: T::BITS - 8,
            },
            Direction::LsbFirst => Self {
                polynomial,
                direction,
                divisor: reverse(polynomial),
                mask: T::ONE,
                pack: 0,
            },
        }
    }

    /// Polynomial as supplied, in conventional MSB-first notation.
    pub fn polynomial(&self) -> T {
        self.polynomial
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn divisor(&self) -> T {
        self.divisor
    }

    pub fn mask(&self) -> T {
        self.mask
    }

    pub fn pack(&self) -> u32 {
        self.pack
    }
}

/// A configured CRC algorithm.
///
/// Implementations are immutable after construction; the running CRC is
/// owned by the caller and threaded through [`compute`](Self::compute) as
/// the seed.
pub trait CrcEngine<T: CrcWord>: Send + Sync {
    /// Computes the CRC of `data` starting from `seed`.
    ///
    /// Feeding the result of one chunk as the seed of the next gives the same
    /// value as computing over the concatenated chunks.
    fn compute(&self, data: &[u8], seed: T) -> T;

    /// Computes the CRC of `data` starting from a zero register.
    fn checksum(&self, data: &[u8]) -> T {
        self.compute(data, T::ZERO)
    }

    fn params(&self) -> &CrcParams<T>;

    /// Short algorithm name, `bitwise` or `table`.
    fn name(&self) -> &'static str;

    fn polynomial(&self) -> T {
        self.params().polynomial()
    }

    fn direction(&self) -> Direction {
        self.params().direction()
    }
}
