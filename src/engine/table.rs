use crate::engine::{BitwiseCrc, CrcEngine, CrcParams};
use crate::shift::Shifter;
use crate::word::{to_hex, CrcWord};

pub type LookupTable<T> = [T; 256];

/// CRC computed one byte at a time through a 256 entry lookup table.
///
/// The table is built once in [`new`](Self::new) and never changes, which
/// replaces the eight shift/xor steps per byte of [`BitwiseCrc`] with one
/// lookup.
#[derive(Debug, Clone)]
pub struct TableCrc<T: CrcWord, S: Shifter> {
    bitwise: BitwiseCrc<T, S>,
    lookup_table: LookupTable<T>,
}

impl<T: CrcWord, S: Shifter> TableCrc<T, S> {
    /// Creates a new `TableCrc` for `polynomial`, given in MSB-first notation
    pub fn new(polynomial: T) -> Self {
        Self::from_bitwise(BitwiseCrc::new(polynomial))
    }

    /// Builds the table from a bitwise engine: entry `i` is the CRC of the
    /// single byte `i` from a zero register.
    pub fn from_bitwise(bitwise: BitwiseCrc<T, S>) -> Self {
        let lookup_table = Self::generate_lookup_table(&bitwise);
        log::debug!(
            "table crc{}: polynomial 0x{}, {}, table[1] = 0x{}",
            T::BITS,
            to_hex(bitwise.polynomial()),
            S::DIRECTION,
            to_hex(lookup_table[1])
        );
        Self {
            bitwise,
            lookup_table,
        }
    }

    fn generate_lookup_table(bitwise: &BitwiseCrc<T, S>) -> LookupTable<T> {
        core::array::from_fn(|index| bitwise.update_byte(T::ZERO, index as u8))
    }

    /// Read-only view of the precomputed table.
    pub fn lookup_table(&self) -> &LookupTable<T> {
        &self.lookup_table
    }
}

impl<T: CrcWord, S: Shifter> CrcEngine<T> for TableCrc<T, S> {
    fn compute(&self, data: &[u8], seed: T) -> T {
        let pack = self.bitwise.params().pack();
        let mut crc = seed;
        for &b in data {
            let index = (crc.shift_right(pack).low_byte() ^ b) as usize;
            crc = S::shift(crc, 8) ^ self.lookup_table[index];
        }
        crc
    }

    fn params(&self) -> &CrcParams<T> {
        self.bitwise.params()
    }

    fn name(&self) -> &'static str {
        "table"
    }
}
