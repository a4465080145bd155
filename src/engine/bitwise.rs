use core::marker::PhantomData;

use crate::engine::{CrcEngine, CrcParams};
use crate::shift::Shifter;
use crate::word::{to_hex, CrcWord};

/// CRC computed one bit at a time.
///
/// Needs no table, so construction is free and the engine is only a few
/// words large. Its output is the reference the table engine must match.
#[derive(Debug, Clone, Copy)]
pub struct BitwiseCrc<T: CrcWord, S: Shifter> {
    params: CrcParams<T>,
    shifter: PhantomData<S>,
}

impl<T: CrcWord, S: Shifter> BitwiseCrc<T, S> {
    /// Creates a new `BitwiseCrc` for `polynomial`, given in MSB-first notation
    pub fn new(polynomial: T) -> Self {
        let params = CrcParams::new(polynomial, S::DIRECTION);
        log::debug!(
            "bitwise crc{}: polynomial 0x{}, {}",
            T::BITS,
            to_hex(polynomial),
            S::DIRECTION
        );
        Self {
            params,
            shifter: PhantomData,
        }
    }

    /// Folds one input byte into `register`, eight conditional shift/xor steps.
    #[inline]
    pub(crate) fn update_byte(&self, mut register: T, byte: u8) -> T {
        let CrcParams {
            divisor, mask, pack, ..
        } = self.params;

        register ^= T::from_byte(byte).shift_left(pack);
        for _ in 0..8 {
            if register & mask != T::ZERO {
                register = S::shift(register, 1) ^ divisor;
            } else {
                register = S::shift(register, 1);
            }
        }
        register
    }
}

impl<T: CrcWord, S: Shifter> CrcEngine<T> for BitwiseCrc<T, S> {
    fn compute(&self, data: &[u8], seed: T) -> T {
        data.iter()
            .fold(seed, |register, &byte| self.update_byte(register, byte))
    }

    fn params(&self) -> &CrcParams<T> {
        &self.params
    }

    fn name(&self) -> &'static str {
        "bitwise"
    }
}
