use std::io;

use crate::engine::CrcEngine;
use crate::word::CrcWord;

pub trait CrcDigest<T> {
    /// Update digest with data
    fn update(&mut self, data: &[u8]);

    /// Returns the CRC of everything passed to `update` so far
    fn digest(&self) -> T;
}

/// Running CRC over a borrowed engine.
///
/// Keeps the seed chaining in one place: each `update` feeds the previous
/// result back into [`CrcEngine::compute`]. The engine itself stays shared
/// and untouched, so many digests can run over one engine at once.
#[derive(Debug)]
pub struct Digest<'a, T: CrcWord, E: CrcEngine<T> + ?Sized> {
    engine: &'a E,
    seed: T,
    state: T,
}

impl<'a, T: CrcWord, E: CrcEngine<T> + ?Sized> Digest<'a, T, E> {
    pub fn new(engine: &'a E) -> Self {
        Self::with_seed(engine, T::ZERO)
    }

    pub fn with_seed(engine: &'a E, seed: T) -> Self {
        Self {
            engine,
            seed,
            state: seed,
        }
    }

    /// Restarts from the seed the digest was created with.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    pub fn seed(&self) -> T {
        self.seed
    }

    pub fn engine(&self) -> &'a E {
        self.engine
    }
}

impl<'a, T: CrcWord, E: CrcEngine<T> + ?Sized> CrcDigest<T> for Digest<'a, T, E> {
    fn update(&mut self, data: &[u8]) {
        self.state = self.engine.compute(data, self.state);
    }

    fn digest(&self) -> T {
        self.state
    }
}

impl<'a, T: CrcWord, E: CrcEngine<T> + ?Sized> io::Write for Digest<'a, T, E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::engine::{BitwiseCrc, TableCrc};
    use crate::shift::{ShiftLeft, ShiftRight};

    static CHECK_DATA: &[u8; 9] = b"123456789";

    #[test]
    fn test_update_in_parts() {
        let engine = TableCrc::<u16, ShiftLeft>::new(0x1021);
        let mut crc = Digest::new(&engine);
        crc.update(b"1234");
        crc.update(b"");
        crc.update(b"56789");
        assert_eq!(crc.digest(), 0x31C3);
    }

    #[test]
    fn test_reset() {
        let engine = BitwiseCrc::<u32, ShiftRight>::new(0x04C11DB7);
        let mut crc = Digest::with_seed(&engine, !0);
        crc.update(b"garbage");
        crc.reset();
        assert_eq!(crc.digest(), !0);
        crc.update(CHECK_DATA);
        assert_eq!(!crc.digest(), 0xCBF43926);
    }

    #[test]
    fn test_dyn_engine() {
        let engines: [Box<dyn CrcEngine<u16>>; 2] = [
            Box::new(BitwiseCrc::<u16, ShiftRight>::new(0x1021)),
            Box::new(TableCrc::<u16, ShiftRight>::new(0x1021)),
        ];
        for engine in &engines {
            let mut crc = Digest::new(engine.as_ref());
            crc.update(CHECK_DATA);
            assert_eq!(crc.digest(), 0x2189);
        }
    }

    #[test]
    fn test_write() {
        let engine = TableCrc::<u64, ShiftLeft>::new(0x42F0E1EBA9EA3693);
        let mut crc = Digest::new(&engine);
        crc.write_all(CHECK_DATA).unwrap();
        crc.flush().unwrap();
        assert_eq!(crc.digest(), 0x6C40DF5F0B497347);

        let mut crc = Digest::new(&engine);
        io::copy(&mut &CHECK_DATA[..], &mut crc).unwrap();
        assert_eq!(crc.digest(), 0x6C40DF5F0B497347);
    }
}
