//! Chunked CRC computation over [`std::io::Read`] sources.
//!
//! Files and sockets are read in fixed-size chunks and the CRC of each chunk
//! seeds the next one, so memory use stays at one buffer whatever the input
//! size.

use std::io::{self, ErrorKind, Read};

use crate::engine::CrcEngine;
use crate::word::{to_hex, CrcWord};

/// Buffer size used when the caller has no preference.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Computes the CRC of everything `reader` yields, starting from `seed`.
///
/// Returns the CRC together with the number of bytes consumed.
pub fn compute_reader<T, E, R>(
    engine: &E,
    mut reader: R,
    seed: T,
    chunk_size: usize,
) -> io::Result<(T, u64)>
where
    T: CrcWord,
    E: CrcEngine<T> + ?Sized,
    R: Read,
{
    if chunk_size == 0 {
        return Err(io::Error::new(
            ErrorKind::InvalidInput,
            "chunk size must be greater than zero",
        ));
    }

    let mut buffer = vec![0u8; chunk_size];
    let mut crc = seed;
    let mut total = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        crc = engine.compute(&buffer[..read], crc);
        total += read as u64;
        log::trace!("chunk of {read} bytes, crc 0x{}", to_hex(crc));
    }

    Ok((crc, total))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::engine::{BitwiseCrc, TableCrc};
    use crate::shift::{ShiftLeft, ShiftRight};

    /// Hands out at most `limit` bytes per call and fails with
    /// `Interrupted` every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        limit: usize,
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            let n = self.limit.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_chunk_sizes() {
        let engine = BitwiseCrc::<u16, ShiftRight>::new(0x1021);
        for chunk_size in [1, 2, 3, 8, 9, 64, DEFAULT_CHUNK_SIZE] {
            let (crc, total) =
                compute_reader(&engine, Cursor::new(b"123456789"), 0, chunk_size).unwrap();
            assert_eq!(crc, 0x2189);
            assert_eq!(total, 9);
        }
    }

    #[test]
    fn test_short_and_interrupted_reads() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
        let engine = TableCrc::<u32, ShiftLeft>::new(0x04C11DB7);
        let reader = Trickle {
            data: &data,
            limit: 7,
            interrupt: false,
        };
        let (crc, total) = compute_reader(&engine, reader, !0, 100).unwrap();
        assert_eq!(crc, engine.compute(&data, !0));
        assert_eq!(total, data.len() as u64);
    }

    #[test]
    fn test_empty_reader() {
        let engine = TableCrc::<u8, ShiftLeft>::new(0x07);
        let (crc, total) = compute_reader(&engine, io::empty(), 0x3C, 16).unwrap();
        assert_eq!(crc, 0x3C);
        assert_eq!(total, 0);
    }

    #[test]
    fn test_zero_chunk_size() {
        let engine = TableCrc::<u8, ShiftLeft>::new(0x07);
        let err = compute_reader(&engine, io::empty(), 0, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
