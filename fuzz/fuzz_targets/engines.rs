#![no_main]
use libfuzzer_sys::fuzz_target;
use libgencrc::prelude::*;
use std::convert::TryInto;

fn check<S: Shifter>(polynomial: u32, seed: u32, data: &[u8]) {
    let bitwise = BitwiseCrc::<u32, S>::new(polynomial);
    let table = TableCrc::<u32, S>::new(polynomial);
    let split = data.len() / 2;
    let naive_result = bitwise.compute(data, seed);
    assert_eq!(naive_result, table.compute(data, seed));
    assert_eq!(
        naive_result,
        table.compute(&data[split..], table.compute(&data[..split], seed))
    );

    let narrow = BitwiseCrc::<u8, S>::new(polynomial as u8);
    assert_eq!(
        narrow.compute(data, seed as u8),
        TableCrc::<u8, S>::new(polynomial as u8).compute(data, seed as u8)
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() >= 8 {
        let polynomial = u32::from_le_bytes(data[..4].try_into().unwrap());
        let seed = u32::from_le_bytes(data[4..8].try_into().unwrap());
        let data = &data[8..];
        check::<ShiftLeft>(polynomial, seed, data);
        check::<ShiftRight>(polynomial, seed, data);
    }
});
