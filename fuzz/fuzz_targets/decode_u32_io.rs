#![no_main]

use std::io::BufReader;

use compressed_natural::{
    read_compressed, read_compressed_buf, read_fixed, CompressedNatural, FixedNatural,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The plain and buffered readers must agree on every value and on where decoding stops.
    let mut plain = data;
    let mut buffered = BufReader::with_capacity(7, data);
    loop {
        let a = read_compressed::<u32>(&mut plain);
        let b = read_compressed_buf::<u32>(&mut buffered);
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => {
                assert_eq!(a.kind(), b.kind());
                break;
            }
            (a, b) => panic!("readers disagree: {:?} vs {:?}", a, b),
        }
    }

    // A stream read matches the slice decoder for the first value.
    if let Ok((v, len)) = u32::decode_compressed(data) {
        let mut src = data;
        assert_eq!(read_compressed::<u32>(&mut src).ok(), Some(v));
        assert_eq!(data.len() - src.len(), len);
    }

    // Fixed width stream reads fold the same way as the slice decoder.
    if let Some((&width, rest)) = data.split_first() {
        let width = usize::from(width);
        let mut src = rest;
        match read_fixed::<u32>(&mut src, width) {
            Ok(v) => assert_eq!(v, u32::decode_fixed(&rest[..width])),
            Err(_) => assert!(rest.len() < width),
        }
    }
});
