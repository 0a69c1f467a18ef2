#![no_main]

use compressed_natural::{CompressedBuf, Cursor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // attempts to decode all the data as a u64 error are ok, panics are not
    let mut src = data;
    let mut cursor = Cursor::new(data);
    while !src.is_empty() {
        let from_buf = src.get_compressed::<u64>();
        assert_eq!(from_buf, cursor.take_compressed::<u64>());
        if from_buf.is_err() {
            break;
        }
    }
});
