#![no_main]

use compressed_natural::{encapsulate, read_encapsulated, unencapsulate, CompressedBuf};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // arbitrary input must decode the same way from a slice, a buf and a stream
    let from_slice = unencapsulate(data);
    let mut buf = data;
    let from_buf = buf.get_encapsulated();
    let mut stream = data;
    let from_stream = read_encapsulated(&mut stream);
    match from_slice {
        Ok((payload, consumed)) => {
            assert_eq!(from_buf.unwrap().as_ref(), payload);
            assert_eq!(from_stream.unwrap(), payload);
            assert_eq!(data.len() - buf.len(), consumed);
            let frame = encapsulate(payload);
            assert_eq!(unencapsulate(&frame), Ok((payload, frame.len())));
        }
        Err(_) => {
            assert!(from_buf.is_err());
            assert!(from_stream.is_err());
        }
    }
});
