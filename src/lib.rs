//! This module implements a self-describing coding for natural numbers and for length prefixed
//! byte payloads.
//!
//! A compressed natural starts with a header byte. Header values in `[0, 127]` are the value
//! itself. Header values in `[128, 255]` announce `header - 128` data bytes that follow and hold
//! the big endian value with leading zeros removed:
//!
//! | header        | meaning                                             |
//! |---------------|-----------------------------------------------------|
//! | `0x00..=0x7f` | value = header, 1 byte total                        |
//! | `0x80..=0xff` | `n = header - 0x80` data bytes follow, `1 + n` total |
//!
//! At most 127 data bytes can follow, so values needing more than 127 bytes are rejected with
//! [`Error::TooLarge`]. Fixed width integers are supported for every width, with signed values
//! coded as the unsigned integer with the same bits, along with `num_bigint::BigUint` and
//! `num_bigint::BigInt` (which must not be negative).
//!
//! An encapsulated payload is the compressed natural length of the payload followed by the
//! payload bytes.
//!
//! `CompressedNatural` includes methods to code values directly to/from byte slices; traits are
//! provided to extend `bytes::{Buf,BufMut}`, functions handle `std::io::{Write,Read}`, and
//! [`ByteView`] and [`Cursor`] code at fixed offsets and as consuming reads over borrowed
//! buffers. Every sink writes exactly the same bytes.
//!
//! ```
//! use bytes::Buf;
//! use compressed_natural::{CompressedBuf, CompressedBufMut, CompressedNatural};
//!
//! // value_buf is the maximum size needed to encode a u64.
//! let mut value_buf = [0u8; 9];
//! assert_eq!(167894u64.encode_compressed(&mut value_buf).unwrap(), 4);
//! assert_eq!(&value_buf[..4], &[0x83, 0x02, 0x8f, 0xd6]);
//! assert_eq!((167894u64, 4), u64::decode_compressed(&value_buf).unwrap());
//!
//! let mut buf_mut = vec![];
//! buf_mut.put_encapsulated(&[0xff; 4]).unwrap();
//! for v in (0..1000u32).step_by(3) {
//!   buf_mut.put_compressed(&v).unwrap();
//! }
//!
//! // NB: need a mutable slice to use as CompressedBuf
//! let mut buf = buf_mut.as_slice();
//! assert_eq!(buf.get_encapsulated().unwrap().as_ref(), &[0xff; 4]);
//! while let Ok(v) = buf.get_compressed::<u32>() {
//!   assert_eq!(v % 3, 0);
//! }
//! assert!(!buf.has_remaining());
//! ```
mod bytes;
mod compressed;
mod cursor;
mod encapsulation;
mod error;
mod fixed;
mod io;
mod view;

pub use crate::bytes::{CompressedBuf, CompressedBufMut, CompressedIter};
pub use crate::compressed::{CompressedNatural, EncodedNatural, Header};
pub use crate::cursor::Cursor;
pub use crate::encapsulation::{
    encapsulate, encapsulate_chain, encapsulate_into, encapsulated_len, encapsulation_header,
    unencapsulate, unencapsulate_into,
};
pub use crate::error::Error;
pub use crate::fixed::{first_non_zero, require_natural, trim_leading_zeros, FixedNatural};
pub use crate::io::{
    read_compressed, read_compressed_buf, read_encapsulated, read_encapsulated_into, read_fixed,
    write_compressed, write_encapsulated, write_fixed,
};
pub use crate::view::ByteView;

/// Largest value written directly as the header byte.
pub const MAX_DIRECT: u8 = 0x7f;

/// Bit set in a header byte that announces trailing data bytes.
pub const EXTENDED_TAG: u8 = 0x80;

/// Maximum number of data bytes that may follow a header byte.
pub const MAX_DATA_LEN: usize = (u8::MAX - EXTENDED_TAG) as usize;

/// Maximum number of bytes a single compressed natural will occupy.
pub const MAX_LEN: usize = 1 + MAX_DATA_LEN;
