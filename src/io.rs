//! Extensions to `std::io` traits to support reading/writing compressed naturals and
//! encapsulated payloads.
use std::io::{BufRead, Error, ErrorKind, Read, Result, Write};

use crate::compressed::{CompressedNatural, Header};
use crate::encapsulation::encapsulation_header;
use crate::fixed::{with_fixed_bytes, FixedNatural};
use crate::{MAX_DATA_LEN, MAX_LEN};

impl From<crate::Error> for Error {
    fn from(value: crate::Error) -> Self {
        let kind = match value {
            crate::Error::UnexpectedEob => ErrorKind::UnexpectedEof,
            crate::Error::ShortBuffer => ErrorKind::WriteZero,
            crate::Error::Negative | crate::Error::TooLarge => ErrorKind::InvalidInput,
        };
        Error::new(kind, value)
    }
}

/// Compress a natural and write it to `w`. Returns the number of bytes written.
///
/// Nothing is written if the value cannot be encoded.
#[inline]
pub fn write_compressed<N: CompressedNatural>(v: &N, w: &mut impl Write) -> Result<usize> {
    let enc = v.to_compressed_bytes()?;
    w.write_all(enc.as_slice())?;
    Ok(enc.len())
}

/// Read and decode a compressed natural from `r`.
/// Prefer `read_compressed_buf()` wherever possible as it should be more efficient.
#[inline]
pub fn read_compressed<N: CompressedNatural>(r: &mut impl Read) -> Result<N> {
    let mut tag = [0u8; 1];
    r.read_exact(&mut tag)?;
    match Header::from_byte(tag[0]) {
        Header::Direct(v) => Ok(N::from_direct(v)),
        Header::Extended(n) => {
            let mut data = [0u8; MAX_DATA_LEN];
            r.read_exact(&mut data[..n])?;
            Ok(N::from_data(&data[..n]))
        }
    }
}

/// Read and decode a compressed natural from `r`.
#[inline]
pub fn read_compressed_buf<N: CompressedNatural>(r: &mut impl BufRead) -> Result<N> {
    let buf = r.fill_buf()?;
    match N::decode_compressed(buf) {
        Ok((v, len)) => {
            r.consume(len);
            Ok(v)
        }
        Err(_) => read_compressed(r),
    }
}

/// Write `v` as exactly `len` big endian bytes to `w`. Returns `len`.
///
/// Values wider than `len` keep their low order bytes.
pub fn write_fixed<N: FixedNatural>(v: &N, len: usize, w: &mut impl Write) -> Result<usize> {
    with_fixed_bytes(v, len, |bytes| w.write_all(bytes))?;
    Ok(len)
}

/// Read exactly `len` bytes from `r` and decode them as a fixed width big endian value.
pub fn read_fixed<N: FixedNatural>(r: &mut impl Read, len: usize) -> Result<N> {
    if len <= MAX_LEN {
        let mut data = [0u8; MAX_LEN];
        r.read_exact(&mut data[..len])?;
        return Ok(N::decode_fixed(&data[..len]));
    }
    let mut data = Vec::new();
    r.by_ref().take(len as u64).read_to_end(&mut data)?;
    if data.len() < len {
        return Err(crate::Error::UnexpectedEob.into());
    }
    Ok(N::decode_fixed(&data))
}

/// Write the length header followed by `payload` to `w`. Returns the number of bytes written.
pub fn write_encapsulated(payload: &[u8], w: &mut impl Write) -> Result<usize> {
    let header = encapsulation_header(payload.len());
    w.write_all(header.as_slice())?;
    w.write_all(payload)?;
    Ok(header.len() + payload.len())
}

/// Read an encapsulated payload from `r`.
///
/// The payload is read through `Read::take()`, so the allocation grows with the bytes actually
/// read rather than the declared length.
pub fn read_encapsulated(r: &mut impl Read) -> Result<Vec<u8>> {
    let len: usize = read_compressed(r)?;
    let mut payload = Vec::new();
    r.by_ref().take(len as u64).read_to_end(&mut payload)?;
    if payload.len() < len {
        return Err(crate::Error::UnexpectedEob.into());
    }
    Ok(payload)
}

/// Read an encapsulated payload from `r` into the front of `dst` and return its length.
///
/// Fails with `InvalidInput` if the payload is longer than `dst`; the payload is left unread.
pub fn read_encapsulated_into(r: &mut impl Read, dst: &mut [u8]) -> Result<usize> {
    let len: usize = read_compressed(r)?;
    let dst = dst
        .get_mut(..len)
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, crate::Error::ShortBuffer))?;
    r.read_exact(dst)?;
    Ok(len)
}
