//! Length prefixed framing of opaque payloads.
//!
//! A frame is the compressed natural encoding of the payload length followed by the payload
//! bytes. There is no padding or checksum.

use bytes::buf::Chain;
use bytes::{Buf, Bytes};

use crate::compressed::{CompressedNatural, EncodedNatural};
use crate::Error;

/// Returns the compressed length header for a payload of `payload_len` bytes.
#[inline]
pub fn encapsulation_header(payload_len: usize) -> EncodedNatural {
    // A usize never needs more than 16 data bytes, so this cannot fail.
    match payload_len.to_compressed_bytes() {
        Ok(enc) => enc,
        Err(_) => unreachable!("usize lengths always fit a compressed header"),
    }
}

/// Returns the total frame size for a payload of `payload_len` bytes.
#[inline]
pub fn encapsulated_len(payload_len: usize) -> usize {
    encapsulation_header(payload_len).len() + payload_len
}

/// Frames `payload` into a newly allocated buffer.
pub fn encapsulate(payload: &[u8]) -> Vec<u8> {
    let header = encapsulation_header(payload.len());
    let mut out = Vec::with_capacity(header.len() + payload.len());
    out.extend_from_slice(header.as_slice());
    out.extend_from_slice(payload);
    out
}

/// Frames `payload` into the front of `dst` and returns the number of bytes written.
///
/// Fails with `ShortBuffer`, leaving `dst` untouched, if the frame does not fit.
pub fn encapsulate_into(payload: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    let header = encapsulation_header(payload.len());
    let total = header.len() + payload.len();
    let dst = dst.get_mut(..total).ok_or(Error::ShortBuffer)?;
    let (head, body) = dst.split_at_mut(header.len());
    head.copy_from_slice(header.as_slice());
    body.copy_from_slice(payload);
    Ok(total)
}

/// Frames `payload` as a header chained to the payload itself, without copying the payload.
///
/// ```
/// use bytes::{Buf, Bytes};
/// use compressed_natural::encapsulate_chain;
///
/// let mut frame = encapsulate_chain(Bytes::from_static(b"abc"));
/// assert_eq!(frame.remaining(), 4);
/// assert_eq!(frame.copy_to_bytes(4).as_ref(), b"\x03abc");
/// ```
pub fn encapsulate_chain<B: Buf>(payload: B) -> Chain<Bytes, B> {
    let header = encapsulation_header(payload.remaining());
    Bytes::copy_from_slice(header.as_slice()).chain(payload)
}

/// Returns `(header_len, payload_len)` for the frame at the front of `buf`, checking that the
/// whole payload is present.
pub(crate) fn frame_bounds(buf: &[u8]) -> Result<(usize, usize), Error> {
    let (payload_len, header_len) = usize::decode_compressed(buf)?;
    if buf.len() - header_len < payload_len {
        return Err(Error::UnexpectedEob);
    }
    Ok((header_len, payload_len))
}

/// Reads the frame at the front of `src`, returning the payload without copying it and the total
/// number of bytes the frame occupies.
pub fn unencapsulate(src: &[u8]) -> Result<(&[u8], usize), Error> {
    let (header_len, payload_len) = frame_bounds(src)?;
    let end = header_len + payload_len;
    Ok((&src[header_len..end], end))
}

/// Reads the frame at the front of `src` and copies its payload to the front of `dst`.
///
/// Returns `(payload_len, consumed)`. Fails with `ShortBuffer` if the payload is longer than
/// `dst`.
pub fn unencapsulate_into(src: &[u8], dst: &mut [u8]) -> Result<(usize, usize), Error> {
    let (payload, consumed) = unencapsulate(src)?;
    dst.get_mut(..payload.len())
        .ok_or(Error::ShortBuffer)?
        .copy_from_slice(payload);
    Ok((payload.len(), consumed))
}
