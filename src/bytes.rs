//! Traits that allow writing/reading compressed naturals and encapsulated payloads on
//! `bytes::{BufMut,Buf}`.

use crate::compressed::{CompressedNatural, Header};
use crate::encapsulation::encapsulation_header;
use crate::fixed::{with_fixed_bytes, FixedNatural};
use crate::{Error, MAX_DATA_LEN};

use bytes::{Buf, BufMut, Bytes};

/// Extension for `bytes::BufMut` to write compressed naturals and encapsulated payloads.
///
/// Both methods check `remaining_mut()` before writing, so nothing is written on error.
pub trait CompressedBufMut {
    /// Writes a compressed natural and returns the number of bytes written.
    fn put_compressed<N: CompressedNatural>(&mut self, v: &N) -> Result<usize, Error>;

    /// Writes `v` as exactly `len` big endian bytes and returns `len`.
    ///
    /// Values wider than `len` keep their low order bytes.
    fn put_fixed<N: FixedNatural>(&mut self, v: &N, len: usize) -> Result<usize, Error>;

    /// Writes the length header followed by `payload` and returns the number of bytes written.
    fn put_encapsulated(&mut self, payload: &[u8]) -> Result<usize, Error>;
}

impl<Inner: BufMut> CompressedBufMut for Inner {
    #[inline]
    fn put_compressed<N: CompressedNatural>(&mut self, v: &N) -> Result<usize, Error> {
        let enc = v.to_compressed_bytes()?;
        if self.remaining_mut() < enc.len() {
            return Err(Error::ShortBuffer);
        }
        self.put_slice(enc.as_slice());
        Ok(enc.len())
    }

    fn put_fixed<N: FixedNatural>(&mut self, v: &N, len: usize) -> Result<usize, Error> {
        if self.remaining_mut() < len {
            return Err(Error::ShortBuffer);
        }
        with_fixed_bytes(v, len, |bytes| self.put_slice(bytes));
        Ok(len)
    }

    #[inline]
    fn put_encapsulated(&mut self, payload: &[u8]) -> Result<usize, Error> {
        let header = encapsulation_header(payload.len());
        let total = header.len() + payload.len();
        if self.remaining_mut() < total {
            return Err(Error::ShortBuffer);
        }
        self.put_slice(header.as_slice());
        self.put_slice(payload);
        Ok(total)
    }
}

fn get_compressed_slow<N: CompressedNatural, B: Buf>(buf: &mut B) -> Result<N, Error> {
    let header = Header::from_byte(buf.chunk()[0]);
    let n = header.data_len();
    if buf.remaining() < 1 + n {
        return Err(Error::UnexpectedEob);
    }
    buf.advance(1);
    Ok(match header {
        Header::Direct(v) => N::from_direct(v),
        Header::Extended(_) => {
            let mut data = [0u8; MAX_DATA_LEN];
            buf.copy_to_slice(&mut data[..n]);
            N::from_data(&data[..n])
        }
    })
}

/// Extension for `bytes::Buf` to read compressed naturals and encapsulated payloads.
///
/// When the encoded bytes are contiguous in `chunk()` a failed read leaves the buffer where it
/// was. A payload split across chunks may leave its length header consumed.
pub trait CompressedBuf {
    /// Reads a compressed natural from the buffer. After a successful read, the buffer will be
    /// advanced by the number of bytes read.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_natural::{CompressedBufMut, CompressedBuf};
    ///
    /// let to_encode = [1u16, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_compressed(v).unwrap();
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   let decoded = buf.get_compressed::<u16>().unwrap();
    ///   assert_eq!(decoded, *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedEob` error if the buffer is empty or if the buffer is not long
    /// enough to contain the data bytes declared by the header.
    fn get_compressed<N: CompressedNatural>(&mut self) -> Result<N, Error>;

    /// Reads `len` bytes as a fixed width big endian value.
    fn get_fixed<N: FixedNatural>(&mut self, len: usize) -> Result<N, Error>;

    /// Reads an encapsulated payload. For a `Bytes` source this does not copy the payload.
    fn get_encapsulated(&mut self) -> Result<Bytes, Error>;

    /// Reads an encapsulated payload into the front of `dst` and returns its length.
    ///
    /// Returns `ShortBuffer` if the payload is longer than `dst`.
    fn get_encapsulated_into(&mut self, dst: &mut [u8]) -> Result<usize, Error>;

    /// Returns an iterator over compressed naturals in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use compressed_natural::{CompressedBufMut, CompressedBuf};
    ///
    /// let to_encode = [1i16, 2, -30, -24_000];
    /// let mut buf = vec![];
    /// for n in to_encode.iter() {
    ///     buf.put_compressed(n).unwrap();
    /// }
    /// let mut result = vec![];
    /// let mut decode_data = buf.as_slice();
    /// for decoded in decode_data.iter_compressed::<i16>() {
    ///     result.push(decoded.unwrap());
    /// }
    /// assert_eq!(to_encode, result.as_slice());
    /// ```
    fn iter_compressed<N: CompressedNatural>(&mut self) -> CompressedIter<'_, Self, N>
    where
        Self: Sized,
    {
        CompressedIter::new(self)
    }
}

impl<Inner: Buf> CompressedBuf for Inner {
    #[inline]
    fn get_compressed<N: CompressedNatural>(&mut self) -> Result<N, Error> {
        if !self.has_remaining() {
            return Err(Error::UnexpectedEob);
        }

        match N::decode_compressed(self.chunk()) {
            Ok((v, len)) => {
                self.advance(len);
                Ok(v)
            }
            Err(_) => get_compressed_slow(self),
        }
    }

    fn get_fixed<N: FixedNatural>(&mut self, len: usize) -> Result<N, Error> {
        if self.remaining() < len {
            return Err(Error::UnexpectedEob);
        }
        if self.chunk().len() >= len {
            let v = N::decode_fixed(&self.chunk()[..len]);
            self.advance(len);
            Ok(v)
        } else {
            Ok(N::decode_fixed(&self.copy_to_bytes(len)))
        }
    }

    fn get_encapsulated(&mut self) -> Result<Bytes, Error> {
        if let Ok((payload_len, header_len)) = usize::decode_compressed(self.chunk()) {
            if self.remaining() - header_len < payload_len {
                return Err(Error::UnexpectedEob);
            }
            self.advance(header_len);
            return Ok(self.copy_to_bytes(payload_len));
        }

        let payload_len: usize = self.get_compressed()?;
        if self.remaining() < payload_len {
            return Err(Error::UnexpectedEob);
        }
        Ok(self.copy_to_bytes(payload_len))
    }

    fn get_encapsulated_into(&mut self, dst: &mut [u8]) -> Result<usize, Error> {
        if let Ok((payload_len, header_len)) = usize::decode_compressed(self.chunk()) {
            if self.remaining() - header_len < payload_len {
                return Err(Error::UnexpectedEob);
            }
            let dst = dst.get_mut(..payload_len).ok_or(Error::ShortBuffer)?;
            self.advance(header_len);
            self.copy_to_slice(dst);
            return Ok(payload_len);
        }

        let payload_len: usize = self.get_compressed()?;
        if self.remaining() < payload_len {
            return Err(Error::UnexpectedEob);
        }
        let dst = dst.get_mut(..payload_len).ok_or(Error::ShortBuffer)?;
        self.copy_to_slice(dst);
        Ok(payload_len)
    }
}

/// An iterator over compressed natural values in a `Buf`.
pub struct CompressedIter<'a, B, N> {
    buf: &'a mut B,
    _marker: std::marker::PhantomData<N>,
}

impl<'a, B, N> CompressedIter<'a, B, N> {
    pub fn new(buf: &'a mut B) -> Self {
        Self {
            buf,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<B, N> Iterator for CompressedIter<'_, B, N>
where
    B: Buf,
    N: CompressedNatural,
{
    type Item = Result<N, Error>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.has_remaining() {
            Some(self.buf.get_compressed())
        } else {
            None
        }
    }
}
