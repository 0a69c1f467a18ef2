//! Non-owning windows over byte buffers, with addressed coding at caller chosen offsets.

use std::ops::{Bound, RangeBounds};

use crate::compressed::CompressedNatural;
use crate::encapsulation::{encapsulate_into, unencapsulate};
use crate::fixed::FixedNatural;
use crate::Error;

/// A window of `len` bytes starting at `offset` in some buffer `B`.
///
/// `B` may be borrowed (`&[u8]`, `&mut [u8]`) or owned (`Vec<u8>`, `bytes::Bytes`). Views made
/// with [`ByteView::slice`] clone `B`, so with `&[u8]` or `Bytes` several views alias one
/// buffer without copying it.
#[derive(Copy, Clone, Debug)]
pub struct ByteView<B> {
    buf: B,
    offset: usize,
    len: usize,
}

impl ByteView<Vec<u8>> {
    /// Allocates a zeroed view of exactly `len` bytes.
    pub fn allocate(len: usize) -> Self {
        Self::new(vec![0u8; len])
    }
}

impl<B: AsRef<[u8]>> ByteView<B> {
    /// Creates a view covering all of `buf`.
    pub fn new(buf: B) -> Self {
        let len = buf.as_ref().len();
        Self {
            buf,
            offset: 0,
            len,
        }
    }

    /// Creates a view of `len` bytes at `offset`, failing if that runs past the end of `buf`.
    pub fn with_bounds(buf: B, offset: usize, len: usize) -> Result<Self, Error> {
        match offset.checked_add(len) {
            Some(end) if end <= buf.as_ref().len() => Ok(Self { buf, offset, len }),
            _ => Err(Error::UnexpectedEob),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the whole underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf.as_ref()[self.offset..self.offset + self.len]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Returns a sub-view over `range`, relative to the start of this view.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self, Error>
    where
        B: Clone,
    {
        let start = match range.start_bound() {
            Bound::Included(s) => *s,
            Bound::Excluded(s) => s.checked_add(1).ok_or(Error::UnexpectedEob)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(e) => e.checked_add(1).ok_or(Error::UnexpectedEob)?,
            Bound::Excluded(e) => *e,
            Bound::Unbounded => self.len,
        };
        if start > end || end > self.len {
            return Err(Error::UnexpectedEob);
        }
        Ok(Self {
            buf: self.buf.clone(),
            offset: self.offset + start,
            len: end - start,
        })
    }

    /// Copies this view to the front of `dst` and returns the number of bytes copied.
    pub fn copy_into<M>(&self, dst: &mut ByteView<M>) -> Result<usize, Error>
    where
        M: AsRef<[u8]> + AsMut<[u8]>,
    {
        let src = self.as_slice();
        let out = dst
            .as_mut_slice()
            .get_mut(..src.len())
            .ok_or(Error::ShortBuffer)?;
        out.copy_from_slice(src);
        Ok(src.len())
    }

    /// Decodes a compressed natural at `offset` within this view, returning it and the number of
    /// bytes it occupies.
    pub fn get_compressed_at<N: CompressedNatural>(
        &self,
        offset: usize,
    ) -> Result<(N, usize), Error> {
        let src = self.as_slice().get(offset..).ok_or(Error::UnexpectedEob)?;
        N::decode_compressed(src)
    }

    /// Decodes the `len` bytes at `offset` as a fixed width big endian value.
    pub fn get_fixed_at<N: FixedNatural>(&self, offset: usize, len: usize) -> Result<N, Error> {
        let src = self
            .as_slice()
            .get(offset..)
            .and_then(|rest| rest.get(..len))
            .ok_or(Error::UnexpectedEob)?;
        Ok(N::decode_fixed(src))
    }

    /// Returns a view over the encapsulated payload at `offset` without copying it, along with
    /// the total number of bytes the frame occupies.
    pub fn get_encapsulated_at(&self, offset: usize) -> Result<(Self, usize), Error>
    where
        B: Clone,
    {
        let src = self.as_slice().get(offset..).ok_or(Error::UnexpectedEob)?;
        let (payload, consumed) = unencapsulate(src)?;
        let start = offset + consumed - payload.len();
        Ok((self.slice(start..offset + consumed)?, consumed))
    }
}

impl<'a> ByteView<&'a [u8]> {
    /// Like `as_slice()`, but borrowed for the lifetime of the underlying buffer.
    pub fn as_borrowed(&self) -> &'a [u8] {
        let buf: &'a [u8] = self.buf;
        &buf[self.offset..self.offset + self.len]
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> ByteView<B> {
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let (start, end) = (self.offset, self.offset + self.len);
        &mut self.buf.as_mut()[start..end]
    }

    /// Sets every byte of the view to `b`.
    pub fn fill(&mut self, b: u8) {
        self.as_mut_slice().fill(b);
    }

    /// Encodes `v` at `offset` within this view and returns the number of bytes written.
    ///
    /// Fails with `ShortBuffer` without writing if the encoding does not fit.
    pub fn put_compressed_at<N: CompressedNatural>(
        &mut self,
        offset: usize,
        v: &N,
    ) -> Result<usize, Error> {
        let dst = self
            .as_mut_slice()
            .get_mut(offset..)
            .ok_or(Error::ShortBuffer)?;
        v.encode_compressed(dst)
    }

    /// Writes `v` as exactly `len` big endian bytes at `offset` and returns `len`.
    ///
    /// Values wider than `len` keep their low order bytes. Fails with `ShortBuffer` without
    /// writing if `len` bytes do not fit.
    pub fn put_fixed_at<N: FixedNatural>(
        &mut self,
        offset: usize,
        v: &N,
        len: usize,
    ) -> Result<usize, Error> {
        let dst = self
            .as_mut_slice()
            .get_mut(offset..)
            .and_then(|rest| rest.get_mut(..len))
            .ok_or(Error::ShortBuffer)?;
        v.encode_fixed(dst);
        Ok(len)
    }

    /// Encapsulates `payload` at `offset` within this view and returns the number of bytes
    /// written.
    pub fn put_encapsulated_at(&mut self, offset: usize, payload: &[u8]) -> Result<usize, Error> {
        let dst = self
            .as_mut_slice()
            .get_mut(offset..)
            .ok_or(Error::ShortBuffer)?;
        encapsulate_into(payload, dst)
    }
}

impl<B: AsRef<[u8]>> AsRef<[u8]> for ByteView<B> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<B: AsRef<[u8]>, C: AsRef<[u8]>> PartialEq<ByteView<C>> for ByteView<B> {
    fn eq(&self, other: &ByteView<C>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<B: AsRef<[u8]>> Eq for ByteView<B> {}
