use bytes::Buf;

use crate::compressed::CompressedNatural;
use crate::encapsulation::frame_bounds;
use crate::fixed::FixedNatural;
use crate::view::ByteView;
use crate::Error;

/// Consuming reader over a borrowed byte view.
///
/// Each successful read narrows `remaining` past the bytes it used. A failed read leaves the
/// cursor where it was.
///
/// ```
/// use compressed_natural::Cursor;
///
/// let input = [0x04, 0xff, 0xff, 0xff, 0xff, 0x05];
/// let mut cursor = Cursor::new(&input);
/// assert_eq!(cursor.take_encapsulated().unwrap(), &[0xff; 4]);
/// assert_eq!(cursor.take_compressed::<u32>().unwrap(), 5);
/// assert!(cursor.is_empty());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Cursor<'a> {
    remaining: ByteView<&'a [u8]>,
    consumed: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self::from_view(ByteView::new(buf))
    }

    pub fn from_view(view: ByteView<&'a [u8]>) -> Self {
        Self {
            remaining: view,
            consumed: 0,
        }
    }

    /// The unconsumed input.
    pub fn remaining_view(&self) -> ByteView<&'a [u8]> {
        self.remaining
    }

    /// Number of bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    fn consume(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let head = self.remaining.slice(..n)?.as_borrowed();
        self.remaining = self.remaining.slice(n..)?;
        self.consumed += n;
        Ok(head)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.consume(1)?[0])
    }

    /// Consumes exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], Error> {
        self.consume(n)
    }

    /// Consumes `len` bytes and decodes them as a fixed width big endian value.
    pub fn take_fixed<N: FixedNatural>(&mut self, len: usize) -> Result<N, Error> {
        Ok(N::decode_fixed(self.consume(len)?))
    }

    pub fn take_compressed<N: CompressedNatural>(&mut self) -> Result<N, Error> {
        let (v, len) = N::decode_compressed(self.remaining.as_borrowed())?;
        self.consume(len)?;
        Ok(v)
    }

    /// Consumes an encapsulated frame and returns its payload without copying.
    pub fn take_encapsulated(&mut self) -> Result<&'a [u8], Error> {
        let (header_len, payload_len) = frame_bounds(self.remaining.as_borrowed())?;
        self.consume(header_len)?;
        self.consume(payload_len)
    }
}

impl Buf for Cursor<'_> {
    fn remaining(&self) -> usize {
        self.remaining.len()
    }

    fn chunk(&self) -> &[u8] {
        self.remaining.as_borrowed()
    }

    fn advance(&mut self, cnt: usize) {
        if let Err(e) = self.consume(cnt) {
            panic!("cannot advance cursor by {}: {}", cnt, e);
        }
    }
}
