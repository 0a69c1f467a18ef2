use num_bigint::{BigInt, BigUint};

use crate::fixed::{require_natural, FixedNatural};
use crate::{Error, EXTENDED_TAG, MAX_DATA_LEN, MAX_DIRECT, MAX_LEN};

/// Meaning of the first byte of a compressed natural number.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Header {
    /// The byte is the value, in `[0, 127]`.
    Direct(u8),
    /// This many big endian data bytes follow, in `[0, 127]`.
    Extended(usize),
}

impl Header {
    #[inline]
    pub const fn from_byte(b: u8) -> Self {
        if b <= MAX_DIRECT {
            Header::Direct(b)
        } else {
            Header::Extended((b - EXTENDED_TAG) as usize)
        }
    }

    /// Returns the wire byte for this header.
    ///
    /// # Panics
    ///
    /// If a direct value or data length is above 127.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        match self {
            Header::Direct(v) => {
                assert!(v <= MAX_DIRECT);
                v
            }
            Header::Extended(n) => {
                assert!(n <= MAX_DATA_LEN);
                EXTENDED_TAG | n as u8
            }
        }
    }

    /// Number of bytes that follow the header byte.
    #[inline]
    pub const fn data_len(self) -> usize {
        match self {
            Header::Direct(_) => 0,
            Header::Extended(n) => n,
        }
    }
}

/// A single compressed natural number produced by `CompressedNatural::to_compressed_bytes()`.
#[derive(Copy, Clone)]
pub struct EncodedNatural {
    buf: [u8; MAX_LEN],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedNatural {
    fn direct(v: u8) -> Self {
        let mut enc = Self::default();
        enc.buf[0] = Header::Direct(v).to_byte();
        enc.len = 1;
        enc
    }

    fn extended<F: FixedNatural>(v: &F) -> Result<Self, Error> {
        let n = v.trimmed_len();
        if n > MAX_DATA_LEN {
            return Err(Error::TooLarge);
        }
        let mut enc = Self::default();
        enc.buf[0] = Header::Extended(n).to_byte();
        v.encode_trimmed(&mut enc.buf[1..=n]);
        enc.len = (n + 1) as u8;
        Ok(enc)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    pub fn header(&self) -> Header {
        Header::from_byte(self.buf[0])
    }

    /// Returns the number of bytes used to encode the value.
    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for EncodedNatural {
    fn default() -> Self {
        Self {
            buf: [0u8; MAX_LEN],
            len: 0,
        }
    }
}

impl AsRef<[u8]> for EncodedNatural {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for EncodedNatural {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EncodedNatural").field(&self.as_slice()).finish()
    }
}

/// Decodes the header and data bytes at the front of `buf` without building a value.
#[inline]
pub(crate) fn split_compressed(buf: &[u8]) -> Result<(Header, &[u8]), Error> {
    let tag = *buf.first().ok_or(Error::UnexpectedEob)?;
    let header = Header::from_byte(tag);
    let data = buf
        .get(1..1 + header.data_len())
        .ok_or(Error::UnexpectedEob)?;
    Ok((header, data))
}

/// Trait for natural numbers that can be written as compressed naturals.
///
/// Values below 128 are written as a single byte. Everything else is written as a header byte
/// `0x80 | n` followed by the `n` byte trimmed big endian representation, with `n <= 127`.
pub trait CompressedNatural: Sized {
    /// Encode `self` to an owned buffer and return it.
    /// Use `as_slice()` to access the encoded bytes.
    fn to_compressed_bytes(&self) -> Result<EncodedNatural, Error>;

    /// Build a value from a direct header byte.
    fn from_direct(v: u8) -> Self;

    /// Build a value from the data bytes following an extended header.
    fn from_data(data: &[u8]) -> Self;

    /// Returns the number of bytes required to encode `self`.
    #[inline]
    fn compressed_len(&self) -> Result<usize, Error> {
        Ok(self.to_compressed_bytes()?.len())
    }

    /// Encode `self` to `buf` and return the number of bytes written.
    ///
    /// Nothing is written unless the whole encoding fits.
    #[inline]
    fn encode_compressed(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let enc = self.to_compressed_bytes()?;
        let dst = buf.get_mut(..enc.len()).ok_or(Error::ShortBuffer)?;
        dst.copy_from_slice(enc.as_slice());
        Ok(enc.len())
    }

    /// Decode a value from the bytes in `buf` and return the value and number of bytes consumed.
    #[inline]
    fn decode_compressed(buf: &[u8]) -> Result<(Self, usize), Error> {
        let (header, data) = split_compressed(buf)?;
        Ok(match header {
            Header::Direct(v) => (Self::from_direct(v), 1),
            Header::Extended(n) => (Self::from_data(data), 1 + n),
        })
    }
}

macro_rules! impl_compressed {
    ($int:ty) => {
        impl CompressedNatural for $int {
            #[inline]
            fn to_compressed_bytes(&self) -> Result<EncodedNatural, Error> {
                if (0..=MAX_DIRECT as $int).contains(self) {
                    Ok(EncodedNatural::direct(*self as u8))
                } else {
                    EncodedNatural::extended(self)
                }
            }

            #[inline(always)]
            fn from_direct(v: u8) -> Self {
                v as $int
            }

            #[inline(always)]
            fn from_data(data: &[u8]) -> Self {
                <$int>::decode_fixed(data)
            }
        }
    };
}
// Negative signed values miss the direct range and take the extended path over their unsigned
// bits. For i8 this means any byte with the top bit set is always `[0x81, b]`.
impl_compressed!(u8);
impl_compressed!(u16);
impl_compressed!(u32);
impl_compressed!(u64);
impl_compressed!(u128);
impl_compressed!(usize);
impl_compressed!(i8);
impl_compressed!(i16);
impl_compressed!(i32);
impl_compressed!(i64);
impl_compressed!(i128);
impl_compressed!(isize);

impl CompressedNatural for BigUint {
    fn to_compressed_bytes(&self) -> Result<EncodedNatural, Error> {
        match u8::try_from(self) {
            Ok(v) if v <= MAX_DIRECT => Ok(EncodedNatural::direct(v)),
            _ => EncodedNatural::extended(self),
        }
    }

    fn from_direct(v: u8) -> Self {
        BigUint::from(v)
    }

    fn from_data(data: &[u8]) -> Self {
        BigUint::decode_fixed(data)
    }
}

impl CompressedNatural for BigInt {
    fn to_compressed_bytes(&self) -> Result<EncodedNatural, Error> {
        require_natural(self)?.to_compressed_bytes()
    }

    fn from_direct(v: u8) -> Self {
        BigInt::from(v)
    }

    fn from_data(data: &[u8]) -> Self {
        BigInt::from(BigUint::decode_fixed(data))
    }
}
