//! Fixed width big endian coding of natural numbers.
//!
//! Widths that do not match the native width of the type are not an error. Encoding into fewer
//! bytes than the value needs keeps only the low order bytes, and decoding more bytes than the
//! type holds folds the high bytes in with the same shift-accumulate rule, wrapping modulo
//! `2^bits`. Fixed width wire fields rely on this, so it is deliberately left unchecked.

use num_bigint::{BigInt, BigUint, Sign};

use crate::{Error, MAX_LEN};

/// Returns the index of the first non-zero byte in `bytes`, or `bytes.len()` if every byte is
/// zero.
#[inline]
pub fn first_non_zero(bytes: &[u8]) -> usize {
    bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len())
}

/// Strips leading zero bytes. An all-zero input trims to an empty slice, which is how the value
/// zero is represented with no payload bytes.
#[inline]
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    &bytes[first_non_zero(bytes)..]
}

/// Checks that `value` is a natural number and converts it to its unsigned form.
pub fn require_natural(value: &BigInt) -> Result<BigUint, Error> {
    match value.sign() {
        Sign::Minus => Err(Error::Negative),
        _ => Ok(value.magnitude().clone()),
    }
}

/// Natural numbers with a big endian representation.
pub trait FixedNatural: Sized {
    /// Writes `self` big endian into exactly `dst.len()` bytes.
    ///
    /// Shorter values are left padded with zeros; longer ones keep only their low order bytes.
    fn encode_fixed(&self, dst: &mut [u8]);

    /// Reads a value by big endian accumulation over every byte of `src`. An empty `src`
    /// decodes to zero.
    fn decode_fixed(src: &[u8]) -> Self;

    /// Returns the number of bytes in the trimmed representation of `self`; 0 for zero.
    fn trimmed_len(&self) -> usize;

    /// Writes the trimmed representation of `self` to the front of `dst` and returns its length.
    ///
    /// # Panics
    ///
    /// If `self.trimmed_len() > dst.len()`.
    fn encode_trimmed(&self, dst: &mut [u8]) -> usize;
}

/// Encodes `v` into `len` bytes and hands them to `f`. Widths up to `MAX_LEN` stay on the stack.
#[inline]
pub(crate) fn with_fixed_bytes<N, R>(v: &N, len: usize, f: impl FnOnce(&[u8]) -> R) -> R
where
    N: FixedNatural,
{
    let mut stack = [0u8; MAX_LEN];
    let mut heap: Vec<u8>;
    let dst = if len <= MAX_LEN {
        &mut stack[..len]
    } else {
        heap = vec![0u8; len];
        &mut heap[..]
    };
    v.encode_fixed(dst);
    f(dst)
}

#[inline]
fn fill_fixed(be: &[u8], dst: &mut [u8]) {
    if dst.len() >= be.len() {
        let pad = dst.len() - be.len();
        dst[..pad].fill(0);
        dst[pad..].copy_from_slice(be);
    } else {
        dst.copy_from_slice(&be[be.len() - dst.len()..]);
    }
}

#[inline]
fn fold_be(src: &[u8]) -> u128 {
    src.iter().fold(0u128, |acc, b| (acc << 8) | u128::from(*b))
}

macro_rules! impl_fixed_unsigned {
    ($uint:ty) => {
        impl FixedNatural for $uint {
            #[inline]
            fn encode_fixed(&self, dst: &mut [u8]) {
                fill_fixed(&self.to_be_bytes(), dst);
            }

            #[inline]
            fn decode_fixed(src: &[u8]) -> Self {
                fold_be(src) as $uint
            }

            #[inline]
            fn trimmed_len(&self) -> usize {
                (<$uint>::BITS - self.leading_zeros()).div_ceil(8) as usize
            }

            #[inline]
            fn encode_trimmed(&self, dst: &mut [u8]) -> usize {
                let be = self.to_be_bytes();
                let trimmed = trim_leading_zeros(&be);
                dst[..trimmed.len()].copy_from_slice(trimmed);
                trimmed.len()
            }
        }
    };
}
impl_fixed_unsigned!(u8);
impl_fixed_unsigned!(u16);
impl_fixed_unsigned!(u32);
impl_fixed_unsigned!(u64);
impl_fixed_unsigned!(u128);
impl_fixed_unsigned!(usize);

// Signed values are coded as the unsigned integer with the same bits.
macro_rules! impl_fixed_signed {
    ($int:ty, $uint:ty) => {
        impl FixedNatural for $int {
            #[inline]
            fn encode_fixed(&self, dst: &mut [u8]) {
                (*self as $uint).encode_fixed(dst)
            }

            #[inline]
            fn decode_fixed(src: &[u8]) -> Self {
                <$uint>::decode_fixed(src) as $int
            }

            #[inline]
            fn trimmed_len(&self) -> usize {
                (*self as $uint).trimmed_len()
            }

            #[inline]
            fn encode_trimmed(&self, dst: &mut [u8]) -> usize {
                (*self as $uint).encode_trimmed(dst)
            }
        }
    };
}
impl_fixed_signed!(i8, u8);
impl_fixed_signed!(i16, u16);
impl_fixed_signed!(i32, u32);
impl_fixed_signed!(i64, u64);
impl_fixed_signed!(i128, u128);
impl_fixed_signed!(isize, usize);

impl FixedNatural for BigUint {
    fn encode_fixed(&self, dst: &mut [u8]) {
        if self.bits() == 0 {
            dst.fill(0);
        } else {
            fill_fixed(&self.to_bytes_be(), dst);
        }
    }

    fn decode_fixed(src: &[u8]) -> Self {
        BigUint::from_bytes_be(src)
    }

    fn trimmed_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    fn encode_trimmed(&self, dst: &mut [u8]) -> usize {
        if self.bits() == 0 {
            return 0;
        }
        let be = self.to_bytes_be();
        dst[..be.len()].copy_from_slice(&be);
        be.len()
    }
}
