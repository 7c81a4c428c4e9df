use std::fmt;
use std::ops::{Div, Rem};

use crate::{addsub, div, mul, native};

pub(crate) mod sealed {
    /// Text and byte conversions used by `DoubleWord` formatting and
    /// parsing. Not nameable outside the crate, which also seals [`Word`].
    ///
    /// [`Word`]: super::Word
    pub trait Repr: Sized {
        const BYTES: usize;

        /// Largest power of ten that fits in a word, and its exponent.
        const DEC_CHUNK: Self;
        const DEC_CHUNK_DIGITS: usize;

        fn from_u8(n: u8) -> Self;
        fn as_u64(self) -> u64;

        /// Writes the word big-endian into `buf[..BYTES]`.
        ///
        /// # Panics
        ///
        /// Panics if `buf` is shorter than `BYTES`.
        fn write_be_bytes(self, buf: &mut [u8]);

        /// Reads a big-endian word from `bytes[..BYTES]`.
        ///
        /// # Panics
        ///
        /// Panics if `bytes` is shorter than `BYTES`.
        fn from_be_bytes(bytes: &[u8]) -> Self;
    }
}

/// A single-word unsigned integer with carry-propagating primitives.
///
/// Implemented for `u32`, `u64` and `usize`. Generic code picks the width
/// at compile time through the type parameter. The trait is sealed.
pub trait Word:
    sealed::Repr
    + Copy
    + Eq
    + Ord
    + fmt::Debug
    + Div<Output = Self>
    + Rem<Output = Self>
    + Default
{
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;

    fn leading_zeros(self) -> u32;

    /// `(self + rhs + carry) mod 2^BITS` and the carry-out bit.
    fn add_carry(self, rhs: Self, carry: Self) -> (Self, Self);

    /// `(self - rhs - borrow) mod 2^BITS` and the borrow-out bit.
    fn sub_borrow(self, rhs: Self, borrow: Self) -> (Self, Self);

    /// Full product as `(hi, lo)`.
    fn mul_wide(self, rhs: Self) -> (Self, Self);

    /// `(hi, lo) / x` as `(quo, rem)`, see [`div64`](crate::div64).
    fn div_wide(hi: Self, lo: Self, x: Self) -> (Self, Self);
}

macro_rules! impl_word {
    ($t:ty, $digits:expr, $add:path, $sub:path, $mul:path, $div:path) => {
        impl sealed::Repr for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const DEC_CHUNK: Self = (10 as $t).pow($digits as u32);
            const DEC_CHUNK_DIGITS: usize = $digits;

            #[inline]
            fn from_u8(n: u8) -> Self {
                n as $t
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            fn write_be_bytes(self, buf: &mut [u8]) {
                buf[..Self::BYTES].copy_from_slice(&self.to_be_bytes());
            }

            fn from_be_bytes(bytes: &[u8]) -> Self {
                let mut raw = [0; std::mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..Self::BYTES]);
                <$t>::from_be_bytes(raw)
            }
        }

        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn add_carry(self, rhs: Self, carry: Self) -> (Self, Self) {
                $add(self, rhs, carry)
            }

            #[inline]
            fn sub_borrow(self, rhs: Self, borrow: Self) -> (Self, Self) {
                $sub(self, rhs, borrow)
            }

            #[inline]
            fn mul_wide(self, rhs: Self) -> (Self, Self) {
                $mul(self, rhs)
            }

            #[inline]
            fn div_wide(hi: Self, lo: Self, x: Self) -> (Self, Self) {
                $div(hi, lo, x)
            }
        }
    };
}

impl_word!(u32, 9, addsub::add32, addsub::sub32, mul::mul32, div::div32);
impl_word!(u64, 19, addsub::add64, addsub::sub64, mul::mul64, div::div64);

#[cfg(target_pointer_width = "32")]
impl_word!(usize, 9, native::add, native::sub, native::mul, native::div);

#[cfg(target_pointer_width = "64")]
impl_word!(usize, 19, native::add, native::sub, native::mul, native::div);
