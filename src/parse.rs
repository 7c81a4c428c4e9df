use std::error::Error;
use std::fmt;

use crate::{DoubleWord, Word};

const HEX_BUF: usize = 32;

#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum FromStrErr {
    Empty,
    InvalidCharacter,
    Overflow,
}

impl fmt::Display for FromStrErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            FromStrErr::Empty => "empty input",
            FromStrErr::InvalidCharacter => "invalid character",
            FromStrErr::Overflow => "overflow",
        };

        f.write_str(text)
    }
}

impl Error for FromStrErr {}

impl<W: Word> DoubleWord<W> {
    /// Parses a decimal string, one digit at a time through
    /// [`overflowing_mul_add_word`](Self::overflowing_mul_add_word).
    ///
    /// Only ASCII digits are accepted. Unlike `u128::from_str`, a leading
    /// `+` is rejected with [`FromStrErr::InvalidCharacter`], as are
    /// whitespace and `_` separators.
    pub fn from_str_dec(src: &str) -> Result<Self, FromStrErr> {
        let src = src.as_bytes();
        if src.is_empty() {
            return Err(FromStrErr::Empty);
        }

        let ten = W::from_u8(10);
        let mut r = Self::zero();

        for &c in src {
            if !c.is_ascii_digit() {
                return Err(FromStrErr::InvalidCharacter);
            }

            let (next, overflow) =
                r.overflowing_mul_add_word(ten, W::from_u8(c - b'0'));
            if overflow {
                return Err(FromStrErr::Overflow);
            }

            r = next;
        }

        Ok(r)
    }

    /// Parses a hex string without a `0x` prefix, in either case.
    pub fn from_str_hex(src: &str) -> Result<Self, FromStrErr> {
        let src = src.as_bytes();
        let digits = 4 * W::BYTES;

        if src.is_empty() {
            return Err(FromStrErr::Empty);
        } else if src.len() > digits {
            return Err(FromStrErr::Overflow);
        }

        // Left-pad to a full two-word width so the input decodes as whole
        // bytes.
        let mut padded = [b'0'; HEX_BUF];
        padded[digits - src.len()..digits].copy_from_slice(src);

        let mut buf = [0; HEX_BUF / 2];
        let bytes = hex_simd::decode(
            &padded[..digits],
            hex_simd::OutBuf::new(&mut buf),
        )
        .map_err(|_| FromStrErr::InvalidCharacter)?;

        Ok(Self {
            hi: W::from_be_bytes(&bytes[..W::BYTES]),
            lo: W::from_be_bytes(&bytes[W::BYTES..]),
        })
    }
}

impl<W: Word> std::str::FromStr for DoubleWord<W> {
    type Err = FromStrErr;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_str_dec(src)
    }
}
