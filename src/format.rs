use std::fmt;

use crate::{DoubleWord, Word};

// 2^128 has 39 decimal digits; chunks are written zero-padded, so leave
// room for three full 19-digit chunks.
const DEC_BUF: usize = 64;
const HEX_BUF: usize = 32;

impl<W: Word> fmt::Display for DoubleWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [b'0'; DEC_BUF];
        let mut end = DEC_BUF;

        let mut n = *self;
        loop {
            let (q, r) = n.div_rem_word(W::DEC_CHUNK);

            let mut r = r.as_u64();
            for i in 1..=W::DEC_CHUNK_DIGITS {
                buf[end - i] = b'0' + (r % 10) as u8;
                r /= 10;
            }
            end -= W::DEC_CHUNK_DIGITS;

            if q.is_zero() {
                break;
            }
            n = q;
        }

        let digits = &buf[end..];
        let start = digits
            .iter()
            .position(|&d| d != b'0')
            .unwrap_or(digits.len() - 1);

        let s = std::str::from_utf8(&digits[start..]).map_err(|_| fmt::Error)?;
        f.pad_integral(true, "", s)
    }
}

impl<W: Word> fmt::Debug for DoubleWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("DoubleWord(")?;
        <Self as fmt::Display>::fmt(self, f)?;
        f.write_str(")")
    }
}

impl<W: Word> fmt::LowerHex for DoubleWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Lower)
    }
}

impl<W: Word> fmt::UpperHex for DoubleWord<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        format_hex(self, f, hex_simd::AsciiCase::Upper)
    }
}

fn format_hex<W: Word>(
    src: &DoubleWord<W>,
    f: &mut fmt::Formatter,
    case: hex_simd::AsciiCase,
) -> fmt::Result {
    let len = 2 * W::BYTES;

    let mut bytes = [0; HEX_BUF / 2];
    src.hi.write_be_bytes(&mut bytes[..W::BYTES]);
    src.lo.write_be_bytes(&mut bytes[W::BYTES..len]);

    let mut buf = [0; HEX_BUF];
    let encoded = hex_simd::encode(
        &bytes[..len],
        hex_simd::OutBuf::new(&mut buf),
        case,
    )
    .map_err(|_| fmt::Error)?;

    let zero_digits =
        std::cmp::min(src.leading_zeros() / 4, 2 * len as u32 - 1) as usize;

    let s = std::str::from_utf8(&encoded[zero_digits..])
        .map_err(|_| fmt::Error)?;
    f.pad_integral(true, "0x", s)
}
