//! Two-word by one-word division.
//!
//! The dividend `(hi, lo)` denotes `hi * 2^N + lo`. The quotient only fits
//! in a word when `hi < x`. [`div32`] and [`div64`] enforce that through
//! [`overflow_check!`](crate::overflow_check): they panic when overflow
//! checking is enabled and return an unspecified (but panic-free) result
//! otherwise. [`overflowing_div64`] and [`checked_div64`] expose the
//! condition to the caller instead.
//!
//! A zero divisor always panics.

/// Half-digit base for [`div64`].
const B: u64 = 1 << 32;
const LO_MASK: u64 = B - 1;

/// Divides `(hi, lo)` by `x`, returning the quotient truncated to 32 bits,
/// the remainder, and whether the quotient overflowed (`hi >= x`).
///
/// # Panics
///
/// Panics if `x == 0`.
#[inline]
pub fn overflowing_div32(hi: u32, lo: u32, x: u32) -> ((u32, u32), bool) {
    let u = ((hi as u64) << 32) | lo as u64;
    let x = x as u64;

    let quo = (u / x) as u32;
    let rem = (u % x) as u32;

    ((quo, rem), hi as u64 >= x)
}

/// Returns the quotient and remainder of `(hi, lo)` divided by `x`.
///
/// # Panics
///
/// Panics if `x == 0`, and if `hi >= x` while overflow checking is on.
#[inline]
pub fn div32(hi: u32, lo: u32, x: u32) -> (u32, u32) {
    crate::overflow_check! { overflowing_div32(hi, lo, x) }
}

/// Returns `None` if `x == 0` or the quotient doesn't fit in 32 bits.
#[inline]
pub fn checked_div32(hi: u32, lo: u32, x: u32) -> Option<(u32, u32)> {
    if hi >= x {
        return None;
    }

    Some(overflowing_div32(hi, lo, x).0)
}

// Shifts (hi, lo) left by `shift` < 64, dropping the bits shifted out of
// `hi`.
#[inline(always)]
fn shl2(hi: u64, lo: u64, shift: u32) -> (u64, u64) {
    let comp = (64 - shift) % 64;
    let comp_mask = if shift == 0 { 0 } else { !0 };

    ((hi << shift) | ((lo >> comp) & comp_mask), lo << shift)
}

// Refines a trial quotient half-digit `q` for the dividend piece `un`
// (two half-digits) followed by `next`. The trial is at most 2 too large.
#[inline(always)]
fn estimate(un: u64, next: u64, xhi: u64, xlo: u64) -> u64 {
    let mut q = un / xhi;
    let mut rhat = un - q * xhi;

    // `q >= B` short-circuits before `q * xlo` can overflow, and `rhat`
    // stays below B whenever the product is compared.
    while q >= B || q * xlo > B * rhat + next {
        q -= 1;
        rhat += xhi;

        if rhat >= B {
            break;
        }
    }

    q
}

/// Divides `(hi, lo)` by `x`, reporting whether the quotient overflowed.
///
/// Uses Knuth's Algorithm D on 32-bit half-digits (Hacker's Delight 9-4,
/// "Unsigned Long Division"), so no intermediate is wider than 64 bits.
/// When the returned flag is set, the quotient and remainder are
/// unspecified.
///
/// # Panics
///
/// Panics if `x == 0`.
#[inline]
pub fn overflowing_div64(hi: u64, lo: u64, x: u64) -> ((u64, u64), bool) {
    if x == 0 {
        panic!("attempt to divide by zero");
    }

    let overflow = hi >= x;

    // Normalize so that the divisor's top bit is set.
    let s = x.leading_zeros();
    let x = x << s;

    let xhi = x >> 32;
    let xlo = x & LO_MASK;

    let (un64, un10) = shl2(hi, lo, s);
    let un1 = un10 >> 32;
    let un0 = un10 & LO_MASK;

    let q1 = estimate(un64, un1, xhi, xlo);

    // Wrapping arithmetic: the true value fits in 64 bits but the
    // intermediate products do not.
    let un21 = un64
        .wrapping_mul(B)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(x));

    let q0 = estimate(un21, un0, xhi, xlo);

    let quo = q1.wrapping_mul(B).wrapping_add(q0);
    let rem = un21
        .wrapping_mul(B)
        .wrapping_add(un0)
        .wrapping_sub(q0.wrapping_mul(x))
        >> s;

    ((quo, rem), overflow)
}

/// Returns the quotient and remainder of `(hi, lo)` divided by `x`.
///
/// # Panics
///
/// Panics if `x == 0`, and if `hi >= x` while overflow checking is on.
#[inline]
pub fn div64(hi: u64, lo: u64, x: u64) -> (u64, u64) {
    crate::overflow_check! { overflowing_div64(hi, lo, x) }
}

/// Returns `None` if `x == 0` or the quotient doesn't fit in 64 bits.
#[inline]
pub fn checked_div64(hi: u64, lo: u64, x: u64) -> Option<(u64, u64)> {
    if hi >= x {
        return None;
    }

    Some(overflowing_div64(hi, lo, x).0)
}
