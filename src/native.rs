//! Operations on the native word, `usize`.
//!
//! The width is picked at compile time from `target_pointer_width`; each
//! function is a cast around the matching 32-bit or 64-bit routine.

#[cfg(target_pointer_width = "32")]
mod imp {
    pub use crate::addsub::{add32 as add, sub32 as sub};
    pub use crate::div::{
        checked_div32 as checked_div, div32 as div,
        overflowing_div32 as overflowing_div,
    };
    pub use crate::mul::mul32 as mul;

    pub type Native = u32;
}

#[cfg(target_pointer_width = "64")]
mod imp {
    pub use crate::addsub::{add64 as add, sub64 as sub};
    pub use crate::div::{
        checked_div64 as checked_div, div64 as div,
        overflowing_div64 as overflowing_div,
    };
    pub use crate::mul::mul64 as mul;

    pub type Native = u64;
}

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("extprec supports only 32-bit and 64-bit targets");

use imp::Native;

#[inline(always)]
fn widen((a, b): (Native, Native)) -> (usize, usize) {
    (a as usize, b as usize)
}

/// Returns the sum and carry-out bit of `x`, `y` and a carry-in bit.
#[inline]
pub fn add(x: usize, y: usize, carry: usize) -> (usize, usize) {
    widen(imp::add(x as Native, y as Native, carry as Native))
}

/// Returns the difference and borrow-out bit of `x`, `y` and a borrow-in
/// bit.
#[inline]
pub fn sub(x: usize, y: usize, borrow: usize) -> (usize, usize) {
    widen(imp::sub(x as Native, y as Native, borrow as Native))
}

/// Returns the high and low halves of the product of `x` and `y`.
#[inline]
pub fn mul(x: usize, y: usize) -> (usize, usize) {
    widen(imp::mul(x as Native, y as Native))
}

/// Returns the quotient and remainder of `(hi, lo)` divided by `x`.
///
/// # Panics
///
/// Panics if `x == 0`, and if `hi >= x` while overflow checking is on.
#[inline]
pub fn div(hi: usize, lo: usize, x: usize) -> (usize, usize) {
    widen(imp::div(hi as Native, lo as Native, x as Native))
}

/// Divides `(hi, lo)` by `x`, returning the wrapped quotient, the
/// remainder, and whether the quotient overflowed (`hi >= x`).
///
/// # Panics
///
/// Panics if `x == 0`.
#[inline]
pub fn overflowing_div(hi: usize, lo: usize, x: usize) -> ((usize, usize), bool) {
    let (r, overflow) =
        imp::overflowing_div(hi as Native, lo as Native, x as Native);
    (widen(r), overflow)
}

/// Returns `None` if `x == 0` or the quotient doesn't fit in a `usize`.
#[inline]
pub fn checked_div(hi: usize, lo: usize, x: usize) -> Option<(usize, usize)> {
    imp::checked_div(hi as Native, lo as Native, x as Native).map(widen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn add_edge_cases() {
        assert_eq!(add(0, 0, 0), (0, 0));
        assert_eq!(add(0, 0, 1), (1, 0));
        assert_eq!(add(usize::MAX, 0, 1), (0, 1));
        assert_eq!(add(usize::MAX, usize::MAX, 1), (usize::MAX, 1));
    }

    #[test]
    fn sub_edge_cases() {
        assert_eq!(sub(0, 0, 1), (usize::MAX, 1));
        assert_eq!(sub(0, usize::MAX, 0), (1, 1));
        assert_eq!(sub(usize::MAX, 1, 1), (usize::MAX - 2, 0));
    }

    #[test]
    fn mul_extremes() {
        assert_eq!(mul(usize::MAX, usize::MAX), (usize::MAX - 1, 1));
        assert_eq!(mul(usize::MAX, 0), (0, 0));
    }

    #[test]
    fn div_small() {
        assert_eq!(div(0, 10, 3), (3, 1));
        assert_eq!(div(1, 0, 2), (1 << (usize::BITS - 1), 0));
        assert_eq!(checked_div(2, 0, 2), None);
        assert!(overflowing_div(2, 0, 2).1);
    }

    #[test]
    fn overflowing_and_checked_div_flags() {
        assert_eq!(overflowing_div(0, 10, 3), ((3, 1), false));
        assert!(!overflowing_div(2, usize::MAX, 3).1);
        assert!(overflowing_div(3, 0, 3).1);

        assert_eq!(checked_div(0, 10, 3), Some((3, 1)));
        assert_eq!(checked_div(0, 10, 0), None);
        assert_eq!(checked_div(usize::MAX, 0, usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn overflowing_div_panics_on_zero() {
        overflowing_div(0, 1, 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn dispatches_to_64_bit() {
        assert_eq!(mul(1 << 63, 4), (2, 0));
        assert_eq!(
            add(0xAAAA_AAAA_AAAA_AAAA, 0x5555_5555_5555_5555, 1),
            (0, 1)
        );
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn dispatches_to_32_bit() {
        assert_eq!(mul(1 << 31, 4), (2, 0));
        assert_eq!(add(0xAAAA_AAAA, 0x5555_5555, 1), (0, 1));
    }

    #[quickcheck]
    fn qc_mul_then_div(a: usize, b: usize) -> TestResult {
        if b == 0 {
            return TestResult::discard();
        }

        let (hi, lo) = mul(a, b);
        TestResult::from_bool(div(hi, lo, b) == (a, 0))
    }

    #[quickcheck]
    fn qc_add_then_sub(x: usize, y: usize, carry: bool) -> bool {
        let (sum, c) = add(x, y, carry as usize);
        let (diff, b) = sub(sum, y, carry as usize);

        diff == x && b == c
    }
}
