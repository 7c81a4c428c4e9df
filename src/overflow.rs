//! Overflow policy for operations whose result does not fit in a word.
//!
//! Overflow is reported as a panic when `debug_assertions` are on or the
//! crate is built with `--cfg overflow_check`. Otherwise the wrapped
//! result is returned as is.

#[cfg(any(overflow_check, debug_assertions))]
pub const CHECKING_OVERFLOW: bool = true;

#[cfg(not(any(overflow_check, debug_assertions)))]
pub const CHECKING_OVERFLOW: bool = false;

/// Takes an expression producing `(result, overflow)` and yields `result`,
/// panicking with "extended arithmetic overflow" if `overflow` is set and
/// overflow checking is enabled.
#[macro_export]
macro_rules! overflow_check {
    ($($c:tt)+) => {{
        let (result, overflow): (_, bool) = $($c)+;

        if $crate::overflow::CHECKING_OVERFLOW && overflow {
            panic!("extended arithmetic overflow")
        }

        result
    }};
}
