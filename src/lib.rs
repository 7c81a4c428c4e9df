//! Extended-precision arithmetic on single machine words.
//!
//! Carry-propagating addition and subtraction, widening multiplication and
//! two-word by one-word division, each at 32 and 64 bits, plus `usize`
//! forms that pick a width for the target at compile time. Every function
//! is pure and allocation-free; the 64-bit forms never use a 128-bit
//! intermediate.
//!
//! ```
//! let (hi, lo) = extprec::mul64(u64::MAX, 3);
//! assert_eq!((hi, lo), (2, u64::MAX - 2));
//! assert_eq!(extprec::div64(hi, lo, 3), (u64::MAX, 0));
//! ```

mod addsub;
mod div;
mod format;
mod mul;
pub mod native;
pub mod overflow;
mod pair;
mod parse;
mod word;

pub use addsub::{add32, add64, sub32, sub64};
pub use div::{
    checked_div32, checked_div64, div32, div64, overflowing_div32,
    overflowing_div64,
};
pub use mul::{mul32, mul64};
pub use native::{add, checked_div, div, mul, overflowing_div, sub};
pub use pair::DoubleWord;
pub use parse::FromStrErr;
pub use word::Word;

#[cfg(test)]
pub fn rng() -> rand_pcg::Pcg64 {
    let now = std::time::Instant::now();
    let seed = now.elapsed().as_nanos();

    rand_pcg::Pcg64::new(0xcafef00dd15ea5e5 ^ seed, 0xa02bdbf7bb3c0a7ac28fa16a64abf96)
}
