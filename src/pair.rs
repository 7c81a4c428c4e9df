use std::cmp::Ordering;

use crate::Word;

/// A two-word value denoting `hi * 2^W::BITS + lo`.
///
/// Every operation is built from the single-word kernel; no wider native
/// integer is used.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct DoubleWord<W> {
    pub hi: W,
    pub lo: W,
}

impl<W: Word> DoubleWord<W> {
    pub const MAX: Self = Self {
        hi: W::MAX,
        lo: W::MAX,
    };

    pub const MIN: Self = Self {
        hi: W::ZERO,
        lo: W::ZERO,
    };

    pub const BITS: u32 = 2 * W::BITS;

    #[inline]
    pub const fn new(hi: W, lo: W) -> Self {
        Self { hi, lo }
    }

    pub const fn zero() -> Self {
        Self::MIN
    }

    /// The exact product of two words.
    #[inline]
    pub fn from_product(x: W, y: W) -> Self {
        let (hi, lo) = x.mul_wide(y);
        Self { hi, lo }
    }

    pub fn is_zero(&self) -> bool {
        self.hi == W::ZERO && self.lo == W::ZERO
    }

    pub fn leading_zeros(&self) -> u32 {
        if self.hi != W::ZERO {
            self.hi.leading_zeros()
        } else {
            W::BITS + self.lo.leading_zeros()
        }
    }

    #[inline]
    pub fn overflowing_add_word(&self, other: W) -> (Self, bool) {
        let (lo, carry) = self.lo.add_carry(other, W::ZERO);
        let (hi, carry) = self.hi.add_carry(W::ZERO, carry);

        (Self { hi, lo }, carry != W::ZERO)
    }

    #[inline]
    pub fn overflowing_add(&self, other: &Self) -> (Self, bool) {
        let (lo, carry) = self.lo.add_carry(other.lo, W::ZERO);
        let (hi, carry) = self.hi.add_carry(other.hi, carry);

        (Self { hi, lo }, carry != W::ZERO)
    }

    #[inline]
    pub fn borrowing_sub(&self, other: &Self) -> (Self, bool) {
        let (lo, borrow) = self.lo.sub_borrow(other.lo, W::ZERO);
        let (hi, borrow) = self.hi.sub_borrow(other.hi, borrow);

        (Self { hi, lo }, borrow != W::ZERO)
    }

    /// Computes `self * m + a`, reporting whether the result overflowed
    /// two words.
    pub fn overflowing_mul_add_word(&self, m: W, a: W) -> (Self, bool) {
        let (p1, p0) = self.lo.mul_wide(m);
        let (q1, q0) = self.hi.mul_wide(m);

        let (lo, carry) = p0.add_carry(a, W::ZERO);
        let (hi, carry) = p1.add_carry(q0, carry);

        (Self { hi, lo }, q1 != W::ZERO || carry != W::ZERO)
    }

    /// Divides by a single word with no restriction on `hi`.
    ///
    /// The high word is divided on its own first, which leaves a remainder
    /// below `x` to carry into the two-word division of the low word.
    ///
    /// # Panics
    ///
    /// Panics if `x` is zero.
    pub fn div_rem_word(&self, x: W) -> (Self, W) {
        let qhi = self.hi / x;
        let r = self.hi % x;

        let (qlo, rem) = W::div_wide(r, self.lo, x);

        (Self { hi: qhi, lo: qlo }, rem)
    }
}

impl<W: Word> From<W> for DoubleWord<W> {
    #[inline]
    fn from(lo: W) -> Self {
        Self { hi: W::ZERO, lo }
    }
}

impl<W: Word> From<(W, W)> for DoubleWord<W> {
    #[inline]
    fn from((hi, lo): (W, W)) -> Self {
        Self { hi, lo }
    }
}

impl<W: Word> std::cmp::PartialOrd for DoubleWord<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Word> std::cmp::Ord for DoubleWord<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then(self.lo.cmp(&other.lo))
    }
}

impl<W: Word> std::ops::Add<DoubleWord<W>> for DoubleWord<W> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self::Output {
        crate::overflow_check! { self.overflowing_add(&other) }
    }
}

impl<W: Word> std::ops::Add<W> for DoubleWord<W> {
    type Output = Self;

    #[inline]
    fn add(self, other: W) -> Self::Output {
        crate::overflow_check! { self.overflowing_add_word(other) }
    }
}

impl<W: Word> std::ops::Sub<DoubleWord<W>> for DoubleWord<W> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        crate::overflow_check! { self.borrowing_sub(&other) }
    }
}

impl<W: Word> std::ops::Div<W> for DoubleWord<W> {
    type Output = Self;

    #[inline]
    fn div(self, other: W) -> Self::Output {
        self.div_rem_word(other).0
    }
}

impl<W: Word> std::ops::Rem<W> for DoubleWord<W> {
    type Output = W;

    #[inline]
    fn rem(self, other: W) -> W {
        self.div_rem_word(other).1
    }
}

#[cfg(test)]
impl<W: Word + quickcheck::Arbitrary> quickcheck::Arbitrary for DoubleWord<W> {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            hi: W::arbitrary(g),
            lo: W::arbitrary(g),
        }
    }
}
