const LO_MASK: u64 = 0xFFFF_FFFF;

/// Returns the 32-bit sum and carry-out bit of `x`, `y` and a carry-in
/// bit.
///
/// The carry-in is expected to be 0 or 1. It is not validated; any other
/// value is simply added.
#[inline]
pub fn add32(x: u32, y: u32, carry: u32) -> (u32, u32) {
    let sum = x.wrapping_add(y).wrapping_add(carry);

    // Top bit carries out if both operands have it set, or if either has
    // it set and the sum doesn't.
    let carry_out = ((x & y) | ((x | y) & !sum)) >> 31;

    (sum, carry_out)
}

/// Returns the 64-bit sum and carry-out bit of `x`, `y` and a carry-in
/// bit.
///
/// Operates on 32-bit halves so that no intermediate is wider than a
/// word: the low halves are added first and exactly one bit of carry is
/// propagated into the high halves. As with [`add32`], a carry-in other
/// than 0 or 1 is added with wrapping arithmetic.
#[inline]
pub fn add64(x: u64, y: u64, carry: u64) -> (u64, u64) {
    let xlo = x & LO_MASK;
    let xhi = x >> 32;
    let ylo = y & LO_MASK;
    let yhi = y >> 32;

    let lo = xlo.wrapping_add(ylo).wrapping_add(carry) & LO_MASK;
    let c = ((xlo & ylo) | ((xlo | ylo) & !lo)) >> 31;

    let hi = (xhi + yhi + c) & LO_MASK;
    let carry_out = ((xhi & yhi) | ((xhi | yhi) & !hi)) >> 31;

    ((hi << 32) | lo, carry_out)
}

/// Returns the 32-bit difference and borrow-out bit of `x`, `y` and a
/// borrow-in bit.
///
/// The borrow-in is expected to be 0 or 1. It is not validated; any other
/// value is simply subtracted.
#[inline]
pub fn sub32(x: u32, y: u32, borrow: u32) -> (u32, u32) {
    let diff = x.wrapping_sub(y).wrapping_sub(borrow);
    let borrow_out = ((!x & y) | (!(x ^ y) & diff)) >> 31;

    (diff, borrow_out)
}

/// Returns the 64-bit difference and borrow-out bit of `x`, `y` and a
/// borrow-in bit, working on 32-bit halves like [`add64`]. A borrow-in
/// other than 0 or 1 is subtracted with wrapping arithmetic.
#[inline]
pub fn sub64(x: u64, y: u64, borrow: u64) -> (u64, u64) {
    let xlo = x & LO_MASK;
    let xhi = x >> 32;
    let ylo = y & LO_MASK;
    let yhi = y >> 32;

    let lo = xlo.wrapping_sub(ylo).wrapping_sub(borrow) & LO_MASK;
    let b = ((!xlo & ylo) | (!(xlo ^ ylo) & lo)) >> 31;

    let hi = xhi.wrapping_sub(yhi).wrapping_sub(b) & LO_MASK;
    let borrow_out = ((!xhi & yhi) | (!(xhi ^ yhi) & hi)) >> 31;

    ((hi << 32) | lo, borrow_out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;
    use quickcheck_macros::quickcheck;
    use rand::Rng;

    const AAAA: u64 = 0xAAAA_AAAA_AAAA_AAAA;
    const FIVES: u64 = 0x5555_5555_5555_5555;

    #[test]
    fn add_edge_cases() {
        let cases = [
            (0, 0, 0, 0, 0),
            (0, 0, 1, 1, 0),
            (0, u64::MAX, 0, u64::MAX, 0),
            (u64::MAX, 0, 1, 0, 1),
            (AAAA, FIVES, 0, u64::MAX, 0),
            (AAAA, FIVES, 1, 0, 1),
        ];

        for (x, y, carry, sum, carry_out) in cases {
            assert_eq!(add64(x, y, carry), (sum, carry_out), "add64({x:#x}, {y:#x}, {carry})");

            let (x, y, carry) = (x as u32, y as u32, carry as u32);
            assert_eq!(
                add32(x, y, carry),
                (sum as u32, carry_out as u32),
                "add32({x:#x}, {y:#x}, {carry})"
            );
        }
    }

    #[test]
    fn sub_edge_cases() {
        let cases = [
            (0, 0, 0, 0, 0),
            (0, 0, 1, u64::MAX, 1),
            (0, u64::MAX, 0, 1, 1),
            (0, u64::MAX, 1, 0, 1),
            (u64::MAX, AAAA, 0, FIVES, 0),
            (u64::MAX, AAAA, 1, 0x5555_5555_5555_5554, 0),
        ];

        for (x, y, borrow, diff, borrow_out) in cases {
            assert_eq!(sub64(x, y, borrow), (diff, borrow_out), "sub64({x:#x}, {y:#x}, {borrow})");

            let (x, y, borrow) = (x as u32, y as u32, borrow as u32);
            assert_eq!(
                sub32(x, y, borrow),
                (diff as u32, borrow_out as u32),
                "sub32({x:#x}, {y:#x}, {borrow})"
            );
        }
    }

    #[test]
    fn add_carries_across_halves() {
        assert_eq!(add64(0xFFFF_FFFF, 1, 0), (1 << 32, 0));
        assert_eq!(add64(0xFFFF_FFFF, 0, 1), (1 << 32, 0));
        assert_eq!(add64(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
    }

    #[test]
    fn sub_borrows_across_halves() {
        assert_eq!(sub64(1 << 32, 1, 0), (0xFFFF_FFFF, 0));
        assert_eq!(sub64(1 << 32, 0, 1), (0xFFFF_FFFF, 0));
        assert_eq!(sub64(0, 0, 1), (u64::MAX, 1));
    }

    #[test]
    fn wide_carry_inputs_are_added_not_validated() {
        assert_eq!(add64(u64::MAX, 0, 2), (1, 1));
        assert_eq!(add32(u32::MAX, 0, 2), (1, 1));
        assert_eq!(sub64(0, 0, 2), (u64::MAX - 1, 1));
        assert_eq!(sub32(0, 0, 2), (u32::MAX - 1, 1));

        // No arithmetic overflow panic in debug builds either.
        assert_eq!(add64(u64::MAX, u64::MAX, u64::MAX), (u64::MAX - 2, 1));
        assert_eq!(add32(u32::MAX, u32::MAX, u32::MAX), (u32::MAX - 2, 1));
        assert_eq!(sub64(0, u64::MAX, u64::MAX), (2, 1));
        assert_eq!(sub32(0, u32::MAX, u32::MAX), (2, 1));
    }

    // Operands straddling 2^31 and 2^32 exercise every combination of top
    // bits seen by the carry and borrow formulas.
    fn boundary_values_32() -> Vec<u32> {
        let mut values = Vec::new();
        for center in [0_u64, 1 << 31, 1 << 32] {
            for delta in -40_i64..=40 {
                let v = center as i64 + delta;
                if (0..=u32::MAX as i64).contains(&v) {
                    values.push(v as u32);
                }
            }
        }
        values
    }

    #[test]
    fn add32_sweeps_carry_boundaries() {
        let values = boundary_values_32();

        for &x in &values {
            for &y in &values {
                for carry in 0..=1 {
                    let expected = x as u64 + y as u64 + carry as u64;
                    let (sum, c) = add32(x, y, carry);

                    assert_eq!(
                        ((c as u64) << 32) | sum as u64,
                        expected,
                        "add32({x:#x}, {y:#x}, {carry})"
                    );
                }
            }
        }
    }

    #[test]
    fn sub32_sweeps_borrow_boundaries() {
        let values = boundary_values_32();

        for &x in &values {
            for &y in &values {
                for borrow in 0..=1 {
                    let expected = x as i64 - y as i64 - borrow as i64;
                    let (diff, b) = sub32(x, y, borrow);

                    assert_eq!(
                        diff as i64 - ((b as i64) << 32),
                        expected,
                        "sub32({x:#x}, {y:#x}, {borrow})"
                    );
                }
            }
        }
    }

    #[test]
    fn add64_sweeps_half_boundaries() {
        let mut values = Vec::new();
        for center in [0_u64, 1 << 31, 1 << 32, 1 << 63, u64::MAX] {
            for delta in 0..8 {
                values.push(center.wrapping_add(delta));
                values.push(center.wrapping_sub(delta));
            }
        }

        for &x in &values {
            for &y in &values {
                for carry in 0..=1 {
                    let expected = x as u128 + y as u128 + carry as u128;
                    let (sum, c) = add64(x, y, carry);
                    assert_eq!(((c as u128) << 64) | sum as u128, expected);

                    let expected = x as i128 - y as i128 - carry as i128;
                    let (diff, b) = sub64(x, y, carry);
                    assert_eq!(diff as i128 - ((b as i128) << 64), expected);
                }
            }
        }
    }

    #[test]
    fn add64_spotcheck() {
        let mut rng = rng();

        for _ in 0..10_000 {
            let x = rng.gen::<u64>();
            let y = rng.gen::<u64>();
            let carry = rng.gen::<bool>() as u64;

            let (sum, c) = add64(x, y, carry);
            let expected = x as u128 + y as u128 + carry as u128;
            assert_eq!(((c as u128) << 64) | sum as u128, expected, "add64({x:#x}, {y:#x}, {carry})");
        }
    }

    #[quickcheck]
    fn qc_add64_matches_u128(x: u64, y: u64, carry: bool) -> bool {
        let (sum, c) = add64(x, y, carry as u64);
        let expected = x as u128 + y as u128 + carry as u128;

        ((c as u128) << 64) | sum as u128 == expected && c <= 1
    }

    #[quickcheck]
    fn qc_sub64_matches_i128(x: u64, y: u64, borrow: bool) -> bool {
        let (diff, b) = sub64(x, y, borrow as u64);
        let expected = x as i128 - y as i128 - borrow as i128;

        diff as i128 - ((b as i128) << 64) == expected && b <= 1
    }

    #[quickcheck]
    fn qc_add32_matches_u64(x: u32, y: u32, carry: bool) -> bool {
        let (sum, c) = add32(x, y, carry as u32);
        let expected = x as u64 + y as u64 + carry as u64;

        ((c as u64) << 32) | sum as u64 == expected
    }

    #[quickcheck]
    fn qc_sub_undoes_add(x: u64, y: u64, carry: bool) -> bool {
        let (sum, c) = add64(x, y, carry as u64);
        let (diff, b) = sub64(sum, y, carry as u64);

        diff == x && b == c
    }
}
