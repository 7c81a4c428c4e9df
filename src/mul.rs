const LO_MASK: u64 = 0xFFFF_FFFF;

/// Returns the high and low halves of the 64-bit product of `x` and `y`.
#[inline]
pub fn mul32(x: u32, y: u32) -> (u32, u32) {
    let p = x as u64 * y as u64;
    ((p >> 32) as u32, p as u32)
}

/// Returns the high and low halves of the 128-bit product of `x` and `y`.
///
/// No 128-bit intermediate is formed. Both operands are split into 32-bit
/// halves and the partial products are accumulated column by column.
#[inline]
pub fn mul64(x: u64, y: u64) -> (u64, u64) {
    let xlo = x & LO_MASK;
    let xhi = x >> 32;
    let ylo = y & LO_MASK;
    let yhi = y >> 32;

    let t = xlo * ylo;
    let w0 = t & LO_MASK;
    let k = t >> 32;

    // (2^32 - 1)^2 + (2^32 - 1) < 2^64, so adding a carry half to a
    // product of halves never overflows.
    let t = xhi * ylo + k;
    let w1 = t & LO_MASK;
    let w2 = t >> 32;

    let t = xlo * yhi + w1;
    let k = t >> 32;

    let lo = (t << 32) | w0;
    let hi = xhi * yhi + w2 + k;

    (hi, lo)
}
