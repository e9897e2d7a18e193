/// The smallest power of two greater than or equal to `x`.
///
/// Computed by folding the upper bits of `x - 1` into all the lower bits
/// (SWAR), which yields a value with the same most significant bit and all
/// ones below it, and then adding one.
///
/// # Edge cases
///
/// The arithmetic wraps, so outside of `1..=2³¹` the result is **not** a
/// power of two:
/// - `x == 0`: `x - 1` wraps to `u32::MAX`, the fold keeps all bits set and
///   the final increment wraps back, so the result is `0`.
/// - `x > 2³¹`: the fold sets every bit, the result is `0` as well.
///
/// Use [`u32::checked_next_power_of_two`] if these inputs are possible.
#[inline]
pub fn next_power_of_two(x: u32) -> u32 {
    let mut x = x.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x.wrapping_add(1)
}

/// Is `x` a power of two? `0` is not.
#[inline]
pub fn is_power_of_two(x: u32) -> bool {
    x > 0 && (x & (x - 1)) == 0
}
