use crate::math::{Real, Vector};

/// Reinterprets the IEEE-754 binary32 layout of `x` as an unsigned integer.
///
/// Only meaningful for single-precision floats.
#[inline]
pub fn float_to_bits(x: f32) -> u32 {
    x.to_bits()
}

/// Reinterprets `bits` as an IEEE-754 binary32 float.
///
/// Only meaningful for single-precision floats.
#[inline]
pub fn bits_to_float(bits: u32) -> f32 {
    f32::from_bits(bits)
}

const INV_SQRT_MAGIC: u32 = 0x5f37_59df;

/// Approximate yet fast reciprocal square root.
///
/// The initial guess is obtained by halving the bit pattern of `x` and
/// subtracting it from a magic constant, then refined by one Newton-Raphson
/// step. The relative error stays below 0.2% of `1 / x.sqrt()`.
///
/// `x` must be finite and strictly positive. Other inputs give meaningless
/// results (checked in debug builds only).
#[inline]
pub fn inv_sqrt(x: f32) -> f32 {
    debug_assert!(
        x.is_finite() && x > 0.0,
        "inv_sqrt requires a finite positive input, got {x}"
    );
    let half_x = 0.5 * x;
    let y = bits_to_float(INV_SQRT_MAGIC.wrapping_sub(float_to_bits(x) >> 1));
    y * (1.5 - half_x * y * y)
}

/// Normalizes `v` with [`inv_sqrt`] and returns it along with its approximate
/// length, or `None` if its squared length is not greater than `eps * eps`.
#[inline]
pub fn fast_normalize(v: &Vector<Real>, eps: Real) -> Option<(Vector<Real>, Real)> {
    let sq_norm = v.norm_squared();

    if sq_norm > eps * eps && sq_norm.is_finite() {
        let inv_norm = inv_sqrt(sq_norm);
        Some((v * inv_norm, sq_norm * inv_norm))
    } else {
        None
    }
}
