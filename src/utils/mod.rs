//! Numeric primitives and various unsorted geometrical and logical operators.

pub use self::component_ord::{clamp, max, min, ComponentOrd};
pub use self::frame_ops::{mul, mul_t, FrameOps};
pub use self::inv_sqrt::{bits_to_float, fast_normalize, float_to_bits, inv_sqrt};
pub use self::power_of_two::{is_power_of_two, next_power_of_two};
pub use self::random::{RandomGenerator, RAND_LIMIT};
pub use self::scalar::{
    ccw_face_normal, cross, cross_sv, cross_vs, inv, rotation_angle, rotation_from_angle,
};
pub use self::sorted_pair::SortedPair;
pub use self::validate::{is_valid, Validate};

mod component_ord;
mod frame_ops;
mod inv_sqrt;
mod power_of_two;
mod random;
mod scalar;
mod sorted_pair;
mod validate;
