// THEORY:
// The `math` module is the leaf of the whole crate. Everything that bounds or
// rounds a number ends up here, and nothing here knows about colors or images.
//
// Key principles:
// 1.  **Order, not arithmetic**: `clamp` only needs to compare values, so it is
//     bounded by `PartialOrd` and works for integers, floats and any user type
//     with a comparison. It is monomorphized per type, there is no dispatch.
// 2.  **Max is tested first**: the upper bound wins when the bounds are inverted.
//     `clamp(10, 5, 1)` is `1`, not `5`. Callers that pass inverted bounds get a
//     well-defined answer instead of a panic (unlike `Ord::clamp`).
// 3.  **Round half up, literally**: `round_half_up` takes the floor and adds one
//     when the fractional part is at least one half. It never uses the
//     platform's ties-to-even or ties-away-from-zero modes. For negative inputs
//     this means `-1.5 -> -1` and `-1.6 -> -2`.

use num_traits::Float;

/// Restricts `value` to `[min, max]`.
///
/// Returns `max` if `value > max`, otherwise `min` if `value < min`, otherwise
/// `value`. The comparison against `max` happens first, so with inverted bounds
/// (`min > max`) a value above `max` still becomes `max`.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Method-call form of [`clamp`] for every ordered type.
pub trait ClampExt: PartialOrd + Sized {
    /// See [`clamp`].
    #[inline]
    fn clamp_between(self, min: Self, max: Self) -> Self {
        clamp(self, min, max)
    }
}

impl<T: PartialOrd> ClampExt for T {}

/// Rounds to the nearest integer with ties going toward positive infinity.
///
/// The result is `floor(x)` when `x - floor(x) < 0.5` and `floor(x) + 1`
/// otherwise. Values beyond the `i32` range saturate and NaN becomes `0`.
pub fn round_half_up<F: Float>(x: F) -> i32 {
    let floored = x.floor();
    let half = F::one() / (F::one() + F::one());
    let rounded = if x - floored >= half {
        floored + F::one()
    } else {
        floored
    };
    // `as` saturates on overflow and maps NaN to zero.
    rounded.to_f64().map_or(0, |r| r as i32)
}
