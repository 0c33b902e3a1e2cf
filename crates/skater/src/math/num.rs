use std::ops::RangeInclusive;

use super::FloatNum;

pub(crate) fn limit_at_range(value: FloatNum, range: RangeInclusive<FloatNum>) -> FloatNum {
    if &value < range.start() {
        *range.start()
    } else if &value > range.end() {
        *range.end()
    } else {
        value
    }
}

/// The value closest to zero. The first one wins a tie, even against its own negation.
pub(crate) fn closest_to_zero(values: impl Iterator<Item = FloatNum>) -> Option<FloatNum> {
    values.fold(None, |closest, value| match closest {
        Some(closest) if closest.abs() <= value.abs() => Some(closest),
        _ => Some(value),
    })
}

/// Python-style rounding: halves go to the even neighbour.
#[inline]
pub(crate) fn round_to_pixel(value: FloatNum) -> FloatNum {
    value.round_ties_even()
}
