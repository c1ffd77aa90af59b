//! Built-in combiners.

use crate::RFBound;
use crate::collection::{CombineFn, LiftableCombiner};

/* ===================== AverageF64 ===================== */

/// Arithmetic mean per key.
///
/// - Accumulator: `(sum, count)`
/// - Output: `f64`
///
/// Values are summed in the order they are added, with plain `f64` addition.
/// An empty accumulator finishes as `NaN`; grouped input never produces one.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<V, (f64, u64), f64> for AverageF64
where
    V: RFBound + Into<f64>,
{
    fn add_input(&self, acc: &mut (f64, u64), v: V) {
        acc.0 += v.into();
        acc.1 += 1;
    }

    fn finish(&self, acc: (f64, u64)) -> f64 {
        acc.0 / acc.1 as f64
    }
}

impl<V> LiftableCombiner<V, (f64, u64), f64> for AverageF64
where
    V: RFBound + Into<f64>,
{
    fn build_from_group(&self, values: &[V]) -> (f64, u64) {
        let mut acc = (0.0, 0);
        for v in values {
            CombineFn::<V, _, f64>::add_input(self, &mut acc, v.clone());
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_group() {
        let acc = AverageF64.build_from_group(&[4.0f64, 2.0]);
        assert_eq!(acc, (6.0, 2));
        assert_eq!(CombineFn::<f64, _, _>::finish(&AverageF64, acc), 3.0);
    }

    #[test]
    fn integer_values_convert() {
        let acc = AverageF64.build_from_group(&[1u32, 2]);
        assert_eq!(CombineFn::<u32, _, _>::finish(&AverageF64, acc), 1.5);
    }

    #[test]
    fn empty_accumulator_is_nan() {
        let acc = AverageF64.build_from_group(&[] as &[f64]);
        assert!(CombineFn::<f64, _, _>::finish(&AverageF64, acc).is_nan());
    }
}
