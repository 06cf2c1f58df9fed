use crate::utils::lerp;

/// Reduce the `2^n` corner values of a cell to one value.
///
/// Axis 0 is collapsed first. Corners `2i` and `2i + 1` differ only in the
/// lowest remaining axis, matching the vertex bit order of
/// [`Hypercube::vertex`](super::Hypercube::vertex). A zero-width bound along an
/// axis passes the shared value through without dividing.
pub fn collapse(mut values: Vec<f64>, bounds: &[(f64, f64)], target: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), 1 << bounds.len());

    for (axis, &(low, high)) in bounds.iter().enumerate() {
        let half = values.len() / 2;
        for i in 0..half {
            let f1 = values[2 * i];
            let f2 = values[2 * i + 1];
            values[i] = if low != high {
                let lambda = (target[axis] - low) / (high - low);
                lerp(f1, f2, lambda)
            } else {
                f1
            };
        }
        values.truncate(half);
    }
    values[0]
}
