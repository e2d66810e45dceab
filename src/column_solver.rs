//! Resolving actual column widths from aggregated extents.

/// Resolve per-column widths from the column-wise `(min, max)` extents
/// and the available content width.
///
/// When every column fits at its maximum, the maxima win. When even the
/// minima overflow, the minima win and the output overflows the target.
/// Otherwise each column receives its minimum plus a share of the slack
/// proportional to its elasticity `max - min`. Integer division
/// truncates, so the total may fall short of `available` by up to
/// `columns - 1` cells; the residual is not redistributed.
pub fn compute_column_widths(
    min_widths: &[usize],
    max_widths: &[usize],
    available: usize,
) -> Vec<usize> {
    debug_assert_eq!(min_widths.len(), max_widths.len());
    let sum_min: usize = min_widths.iter().sum();
    let sum_max: usize = max_widths.iter().sum();
    if sum_max <= available {
        max_widths.to_vec()
    } else if sum_min >= available {
        min_widths.to_vec()
    } else {
        let slack = available - sum_min;
        // Nonzero since sum_min < available < sum_max.
        let elasticity = sum_max - sum_min;
        min_widths
            .iter()
            .zip(max_widths.iter())
            .map(|(lo, hi)| lo + slack * (hi - lo) / elasticity)
            .collect()
    }
}
