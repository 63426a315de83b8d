use argminmax::ArgMinMax;
use itertools::Itertools;

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Nearest-rank percentile: sort ascending, take the element at rank
/// `ceil(pct * n)` (1-based). An empty sample set yields 0.0 so callers can
/// treat "no reference yet" as a zero reference without dividing by it.
pub fn nearest_rank_percentile(samples: &[f64], pct: f64) -> f64 {
    let n = samples.len();
    if n == 0 {
        return 0.0;
    }

    let sorted: Vec<f64> = samples.iter().copied().sorted_by(f64::total_cmp).collect();

    // Rank is 1-based and clamped so pct = 1.0 lands on the last element.
    let rank = ((pct * n as f64).ceil() as usize).clamp(1, n);
    sorted[rank - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_window_is_zero() {
        assert_eq!(nearest_rank_percentile(&[], 0.99), 0.0);
    }

    #[test]
    fn percentile_uses_nearest_rank_not_interpolation() {
        // n = 4, rank = ceil(0.99 * 4) = 4 -> largest element
        let samples = [2.0, 9.0, 4.0, 7.0];
        assert_eq!(nearest_rank_percentile(&samples, 0.99), 9.0);

        // n = 4, rank = ceil(0.5 * 4) = 2 -> second smallest
        assert_eq!(nearest_rank_percentile(&samples, 0.5), 4.0);
    }

    #[test]
    fn percentile_of_single_sample_is_that_sample() {
        assert_eq!(nearest_rank_percentile(&[3.5], 0.99), 3.5);
    }

    #[test]
    fn max_and_min_of_slice() {
        let vec = [1.0, 5.0, 3.0];
        assert_eq!(get_max(&vec), 5.0);
        assert_eq!(get_min(&vec), 1.0);
    }
}
