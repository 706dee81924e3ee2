//! Summary statistics over trial rates.

use crate::error::{BloomTrialError, Result};

/// Median of `values`.
///
/// An even-length sample averages its two middle elements. NaN sorts after
/// every finite value.
///
/// # Errors
///
/// Returns [`BloomTrialError::EmptySample`] if `values` is empty.
///
/// # Examples
///
/// ```
/// use bloomtrial::trial::median;
///
/// assert_eq!(median(&[0.3, 0.1, 0.2]).unwrap(), 0.2);
/// assert!((median(&[0.1, 0.2, 0.3, 0.4]).unwrap() - 0.25).abs() < 1e-12);
/// assert!(median(&[]).is_err());
/// ```
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(BloomTrialError::empty_sample("median"));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`BloomTrialError::EmptySample`] if `values` is empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(BloomTrialError::empty_sample("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0]).unwrap(), 5.0);
        assert_eq!(median(&[9.0, 1.0, 4.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_median_even() {
        let m = median(&[0.4, 0.1, 0.3, 0.2]).unwrap();
        assert!((m - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        median(&values).unwrap();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(
            median(&[]),
            Err(BloomTrialError::EmptySample { statistic: "median" })
        );
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[0.1, 0.2, 0.3]).unwrap() - 0.2).abs() < 1e-12);
        assert!(mean(&[]).is_err());
    }
}
