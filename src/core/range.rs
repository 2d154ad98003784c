/// Evenly spaced floating-point values from `start` up to (excluding) `stop`.
///
/// Steps by repeated addition rather than `start + n * increment`, so the
/// values carry the usual accumulation drift (0.1 + 0.1 + 0.1 is not exactly
/// 0.3). Callers that compare generated values against exact decimals must
/// account for that.
///
/// A non-positive increment with `start < stop` never terminates; the
/// configuration layer rejects such values before this iterator is built.
#[derive(Debug, Clone)]
pub struct DecimalRange {
    next: f64,
    stop: f64,
    increment: f64,
}

impl DecimalRange {
    pub fn new(start: f64, stop: f64, increment: f64) -> Self {
        Self {
            next: start,
            stop,
            increment,
        }
    }
}

impl Iterator for DecimalRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.stop {
            let value = self.next;
            self.next += self.increment;
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_axis_is_exactly_three_values() {
        let values: Vec<f64> = DecimalRange::new(-1.0, 1.0001, 1.0).collect();
        assert_eq!(values, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_stops_strictly_before_bound() {
        let values: Vec<f64> = DecimalRange::new(0.0, 1.0, 0.5).collect();
        assert_eq!(values, vec![0.0, 0.5]);
    }

    #[test]
    fn test_empty_when_start_not_below_stop() {
        assert_eq!(DecimalRange::new(1.0, 1.0, 0.1).count(), 0);
        assert_eq!(DecimalRange::new(2.0, 1.0, 0.5).count(), 0);
    }

    #[test]
    fn test_accumulation_drift_is_preserved() {
        let values: Vec<f64> = DecimalRange::new(0.0, 0.7, 0.1).collect();
        assert_eq!(values.len(), 7);

        // 0.1 + 0.1 + 0.1 lands just above 0.3; multiplication-based
        // stepping would hide this.
        assert!((values[3] - 0.3).abs() < 1e-9);
        assert!(values[3] > 0.3);
    }

    #[test]
    fn test_drift_can_slip_an_extra_value_under_the_bound() {
        // Accumulated 0.1 steps reach 0.9999999999999999, which is still
        // strictly below 1.0, so an eleventh value is produced.
        let values: Vec<f64> = DecimalRange::new(0.0, 1.0, 0.1).collect();
        assert_eq!(values.len(), 11);
        assert!(*values.last().unwrap() < 1.0);
        assert!((values.last().unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_values_are_strictly_ascending() {
        let values: Vec<f64> = DecimalRange::new(-2.0, 2.0001, 0.25).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
