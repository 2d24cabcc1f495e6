pub struct Statistics;

impl Statistics {
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        let mut sum = 0.0;
        for &v in values {
            sum += v;
        }
        Some(sum / values.len() as f64)
    }

    /// Population (not sample) standard deviation, returned with the mean.
    pub fn mean_std_dev(values: &[f64]) -> Option<(f64, f64)> {
        let mean = Self::mean(values)?;
        let mut sum_squares = 0.0;
        for &v in values {
            let d = v - mean;
            sum_squares += d * d;
        }
        Some((mean, (sum_squares / values.len() as f64).sqrt()))
    }

    pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        let mut min = first;
        let mut max = first;
        for &v in values.iter().skip(1) {
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn mean_works() {
        let m = Statistics::mean(&[1.0, 2.0, 3.0]).unwrap();
        assert!((m - 2.0).abs() < 1e-9);
    }

    #[test]
    fn std_dev_is_population() {
        let (mean, sd) = Statistics::mean_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(Statistics::mean(&[]).is_none());
        assert!(Statistics::mean_std_dev(&[]).is_none());
        assert!(Statistics::min_max(&[]).is_none());
    }

    #[test]
    fn min_max_scans_all_values() {
        assert_eq!(Statistics::min_max(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
    }
}
