//! Circular (wrapped) statistics over angles given in degrees.
//!
//! See the wrapped normal distribution: the mean direction is the argument of
//! the summed unit vectors and the dispersion follows from their resultant length.

/// Accumulated unit-vector sums for a set of angles.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CircularStats {
    pub sum_sin: f64,
    pub sum_cos: f64,
    pub count: usize,
}

impl CircularStats {
    pub fn from_degrees(angles: &[f64]) -> Self {
        let mut stats = CircularStats::default();
        for &a in angles {
            stats.push_degrees(a);
        }
        stats
    }

    pub fn push_degrees(&mut self, angle: f64) {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.sum_sin += sin;
        self.sum_cos += cos;
        self.count += 1;
    }

    /// Mean direction in degrees, in `[-180, 180]`.
    pub fn mean_degrees(&self) -> f64 {
        self.sum_sin.atan2(self.sum_cos).to_degrees()
    }

    /// Squared mean resultant length `R²`, in `[0, 1]`.
    ///
    /// Rounding can push the raw ratio slightly above one for tightly packed
    /// angles; the result is capped so the logarithm below stays non-positive.
    pub fn resultant_length_sq(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let r2 = (self.sum_sin * self.sum_sin + self.sum_cos * self.sum_cos) / (n * n);
        r2.min(1.0)
    }

    /// Circular standard deviation `sqrt(-ln R²)` in degrees.
    ///
    /// Infinite when the angles cancel out completely (`R² == 0`).
    pub fn std_dev_degrees(&self) -> f64 {
        let r2 = self.resultant_length_sq();
        (-r2.ln()).max(0.0).sqrt().to_degrees()
    }
}
