use super::Mode;

/// Scalar fold reducing per-line measurements to one width.
///
/// Starts at 0 for max mode and at the bounding-box diagonal for min mode
/// (the guaranteed upper bound on any chord, so the first real measurement
/// always wins). Zero measurements are excluded in min mode: a probe that
/// missed or only grazed the polygon would otherwise force the minimum to 0.
#[derive(Debug, Clone, Copy)]
pub struct WidthAggregator {
    mode: Mode,
    width: f64,
}

impl WidthAggregator {
    /// Creates an aggregator for one feature; `diagonal` is the feature's
    /// bounding-box diagonal.
    #[must_use]
    pub fn new(mode: Mode, diagonal: f64) -> Self {
        let width = match mode {
            Mode::Max => 0.0,
            Mode::Min => diagonal,
        };
        Self { mode, width }
    }

    /// Folds one measurement into the running width.
    pub fn push(&mut self, w: f64) {
        match self.mode {
            Mode::Max => self.width = self.width.max(w),
            Mode::Min => {
                if w > 0.0 {
                    self.width = self.width.min(w);
                }
            }
        }
    }

    /// Returns the final width after the measurement sequence is exhausted.
    #[must_use]
    pub fn finish(self) -> f64 {
        self.width
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn max_starts_at_zero() {
        let agg = WidthAggregator::new(Mode::Max, 10.0);
        assert!(agg.finish().abs() < 1e-12);
    }

    #[test]
    fn min_starts_at_diagonal() {
        let agg = WidthAggregator::new(Mode::Min, 10.0);
        assert!((agg.finish() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn running_max_is_non_decreasing() {
        let mut agg = WidthAggregator::new(Mode::Max, 10.0);
        let mut previous = agg.finish();
        for w in [1.0, 3.0, 2.0, 0.0, 5.0, 4.0] {
            agg.push(w);
            assert!(agg.finish() >= previous);
            previous = agg.finish();
        }
        assert!((agg.finish() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn running_min_is_non_increasing() {
        let mut agg = WidthAggregator::new(Mode::Min, 10.0);
        let mut previous = agg.finish();
        for w in [4.0, 2.0, 3.0, 1.0] {
            agg.push(w);
            assert!(agg.finish() <= previous);
            previous = agg.finish();
        }
        assert!((agg.finish() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn min_ignores_zero_measurements() {
        let mut agg = WidthAggregator::new(Mode::Min, 10.0);
        agg.push(2.0);
        agg.push(0.0);
        assert!((agg.finish() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn max_sentinel_loses() {
        // Rel mode reports −1 for a probe with no crossing.
        let mut agg = WidthAggregator::new(Mode::Max, 10.0);
        agg.push(-1.0);
        assert!(agg.finish().abs() < 1e-12);
    }
}
