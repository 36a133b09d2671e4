// ---------------------------------------------------------------------------
// Running clock-rate statistics
// ---------------------------------------------------------------------------

/// Sum / min / max / count accumulated one rate at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileStatistics {
    sum: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl Default for FileStatistics {
    fn default() -> Self {
        Self {
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }
}

impl FileStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one clock rate into the accumulator.
    pub fn update(&mut self, clock_rate: f64) {
        self.sum += clock_rate;
        self.min = self.min.min(clock_rate);
        self.max = self.max.max(clock_rate);
        self.count += 1;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// `None` until the first update.
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// `None` until the first update.
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    /// Mean rate, or 0 when empty.
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            0.0
        }
    }

    /// `max - min`, or 0 when empty.
    pub fn range(&self) -> f64 {
        if self.count > 0 {
            self.max - self.min
        } else {
            0.0
        }
    }
}

impl Extend<f64> for FileStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for rate in iter {
            self.update(rate);
        }
    }
}

impl FromIterator<f64> for FileStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = FileStatistics::new();
        stats.extend(iter);
        stats
    }
}
