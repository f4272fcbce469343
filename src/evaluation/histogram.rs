use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HistogramError {
    #[error("histogram needs at least two edges, got {0}")]
    TooFewEdges(usize),

    #[error("histogram range must be finite and increasing, got [{0}, {1}]")]
    InvalidRange(f64, f64),
}

/// Fixed-edge histogram.
///
/// Bins are half-open `[e_i, e_{i+1})` except the last, which also includes
/// its right edge. Values outside the edges (and `NaN`) are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<u64>,
}

impl Histogram {
    /// `edge_count` evenly spaced edges spanning `[lo, hi]`.
    pub fn with_uniform_edges(lo: f64, hi: f64, edge_count: usize) -> Result<Self, HistogramError> {
        if edge_count < 2 {
            return Err(HistogramError::TooFewEdges(edge_count));
        }
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(HistogramError::InvalidRange(lo, hi));
        }
        Ok(Self {
            edges: linspace(lo, hi, edge_count),
            counts: vec![0; edge_count - 1],
        })
    }

    pub fn fill<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for v in values {
            if let Some(bin) = self.bin_of(v) {
                self.counts[bin] += 1;
            }
        }
    }

    fn bin_of(&self, v: f64) -> Option<usize> {
        let lo = *self.edges.first()?;
        let hi = *self.edges.last()?;
        if !(lo..=hi).contains(&v) {
            return None;
        }
        let last = self.counts.len() - 1;
        let idx = self.edges.partition_point(|&e| e <= v);
        Some((idx - 1).min(last))
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// `n` evenly spaced points from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}
