use serde::Deserialize;

/// One measured point: an allocation size and the average access latency
/// observed for random and sequential walks over it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatencySample {
    pub bytes: f64,
    pub random_ns: f64,
    pub sequential_ns: f64,
}

/// Ordered, immutable table of samples as they appeared in the input file.
/// Row order is meaningful (the benchmark sweeps sizes in order); nothing
/// here reorders or filters.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyTable {
    samples: Vec<LatencySample>,
}

impl LatencyTable {
    pub fn new(samples: Vec<LatencySample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[LatencySample] {
        &self.samples
    }

    /// Column 0: allocation sizes in bytes, in row order.
    pub fn sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.bytes)
    }

    /// Column 1: random-access latencies in nanoseconds, in row order.
    pub fn random_ns(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.random_ns)
    }

    /// Column 2: sequential-access latencies in nanoseconds, in row order.
    pub fn sequential_ns(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.sequential_ns)
    }
}
