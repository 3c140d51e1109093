//! Distance oracle that checks symmetry on every probe.

use std::sync::atomic::{AtomicU64, Ordering};

use linkern_core::DistanceOracle;

/// Wraps an oracle and panics if any probed pair disagrees with its mirror.
///
/// Also counts probes, so tests can confirm the search actually consulted it.
#[derive(Debug)]
pub struct SymmetryCheckingOracle<O> {
    inner: O,
    probes: AtomicU64,
}

impl<O: DistanceOracle> SymmetryCheckingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            probes: AtomicU64::new(0),
        }
    }

    /// Number of `distance` calls so far.
    pub fn probes(&self) -> u64 {
        self.probes.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }
}

impl<O: DistanceOracle> DistanceOracle for SymmetryCheckingOracle<O> {
    fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        self.probes.fetch_add(1, Ordering::Relaxed);
        let ab = self.inner.distance(a, b);
        let ba = self.inner.distance(b, a);
        assert_eq!(ab, ba, "asymmetric distance probed at ({a}, {b})");
        ab
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_square;

    #[test]
    fn test_counts_probes() {
        let oracle = SymmetryCheckingOracle::new(unit_square());
        assert_eq!(oracle.distance(0, 2), 2f64.sqrt());
        assert_eq!(oracle.distance(1, 1), 0.0);
        assert_eq!(oracle.probes(), 2);
        assert_eq!(oracle.node_count(), 4);
    }

    #[derive(Debug)]
    struct Lopsided;

    impl DistanceOracle for Lopsided {
        fn node_count(&self) -> usize {
            2
        }

        fn distance(&self, a: usize, b: usize) -> f64 {
            if a < b {
                1.0
            } else {
                2.0
            }
        }
    }

    #[test]
    #[should_panic(expected = "asymmetric distance")]
    fn test_panics_on_asymmetry() {
        SymmetryCheckingOracle::new(Lopsided).distance(0, 1);
    }
}
