//! Distance oracles.

use std::fmt::Debug;

use crate::error::{LinKernError, Result};

/// Read-only pairwise distances indexed by node id.
///
/// Implementations must be symmetric with a zero diagonal and finite,
/// non-negative entries. No bounds validation is performed beyond what
/// indexing itself does.
pub trait DistanceOracle: Send + Sync + Debug {
    /// Number of nodes the oracle covers.
    fn node_count(&self) -> usize;

    /// Distance between nodes `a` and `b`.
    fn distance(&self, a: usize, b: usize) -> f64;
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    #[inline]
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    #[inline]
    fn distance(&self, a: usize, b: usize) -> f64 {
        (**self).distance(a, b)
    }
}

/// Dense symmetric N×N distance matrix.
///
/// Stored row-major in a single allocation. Construction validates the
/// full contract, so a `DistanceMatrix` is always square, symmetric,
/// finite, non-negative and zero on the diagonal.
///
/// # Examples
///
/// ```
/// use linkern_core::{DistanceMatrix, DistanceOracle};
///
/// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(m.node_count(), 3);
/// assert_eq!(m.distance(0, 2), 5.0);
/// assert_eq!(m.distance(2, 0), 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows, validating the whole contract.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(LinKernError::NotSquare {
                    rows: n,
                    row,
                    len: values.len(),
                });
            }
            data.extend(values);
        }

        let matrix = Self { n, data };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix by evaluating `f` on the upper triangle and mirroring it.
    ///
    /// Symmetry holds by construction; `f` is called once per unordered pair.
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = vec![0.0; n * n];
        for a in 0..n {
            for b in (a + 1)..n {
                let value = f(a, b);
                check_entry(a, b, value)?;
                data[a * n + b] = value;
                data[b * n + a] = value;
            }
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix over arbitrary points with a caller-supplied metric.
    pub fn from_points<T, F>(points: &[T], metric: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> f64,
    {
        Self::from_fn(points.len(), |a, b| metric(&points[a], &points[b]))
    }

    /// Builds a Euclidean matrix over planar coordinates.
    pub fn euclidean(points: &[(f64, f64)]) -> Result<Self> {
        Self::from_points(points, |&(ax, ay), &(bx, by)| {
            ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
        })
    }

    /// Returns the distances from `node` to every node.
    pub fn row(&self, node: usize) -> &[f64] {
        &self.data[node * self.n..(node + 1) * self.n]
    }

    fn validate(&self) -> Result<()> {
        for a in 0..self.n {
            let diagonal = self.data[a * self.n + a];
            if diagonal != 0.0 {
                return Err(LinKernError::InvalidDistance {
                    a,
                    b: a,
                    value: diagonal,
                });
            }
            for b in (a + 1)..self.n {
                let ab = self.data[a * self.n + b];
                check_entry(a, b, ab)?;
                if ab != self.data[b * self.n + a] {
                    return Err(LinKernError::Asymmetric { a, b });
                }
            }
        }
        Ok(())
    }
}

fn check_entry(a: usize, b: usize, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LinKernError::InvalidDistance { a, b, value })
    }
}

impl DistanceOracle for DistanceMatrix {
    #[inline]
    fn node_count(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.n + b]
    }
}
