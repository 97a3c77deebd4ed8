pub mod topology;

pub use topology::Topology;

use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};

use crate::error::{NumericsError, Result};

/// Undirected simple graph on vertices `0..n`.
///
/// Edges are stored once, as `(i, j)` with `i < j`, in ascending order. That
/// ordering is what makes the matrices built from a graph reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Build a graph from an edge list. Duplicate edges (in either
    /// orientation) are merged; self loops and out-of-range endpoints are
    /// rejected.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut set = BTreeSet::new();
        for (u, v) in edges {
            if u == v || u >= n || v >= n {
                return Err(NumericsError::InvalidEdge { u, v, n });
            }
            set.insert((u.min(v), u.max(v)));
        }
        Ok(Self {
            n,
            edges: set.into_iter().collect(),
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn degrees(&self) -> Vec<usize> {
        let mut deg = vec![0; self.n];
        for &(u, v) in &self.edges {
            deg[u] += 1;
            deg[v] += 1;
        }
        deg
    }

    /// 0/1 adjacency matrix.
    pub fn adjacency(&self) -> DMatrix<f64> {
        let mut a = DMatrix::zeros(self.n, self.n);
        for &(u, v) in &self.edges {
            a[(u, v)] = 1.0;
            a[(v, u)] = 1.0;
        }
        a
    }

    /// Combinatorial Laplacian L = D - A.
    pub fn laplacian(&self) -> DMatrix<f64> {
        self.weighted_laplacian(|_, _| 1.0)
    }

    /// Weighted Laplacian L = D_w - W, where `weight(u, v)` gives the weight
    /// of edge `(u, v)` (called with `u < v`).
    pub fn weighted_laplacian<F>(&self, mut weight: F) -> DMatrix<f64>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut l = DMatrix::zeros(self.n, self.n);
        for &(u, v) in &self.edges {
            let w = weight(u, v);
            l[(u, u)] += w;
            l[(v, v)] += w;
            l[(u, v)] -= w;
            l[(v, u)] -= w;
        }
        l
    }

    /// Degree vector as floats, handy for `DMatrix::from_diagonal`.
    pub fn degree_vector(&self) -> DVector<f64> {
        DVector::from_iterator(self.n, self.degrees().into_iter().map(|d| d as f64))
    }
}
