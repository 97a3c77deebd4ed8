use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;

use super::Graph;
use crate::error::{NumericsError, Result};

/// Vertex count of the dodecahedral graph.
pub const DODECAHEDRAL_VERTICES: usize = 20;

// LCF chord offsets of the dodecahedron, applied twice around the
// Hamiltonian cycle 0..19.
const DODECAHEDRAL_LCF: [isize; 10] = [10, 7, 4, -4, -7, 10, -4, 7, -7, 4];

/// Named graph topologies the Laplacian can be built from.
///
/// The choice is always explicit: the research scripts disagree on whether
/// "the DLSFH Laplacian" is the dodecahedron or a ring placeholder, so
/// callers must say which one they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Ring on `n >= 3` vertices; every vertex has degree 2.
    Cycle { n: usize },
    /// Path on `n >= 2` vertices.
    Path { n: usize },
    /// The 20-vertex, 3-regular dodecahedral graph.
    Dodecahedral,
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Cycle { .. } => "cycle",
            Topology::Path { .. } => "path",
            Topology::Dodecahedral => "dodecahedral",
        }
    }

    pub fn vertex_count(&self) -> usize {
        match *self {
            Topology::Cycle { n } | Topology::Path { n } => n,
            Topology::Dodecahedral => DODECAHEDRAL_VERTICES,
        }
    }

    pub fn build(&self) -> Result<Graph> {
        match *self {
            Topology::Cycle { n } => {
                check_min(self.name(), 3, n)?;
                Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
            }
            Topology::Path { n } => {
                check_min(self.name(), 2, n)?;
                Graph::from_edges(n, (1..n).map(|i| (i - 1, i)))
            }
            Topology::Dodecahedral => {
                let n = DODECAHEDRAL_VERTICES;
                let ring = (0..n).map(|i| (i, (i + 1) % n));
                let chords = (0..n).map(|i| {
                    let shift = DODECAHEDRAL_LCF[i % DODECAHEDRAL_LCF.len()];
                    (i, (i as isize + shift).rem_euclid(n as isize) as usize)
                });
                Graph::from_edges(n, ring.chain(chords))
            }
        }
    }

    /// Shortcut for `self.build()?.laplacian()`.
    pub fn laplacian(&self) -> Result<DMatrix<f64>> {
        Ok(self.build()?.laplacian())
    }
}

fn check_min(topology: &'static str, min: usize, n: usize) -> Result<()> {
    if n < min {
        return Err(NumericsError::InvalidSize { topology, min, n });
    }
    Ok(())
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Cycle { n } | Topology::Path { n } => write!(f, "{}({})", self.name(), n),
            Topology::Dodecahedral => f.write_str(self.name()),
        }
    }
}

/// Topology family without a size, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyKind {
    Cycle,
    Path,
    Dodecahedral,
}

impl TopologyKind {
    /// Attach a vertex count. Cycle and path need one; the dodecahedron
    /// accepts only its own size.
    pub fn with_size(self, n: Option<usize>) -> anyhow::Result<Topology> {
        match (self, n) {
            (TopologyKind::Cycle, Some(n)) => Ok(Topology::Cycle { n }),
            (TopologyKind::Path, Some(n)) => Ok(Topology::Path { n }),
            (TopologyKind::Cycle | TopologyKind::Path, None) => {
                anyhow::bail!("--N is required for the {:?} topology", self)
            }
            (TopologyKind::Dodecahedral, None) => Ok(Topology::Dodecahedral),
            (TopologyKind::Dodecahedral, Some(n)) => {
                anyhow::ensure!(
                    n == DODECAHEDRAL_VERTICES,
                    "the dodecahedral graph has {} vertices, got --N {}",
                    DODECAHEDRAL_VERTICES,
                    n
                );
                Ok(Topology::Dodecahedral)
            }
        }
    }
}

impl FromStr for TopologyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cycle" | "ring" => Ok(TopologyKind::Cycle),
            "path" => Ok(TopologyKind::Path),
            "dodecahedral" | "dodecahedron" => Ok(TopologyKind::Dodecahedral),
            other => Err(format!(
                "unknown topology '{}' (expected cycle, path or dodecahedral)",
                other
            )),
        }
    }
}
