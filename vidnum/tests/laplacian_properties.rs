use nalgebra::{DMatrix, DVector};

use vidnum::graph::topology::{TopologyKind, DODECAHEDRAL_VERTICES};
use vidnum::{Graph, NumericsError, Topology};

fn assert_laplacian_invariants(l: &DMatrix<f64>, n: usize) {
    assert_eq!(l.shape(), (n, n));
    assert_eq!(l, &l.transpose(), "Laplacian must be symmetric");

    for i in 0..n {
        let row_sum: f64 = l.row(i).iter().sum();
        assert!(row_sum.abs() < 1e-12, "row {} sums to {}", i, row_sum);
    }

    let ones = DVector::from_element(n, 1.0);
    let v = l * ones;
    assert!(v.amax() < 1e-8, "all-ones vector is not in the kernel");
}

#[test]
fn cycle_laplacian_basic_properties() {
    for n in [3, 4, 5, 10, 20, 57] {
        let l = Topology::Cycle { n }.laplacian().expect("cycle laplacian");
        assert_laplacian_invariants(&l, n);
        assert!(l.diagonal().iter().all(|d| *d == 2.0));
        assert_eq!(l[(0, n - 1)], -1.0);
        assert_eq!(l[(0, 1)], -1.0);
    }
}

#[test]
fn cycle_of_two_is_an_invalid_size() {
    let err = Topology::Cycle { n: 2 }.laplacian().unwrap_err();
    assert!(matches!(
        err,
        NumericsError::InvalidSize { topology: "cycle", min: 3, n: 2 }
    ));

    assert!(matches!(
        Topology::Cycle { n: 0 }.build(),
        Err(NumericsError::InvalidSize { .. })
    ));
    assert!(matches!(
        Topology::Path { n: 1 }.build(),
        Err(NumericsError::InvalidSize { min: 2, .. })
    ));
}

#[test]
fn dodecahedral_graph_is_cubic_with_thirty_edges() {
    let graph = Topology::Dodecahedral.build().expect("dodecahedron");
    assert_eq!(graph.vertex_count(), DODECAHEDRAL_VERTICES);
    assert_eq!(graph.edges().len(), 30);
    assert!(graph.degrees().iter().all(|d| *d == 3));

    let l = graph.laplacian();
    assert_laplacian_invariants(&l, DODECAHEDRAL_VERTICES);
    assert_eq!(l.diagonal(), graph.degree_vector());
    assert_eq!(l, DMatrix::from_diagonal(&graph.degree_vector()) - graph.adjacency());
}

#[test]
fn dodecahedral_laplacian_is_reproducible() {
    let a = Topology::Dodecahedral.laplacian().unwrap();
    let b = Topology::Dodecahedral.laplacian().unwrap();
    assert_eq!(a, b);

    // ring edges of the Hamiltonian cycle come first in label order
    let graph = Topology::Dodecahedral.build().unwrap();
    assert_eq!(graph.edges()[0], (0, 1));
    assert!(graph.edges().contains(&(0, 10)));
    assert!(graph.edges().contains(&(0, 19)));
}

#[test]
fn path_laplacian_has_degree_one_endpoints() {
    let l = Topology::Path { n: 5 }.laplacian().unwrap();
    assert_laplacian_invariants(&l, 5);
    assert_eq!(l[(0, 0)], 1.0);
    assert_eq!(l[(4, 4)], 1.0);
    assert_eq!(l[(2, 2)], 2.0);
    assert_eq!(l[(0, 4)], 0.0);
}

#[test]
fn from_edges_merges_duplicates_and_rejects_loops() {
    let g = Graph::from_edges(3, [(0, 1), (1, 0), (1, 2)]).unwrap();
    assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
    assert_eq!(g.degrees(), vec![1, 2, 1]);

    assert!(matches!(
        Graph::from_edges(3, [(1, 1)]),
        Err(NumericsError::InvalidEdge { u: 1, v: 1, n: 3 })
    ));
    assert!(matches!(
        Graph::from_edges(3, [(0, 3)]),
        Err(NumericsError::InvalidEdge { .. })
    ));
}

#[test]
fn weighted_laplacian_keeps_zero_row_sums() {
    let g = Topology::Cycle { n: 6 }.build().unwrap();
    let l = g.weighted_laplacian(|u, v| (u + v) as f64 * 0.5);
    assert_laplacian_invariants(&l, 6);
    assert_eq!(l[(0, 1)], -0.5);
    assert_eq!(l[(0, 5)], -2.5);
    assert_eq!(l[(0, 0)], 3.0);
}

#[test]
fn topology_kind_requires_explicit_size_rules() {
    let cycle: TopologyKind = "cycle".parse().unwrap();
    assert_eq!(cycle.with_size(Some(8)).unwrap(), Topology::Cycle { n: 8 });
    assert!(cycle.with_size(None).is_err());

    let dodeca: TopologyKind = "Dodecahedral".parse().unwrap();
    assert_eq!(dodeca.with_size(None).unwrap(), Topology::Dodecahedral);
    assert_eq!(dodeca.with_size(Some(20)).unwrap(), Topology::Dodecahedral);
    assert!(dodeca.with_size(Some(12)).is_err());

    assert!("torus".parse::<TopologyKind>().is_err());
}
