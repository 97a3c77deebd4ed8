use nalgebra::DMatrix;

use vidnum::io::series::{read_convergence_csv, write_convergence_csv};
use vidnum::io::{load_matrix, save_matrix, ParameterBlock};
use vidnum::model::convergence::ConvergenceSeries;
use vidnum::{pseudoinverse, NumericsError, PinvMethod, Topology, DEFAULT_TOLERANCE};

fn bits(m: &DMatrix<f64>) -> Vec<u64> {
    m.iter().map(|v| v.to_bits()).collect()
}

#[test]
fn npy_round_trip_is_bit_exact() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let l = Topology::Dodecahedral.laplacian().unwrap();
    let l_pinv = pseudoinverse(&l, DEFAULT_TOLERANCE, PinvMethod::Svd).unwrap();
    // non-symmetric, so a transposed write would be caught
    let skew = DMatrix::from_fn(3, 5, |i, j| (i as f64 + 0.1) / (j as f64 + 7.0) - 1e-300);

    for (name, m) in [("l.npy", &l), ("l_pinv.npy", &l_pinv), ("skew.npy", &skew)] {
        let path = tmp.path().join("nested").join(name);
        save_matrix(&path, m).expect("save");
        let back = load_matrix(&path).expect("load");
        assert_eq!(back.shape(), m.shape());
        assert_eq!(bits(&back), bits(m), "{} changed on round trip", name);
    }
}

#[test]
fn npy_header_is_standard_c_order_f64() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("m.npy");
    save_matrix(&path, &DMatrix::from_element(2, 3, 1.5)).unwrap();

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(&raw[..6], b"\x93NUMPY");
    let header = String::from_utf8_lossy(&raw[10..]);
    assert!(header.contains("'descr': '<f8'"));
    assert!(header.contains("'fortran_order': False"));
    assert!(header.contains("'shape': (2, 3)"));
}

#[test]
fn missing_matrix_file_is_not_found() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("absent.npy");
    let err = load_matrix(&path).unwrap_err();
    match err.downcast_ref::<NumericsError>() {
        Some(NumericsError::NotFound(p)) => assert_eq!(p, &path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn parameter_block_json_snapshot() {
    let json = ParameterBlock::default().to_json().expect("json");
    insta::assert_snapshot!("parameters_json", json);
}

#[test]
fn parameter_block_round_trips_through_disk() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("data").join("parameters.json");
    let params = ParameterBlock::default();
    params.save(&path).expect("save");
    assert_eq!(ParameterBlock::load(&path).expect("load"), params);

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["truncation_depth_N"], 50);
    assert_eq!(value["random_seed"], 42);
    assert_eq!(value["units"]["Delta_pinv"], "dimensionless propagator");
}

#[test]
fn convergence_csv_round_trips() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("series.csv");
    let series = ConvergenceSeries {
        term_norms: vec![0.75, 0.1875, 0.046875],
        partial_norms: vec![0.75, 0.9375, 0.984375],
    };
    write_convergence_csv(&path, &series).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("m,term_norm,partial_norm\n1,0.75,0.75\n"));
    assert_eq!(read_convergence_csv(&path).unwrap(), series);
}
