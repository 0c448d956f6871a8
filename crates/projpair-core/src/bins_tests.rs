//! Tests for radial bin construction.

use crate::bins::RadialBins;
use crate::error::PairCountError;

#[test]
fn from_edges_squares_the_table() {
    let bins = RadialBins::from_edges(&[1.0, 2.0, 4.0]).unwrap();
    assert_eq!(bins.nbin(), 3);
    assert_eq!(bins.edges_sqr(), &[1.0, 4.0, 16.0]);
    assert_eq!(bins.rpmin_sqr(), 1.0);
    assert_eq!(bins.rpmax_sqr(), 16.0);
}

#[test]
fn from_edges_rejects_bad_tables() {
    assert!(matches!(
        RadialBins::from_edges(&[1.0]),
        Err(PairCountError::InvalidBins(_))
    ));
    assert!(matches!(
        RadialBins::from_edges(&[1.0, 1.0, 2.0]),
        Err(PairCountError::InvalidBins(_))
    ));
    assert!(matches!(
        RadialBins::from_edges(&[2.0, 1.0]),
        Err(PairCountError::InvalidBins(_))
    ));
    assert!(matches!(
        RadialBins::from_edges(&[-1.0, 1.0]),
        Err(PairCountError::InvalidBins(_))
    ));
    assert!(matches!(
        RadialBins::from_edges(&[0.0, f64::NAN]),
        Err(PairCountError::InvalidBins(_))
    ));
}

#[test]
fn logarithmic_pins_end_points() {
    let bins = RadialBins::logarithmic(0.1, 25.0, 14).unwrap();
    assert_eq!(bins.nbin(), 15);
    assert_eq!(bins.edges()[0], 0.1);
    assert_eq!(bins.edges()[14], 25.0);
    // Log spacing: constant ratio between consecutive edges.
    let ratio = bins.edges()[1] / bins.edges()[0];
    for w in bins.edges().windows(2) {
        assert!((w[1] / w[0] - ratio).abs() < 1e-9);
    }
}

#[test]
fn logarithmic_rejects_nonpositive_rmin() {
    assert!(RadialBins::logarithmic(0.0, 10.0, 5).is_err());
    assert!(RadialBins::logarithmic(-1.0, 10.0, 5).is_err());
}

#[test]
fn linear_spacing_is_uniform() {
    let bins = RadialBins::linear(0.0, 10.0, 5).unwrap();
    assert_eq!(bins.edges(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn bins_round_trip_through_serde() {
    // Exact equality needs serde_json's float_roundtrip feature: default
    // float parsing can land 1 ULP off and move computed log-spaced edges.
    let bins = RadialBins::logarithmic(0.5, 40.0, 18).unwrap();
    let json = serde_json::to_string(&bins).unwrap();
    let back: RadialBins = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bins);
}

#[test]
fn serde_form_is_the_edge_list() {
    let bins = RadialBins::from_edges(&[1.0, 2.0, 4.0]).unwrap();
    let json = serde_json::to_string(&bins).unwrap();
    assert_eq!(json, "[1.0,2.0,4.0]");
    let back: RadialBins = serde_json::from_str(&json).unwrap();
    assert_eq!(back.edges_sqr(), &[1.0, 4.0, 16.0]);
}

#[test]
fn deserialization_rejects_invalid_edge_tables() {
    // Bad tables must not sneak past from_edges via serde.
    assert!(serde_json::from_str::<RadialBins>("[2.0,1.0]").is_err());
    assert!(serde_json::from_str::<RadialBins>("[1.0,1.0,2.0]").is_err());
    assert!(serde_json::from_str::<RadialBins>("[-1.0,1.0]").is_err());
    assert!(serde_json::from_str::<RadialBins>("[1.0]").is_err());
    assert!(serde_json::from_str::<RadialBins>("[]").is_err());
}
