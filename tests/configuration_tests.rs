use approx::assert_relative_eq;

use curvekit::{
    Configuration,
    ConfigurationError,
    DerivativeScale,
    ParametricCurve,
    Point2D,
    SegmentSearch
};
use curvekit::configuration::{
    BezierConfiguration,
    PchipConfiguration
};

#[test]
fn test_defaults() {
    let config = Configuration::new();
    assert_eq!(config.bezier.derivative_scale, DerivativeScale::Unscaled);
    assert_eq!(config.pchip.segment_search, SegmentSearch::ForwardCursor);
    assert_eq!(Configuration::from_json_str("{}").unwrap(), config);
}

#[test]
fn test_full_json() {
    let config = Configuration::from_json_str(
        r#"{ "bezier": { "derivative_scale": "Degree" },
             "pchip":  { "segment_search": "BinarySearch" } }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        Configuration {
            bezier: BezierConfiguration { derivative_scale: DerivativeScale::Degree },
            pchip: PchipConfiguration { segment_search: SegmentSearch::BinarySearch }
        }
    );
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = Configuration::from_json_str(r#"{ "pchip": { "segment_search": "BinarySearch" } }"#).unwrap();
    assert_eq!(config.bezier.derivative_scale, DerivativeScale::Unscaled);
    assert_eq!(config.pchip.segment_search, SegmentSearch::BinarySearch);

    let config = Configuration::from_json_str(r#"{ "bezier": {} }"#).unwrap();
    assert_eq!(config, Configuration::default());
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        Configuration::from_json_str(r#"{ "pchip": { "segment_search": "Linear" } }"#),
        Err(ConfigurationError::JsonParseError(_))
    ));
    assert!(matches!(
        Configuration::from_json_str("{ not json"),
        Err(ConfigurationError::JsonParseError(_))
    ));
}

#[test]
fn test_from_reader() {
    let path = std::env::temp_dir().join(format!("curvekit-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "bezier": { "derivative_scale": "Degree" } }"#).unwrap();
    let config = Configuration::from_reader(&path);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().bezier.derivative_scale, DerivativeScale::Degree);
}

#[test]
fn test_from_reader_missing_file() {
    let path = std::env::temp_dir().join("curvekit-config-does-not-exist.json");
    assert!(matches!(
        Configuration::from_reader(&path),
        Err(ConfigurationError::IOError(_))
    ));
}

#[test]
fn test_configured_components() {
    let config = Configuration::from_json_str(
        r#"{ "bezier": { "derivative_scale": "Degree" },
             "pchip":  { "segment_search": "BinarySearch" } }"#,
    )
    .unwrap();

    let control_points = vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 2.0), Point2D::new(2.0, 0.0)];
    let derivative = config.bezier_derivative(control_points).unwrap();
    let d = derivative.point(0.0);
    assert_relative_eq!(d.x(), 2.0, epsilon = 1e-15);
    assert_relative_eq!(d.y(), 4.0, epsilon = 1e-15);

    let pchip = config
        .pchip(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 8.0, 27.0])
        .unwrap();
    assert_eq!(pchip.search(), SegmentSearch::BinarySearch);
    assert!(config.pchip(vec![0.0, 1.0], vec![0.0, 1.0]).is_err());
}
