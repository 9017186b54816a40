use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::error::configurationerror::ConfigurationError;
use crate::error::numericerror::NumericResult;
use crate::math::curve::nonparametriccurve::piecewisecubichermite::{
    PiecewiseCubicHermite,
    SegmentSearch
};
use crate::math::curve::parametriccurve::bezierderivative::{
    BezierDerivative,
    DerivativeScale
};
use crate::math::point2d::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BezierConfiguration {
    pub derivative_scale: DerivativeScale
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PchipConfiguration {
    pub segment_search: SegmentSearch
}

/// Component options, e.g.
///
/// ```json
/// { "bezier": { "derivative_scale": "Degree" },
///   "pchip":  { "segment_search": "BinarySearch" } }
/// ```
///
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub bezier: BezierConfiguration,
    pub pchip: PchipConfiguration
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bezier_derivative(&self, control_points: Vec<Point2D>) -> NumericResult<BezierDerivative> {
        BezierDerivative::with_scale(control_points, self.bezier.derivative_scale)
    }

    pub fn pchip(&self, x_data: Vec<f64>, y_data: Vec<f64>) -> NumericResult<PiecewiseCubicHermite> {
        Ok(PiecewiseCubicHermite::new(x_data, y_data)?.with_search(self.pchip.segment_search))
    }
}
