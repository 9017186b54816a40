use log::debug;
use serde::{
    Deserialize,
    Serialize
};

use crate::error::numericerror::{
    NumericError,
    NumericResult
};
use crate::math::curve::curve::ParametricCurve;
use crate::math::curve::parametriccurve::beziercurve::BezierCurve;
use crate::math::point2d::Point2D;

/// Scaling applied to the difference of the two degree `n-1` sub-curves.
///
/// The sub-curve difference equals `B'(t) / n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DerivativeScale {
    /// `B₁(t) - B₀(t)`, without the factor `n`.
    #[default]
    Unscaled,
    /// `n·(B₁(t) - B₀(t))`, the derivative of the curve with respect to `t`.
    Degree
}

/// Derivative evaluator of a Bézier curve of degree `n >= 1`.
///
/// `leading` drops the first control point, `trailing` drops the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierDerivative {
    leading: BezierCurve,
    trailing: BezierCurve,
    scale: DerivativeScale
}

impl BezierDerivative {
    pub fn new(control_points: Vec<Point2D>) -> NumericResult<BezierDerivative> {
        Self::with_scale(control_points, DerivativeScale::Unscaled)
    }

    pub fn with_scale(
        control_points: Vec<Point2D>,
        scale: DerivativeScale,
    ) -> NumericResult<BezierDerivative> {
        let len = control_points.len();
        if len < 2 {
            return Err(NumericError::InvalidDegree { points: len, required: 2 });
        }

        let leading = BezierCurve::new(control_points[1..].to_vec())?;
        let trailing = BezierCurve::new(control_points[..len - 1].to_vec())?;
        debug!("bezier derivative built: degree {}, scale {:?}", len - 1, scale);

        Ok(BezierDerivative { leading, trailing, scale })
    }

    /// Degree of the differentiated curve.
    pub fn degree(&self) -> usize {
        self.leading.degree() + 1
    }

    pub fn scale(&self) -> DerivativeScale {
        self.scale
    }
}

impl ParametricCurve for BezierDerivative {
    fn point(&self, t: f64) -> Point2D {
        let diff = self.leading.point(t) - self.trailing.point(t);
        match self.scale {
            DerivativeScale::Unscaled => diff,
            DerivativeScale::Degree => diff * self.degree() as f64
        }
    }
}

/// Builds a standalone unscaled derivative evaluator `t ↦ (dx, dy)`.
pub fn bezier_derivative(points: &[Point2D]) -> NumericResult<impl Fn(f64) -> (f64, f64) + use<>> {
    let derivative = BezierDerivative::new(points.to_vec())?;
    Ok(move |t: f64| derivative.point(t).to_tuple())
}
