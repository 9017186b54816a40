use log::debug;
use nalgebra::Vector2;

use crate::error::numericerror::{
    NumericError,
    NumericResult
};
use crate::math::curve::curve::ParametricCurve;
use crate::math::curve::parametriccurve::bezierderivative::BezierDerivative;
use crate::math::point2d::Point2D;

// ─────────────────────────────────────────────
// BezierCurve (Bernstein form)
// ─────────────────────────────────────────────
//
//   B(t) = Σ_{i=0}^{n} C(n,i)·(1-t)^(n-i)·t^i·P_i
//
// C(n,i) is precomputed once per curve with the binomial recurrence
//   C(n,0) = 1,  C(n,i+1) = C(n,i)·(n-i)/(i+1)
// so each evaluation costs O(n). `t` is not clamped to [0, 1].

#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Point2D>,
    coefs: Vec<f64>
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2D>) -> NumericResult<BezierCurve> {
        if control_points.is_empty() {
            return Err(NumericError::InvalidDegree { points: 0, required: 1 });
        }

        let degree = control_points.len() - 1;
        let coefs = Self::compute_bernstein_coefs(degree);
        debug!("bezier curve built: degree {}", degree);

        Ok(BezierCurve { control_points, coefs })
    }

    fn compute_bernstein_coefs(degree: usize) -> Vec<f64> {
        let mut coefs = vec![1.0; degree + 1];
        for i in 0..degree {
            coefs[i + 1] = coefs[i] * (degree - i) as f64 / (i + 1) as f64;
        }
        coefs
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Bernstein coefficient table `[C(n,0), ..., C(n,n)]`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    pub fn control_points(&self) -> &[Point2D] {
        &self.control_points
    }

    /// Unscaled derivative evaluator over the same control points.
    pub fn derivative(&self) -> NumericResult<BezierDerivative> {
        BezierDerivative::new(self.control_points.clone())
    }
}

impl ParametricCurve for BezierCurve {
    fn point(&self, t: f64) -> Point2D {
        let degree = self.degree();
        let s = 1.0 - t;
        let sum = self
            .control_points
            .iter()
            .zip(self.coefs.iter())
            .enumerate()
            .fold(Vector2::<f64>::zeros(), |acc, (i, (pt, &coef))| {
                let b = coef * s.powi((degree - i) as i32) * t.powi(i as i32);
                acc + pt.to_vector() * b
            });
        Point2D::from(sum)
    }
}

/// Builds a standalone `t ↦ (x, y)` evaluator owning a copy of `points`.
pub fn bezier_evaluator(points: &[Point2D]) -> NumericResult<impl Fn(f64) -> (f64, f64) + use<>> {
    let curve = BezierCurve::new(points.to_vec())?;
    Ok(move |t: f64| curve.point(t).to_tuple())
}
