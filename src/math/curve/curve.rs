use crate::math::point2d::Point2D;

/// Scalar curve `x ↦ y`.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

/// Parametric planar curve `t ↦ (x, y)`.
pub trait ParametricCurve {
    fn point(&self, t: f64) -> Point2D;

    /// Evaluates the curve at `count` evenly spaced parameters covering `[0, 1]`.
    ///
    /// A single sample is taken at `t = 0`.
    fn sample(&self, count: usize) -> Vec<Point2D> {
        match count {
            0 => Vec::new(),
            1 => vec![self.point(0.0)],
            _ => {
                let last = (count - 1) as f64;
                (0..count)
                    .map(|i| self.point(i as f64 / last))
                    .collect()
            }
        }
    }
}
