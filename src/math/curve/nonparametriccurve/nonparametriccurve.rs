use crate::math::point2d::Point2D;

/// Curve defined by sample points on `[min_x, max_x]`.
pub trait NonparametricCurve {
    fn points(&self) -> Vec<Point2D>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    fn contains(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
