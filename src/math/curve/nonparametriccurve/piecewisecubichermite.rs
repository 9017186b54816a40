use log::{
    debug,
    warn
};
use serde::{
    Deserialize,
    Serialize
};

use crate::error::numericerror::{
    NumericError,
    NumericResult
};
use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
use crate::math::point2d::Point2D;

// ─────────────────────────────────────────────
// PCHIP (Piecewise Cubic Hermite Interpolating Polynomial)
// ─────────────────────────────────────────────
//
// Segment n spans [x[n-1], x[n]] for n in 1..=m-1, with width h(n).
// Secant slopes around it:
//   d0 = (y[n-1] - y[n-2]) / h(n-1)
//   d1 = (y[n]   - y[n-1]) / h(n)
//   d2 = (y[n+1] - y[n])   / h(n+1)
// Endpoint slopes are width-weighted blends of adjacent secants:
//   fp0 = (h(n-1)·d0 + h(n)·d1) / (h(n-1) + h(n))     (d1 on the first segment)
//   fp1 = (h(n)·d1 + h(n+1)·d2) / (h(n) + h(n+1))     (d1 on the last segment)
// No sign limiter is applied, and fp0/fp1 enter the Hermite basis on the
// normalised parameter v ∈ [0, 1] without rescaling by h(n).

/// Minimum number of samples accepted by [`PiecewiseCubicHermite`].
pub const MIN_SAMPLES: usize = 4;

/// How a batch of queries is mapped to segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SegmentSearch {
    /// One cursor advanced monotonically across the batch; queries must be
    /// non-decreasing. A decreasing query is evaluated on the segment the
    /// cursor already reached.
    #[default]
    ForwardCursor,
    /// Independent binary search per query; any query order.
    BinarySearch
}

#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCubicHermite {
    x_data: Vec<f64>,
    y_data: Vec<f64>,
    /// widths[n - 1] = x[n] - x[n-1]
    widths: Vec<f64>,
    search: SegmentSearch
}

impl PiecewiseCubicHermite {
    pub fn new(x_data: Vec<f64>, y_data: Vec<f64>) -> NumericResult<PiecewiseCubicHermite> {
        if x_data.len() != y_data.len() || x_data.len() < MIN_SAMPLES {
            return Err(NumericError::InsufficientSamples {
                x_len: x_data.len(),
                y_len: y_data.len(),
                required: MIN_SAMPLES
            });
        }

        // `!(>)` also rejects NaN abscissae
        if let Some(i) = x_data.windows(2).position(|pair| !(pair[1] > pair[0])) {
            return Err(NumericError::UnsortedInput { index: i + 1 });
        }

        let widths = x_data.windows(2).map(|pair| pair[1] - pair[0]).collect();
        debug!("pchip built: {} samples on [{}, {}]", x_data.len(), x_data[0], x_data[x_data.len() - 1]);

        Ok(PiecewiseCubicHermite {
            x_data,
            y_data,
            widths,
            search: SegmentSearch::default()
        })
    }

    pub fn with_search(mut self, search: SegmentSearch) -> PiecewiseCubicHermite {
        self.search = search;
        self
    }

    pub fn search(&self) -> SegmentSearch {
        self.search
    }

    /// Interpolates every query in order; queries outside `[x[0], x[m-1]]`
    /// (or NaN) yield `f64::NAN` without affecting their neighbours.
    pub fn interpolate(&self, queries: &[f64]) -> Vec<f64> {
        let mut cursor = 1;
        let mut previous = f64::NEG_INFINITY;
        let mut warned = false;

        queries
            .iter()
            .map(|&q| {
                if !self.contains(q) {
                    return f64::NAN;
                }
                let n = match self.search {
                    SegmentSearch::ForwardCursor => {
                        if q < previous && !warned {
                            warn!("pchip: query {} follows {}, forward cursor does not rewind", q, previous);
                            warned = true;
                        }
                        previous = q;
                        while self.x_data[cursor] < q {
                            cursor += 1;
                        }
                        cursor
                    },
                    SegmentSearch::BinarySearch => self.find_segment(q)
                };
                self.hermite_value(n, q)
            })
            .collect()
    }

    fn segment_count(&self) -> usize {
        self.widths.len()
    }

    fn h(&self, n: usize) -> f64 {
        self.widths[n - 1]
    }

    /// Smallest `n` in `1..=m-1` with `q <= x[n]`; `q` must be in the domain.
    fn find_segment(&self, q: f64) -> usize {
        self.x_data
            .partition_point(|&xi| xi < q)
            .clamp(1, self.segment_count())
    }

    fn secant(&self, n: usize) -> f64 {
        (self.y_data[n] - self.y_data[n - 1]) / self.h(n)
    }

    /// Endpoint slopes `(fp0, fp1)` of segment `n`.
    fn endpoint_slopes(&self, n: usize) -> (f64, f64) {
        let d1 = self.secant(n);
        let fp0 = if n == 1 {
            d1
        } else {
            let d0 = self.secant(n - 1);
            (self.h(n - 1) * d0 + self.h(n) * d1) / (self.h(n - 1) + self.h(n))
        };
        let fp1 = if n == self.segment_count() {
            d1
        } else {
            let d2 = self.secant(n + 1);
            (self.h(n) * d1 + self.h(n + 1) * d2) / (self.h(n) + self.h(n + 1))
        };
        (fp0, fp1)
    }

    fn local_parameter(&self, n: usize, q: f64) -> f64 {
        (q - self.x_data[n - 1]) / (self.x_data[n] - self.x_data[n - 1])
    }

    fn hermite_value(&self, n: usize, q: f64) -> f64 {
        let p0 = self.y_data[n - 1];
        let p1 = self.y_data[n];
        let (fp0, fp1) = self.endpoint_slopes(n);
        let v = self.local_parameter(n, q);

        (p0 * ((2.0 * v * v * v) - (3.0 * v * v) + 1.0))
            + (p1 * ((-2.0 * v * v * v) + (3.0 * v * v)))
            + (fp0 * ((v * v * v) - (2.0 * v * v) + v))
            + (fp1 * ((v * v * v) - (v * v)))
    }

    /// d/dq of the segment cubic: basis derivatives in v, divided by h(n).
    fn hermite_derivative(&self, n: usize, q: f64) -> f64 {
        let p0 = self.y_data[n - 1];
        let p1 = self.y_data[n];
        let (fp0, fp1) = self.endpoint_slopes(n);
        let v = self.local_parameter(n, q);

        let dv = (p0 * ((6.0 * v * v) - (6.0 * v)))
            + (p1 * ((-6.0 * v * v) + (6.0 * v)))
            + (fp0 * ((3.0 * v * v) - (4.0 * v) + 1.0))
            + (fp1 * ((3.0 * v * v) - (2.0 * v)));
        dv / self.h(n)
    }
}

// ─────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────

impl NonparametricCurve for PiecewiseCubicHermite {
    fn points(&self) -> Vec<Point2D> {
        self.x_data
            .iter()
            .zip(self.y_data.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect()
    }

    fn min_x(&self) -> f64 {
        self.x_data[0]
    }

    fn max_x(&self) -> f64 {
        self.x_data[self.x_data.len() - 1]
    }
}

impl Curve for PiecewiseCubicHermite {
    fn value(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        self.hermite_value(self.find_segment(x), x)
    }

    fn derivative(&self, x: f64) -> f64 {
        if !self.contains(x) {
            return f64::NAN;
        }
        self.hermite_derivative(self.find_segment(x), x)
    }
}

/// Batch PCHIP over `(x, y)` with the forward-cursor search; `queries` must be
/// non-decreasing.
pub fn pchip_interpolate(queries: &[f64], x: &[f64], y: &[f64]) -> NumericResult<Vec<f64>> {
    let pchip = PiecewiseCubicHermite::new(x.to_vec(), y.to_vec())?;
    Ok(pchip.interpolate(queries))
}
