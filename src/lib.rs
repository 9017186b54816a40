pub mod configuration;

pub mod error {
    pub mod numericerror;
    pub mod configurationerror;
}

pub mod math {
    pub mod point2d;

    pub mod curve {
        pub mod curve;
        pub mod parametriccurve {
            pub mod beziercurve;
            pub mod bezierderivative;
        }
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod piecewisecubichermite;
        }
    }

    pub mod smoothing {
        pub mod slidingwindowaverage;
    }
}

pub use configuration::Configuration;
pub use error::configurationerror::ConfigurationError;
pub use error::numericerror::{
    NumericError,
    NumericResult
};
pub use math::curve::curve::{
    Curve,
    ParametricCurve
};
pub use math::curve::nonparametriccurve::nonparametriccurve::NonparametricCurve;
pub use math::curve::nonparametriccurve::piecewisecubichermite::{
    pchip_interpolate,
    PiecewiseCubicHermite,
    SegmentSearch
};
pub use math::curve::parametriccurve::beziercurve::{
    bezier_evaluator,
    BezierCurve
};
pub use math::curve::parametriccurve::bezierderivative::{
    bezier_derivative,
    BezierDerivative,
    DerivativeScale
};
pub use math::point2d::Point2D;
pub use math::smoothing::slidingwindowaverage::{
    sliding_window_average,
    SlidingWindowAverage
};
