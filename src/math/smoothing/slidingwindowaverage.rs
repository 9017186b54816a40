use log::debug;

use crate::error::numericerror::{
    NumericError,
    NumericResult
};

/// Simple moving average with a fixed window.
///
/// The first mean is computed directly; every later mean is obtained from the
/// previous one by adding `(incoming - outgoing) / window`, so rounding error
/// accumulates along the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowAverage {
    window: usize
}

impl SlidingWindowAverage {
    pub fn new(window: usize) -> NumericResult<SlidingWindowAverage> {
        if window == 0 {
            return Err(NumericError::InvalidWindow { window, len: 0 });
        }
        Ok(SlidingWindowAverage { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Output length is `values.len() - window + 1`.
    pub fn apply(&self, values: &[f64]) -> NumericResult<Vec<f64>> {
        let window = self.window;
        if window > values.len() {
            return Err(NumericError::InvalidWindow { window, len: values.len() });
        }
        debug!("sliding window average: window {}, {} values", window, values.len());

        let w = window as f64;
        let mut val = values[..window].iter().sum::<f64>() / w;
        let mut averages = Vec::with_capacity(values.len() - window + 1);
        averages.push(val);
        for (outgoing, incoming) in values.iter().zip(values[window..].iter()) {
            val += (incoming - outgoing) / w;
            averages.push(val);
        }
        Ok(averages)
    }
}

pub fn sliding_window_average(values: &[f64], window: usize) -> NumericResult<Vec<f64>> {
    let averager = SlidingWindowAverage::new(window).map_err(|_| NumericError::InvalidWindow {
        window,
        len: values.len()
    })?;
    averager.apply(values)
}
