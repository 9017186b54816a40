use thiserror::Error;

/// Input validation failures raised before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("{points} control point(s) supplied, at least {required} required")]
    InvalidDegree {
        points: usize,
        required: usize
    },

    #[error("window size {window} is invalid for a sequence of length {len}")]
    InvalidWindow {
        window: usize,
        len: usize
    },

    #[error("insufficient samples: x has {x_len}, y has {y_len}, at least {required} matching samples required")]
    InsufficientSamples {
        x_len: usize,
        y_len: usize,
        required: usize
    },

    #[error("x is not strictly increasing at index {index}")]
    UnsortedInput {
        index: usize
    }
}

pub type NumericResult<T> = Result<T, NumericError>;
