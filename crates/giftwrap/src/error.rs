//! Error type for hull construction.
//!
//! Only input validation and the wrapping step bound can fail; everything else
//! is total for finite coordinates. Errors of point sources (files, columns,
//! cells) belong to the caller and never appear here.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum HullError {
    /// No points to choose a start vertex from.
    EmptyInput,
    /// A coordinate is NaN or infinite.
    InvalidPoint { index: usize, x: f64, y: f64 },
    /// The wrap did not return to the start vertex within `steps` iterations.
    WrapDidNotClose { steps: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptyInput => write!(f, "point set is empty (no start vertex)"),
            HullError::InvalidPoint { index, x, y } => {
                write!(f, "point {index} has a non-finite coordinate ({x}, {y})")
            }
            HullError::WrapDidNotClose { steps } => {
                write!(f, "gift wrapping did not close after {steps} steps")
            }
        }
    }
}

impl std::error::Error for HullError {}
