use std::fmt;

use thiserror::Error;

/// Region whose saturation mean is being computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreRegion {
    /// Pixels marked by the upstream nucleus detector.
    Reference,
    /// Pixels carrying the given cluster label.
    Label(u8),
}

impl fmt::Display for ScoreRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreRegion::Reference => write!(f, "reference nucleus mask"),
            ScoreRegion::Label(label) => write!(f, "label {label}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum NucleusError {
    #[error("Dimension mismatch for {what}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        what: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid label value {value} at ({row}, {col}); expected one of 1, 2, 3")]
    InvalidLabelValue { value: u8, row: usize, col: usize },

    #[error("Undefined score for {region}: no pixels with nonzero saturation")]
    UndefinedScore { region: ScoreRegion },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NucleusError {
    /// True for errors caused by degenerate or inconsistent input grids.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            NucleusError::DimensionMismatch { .. }
                | NucleusError::InvalidLabelValue { .. }
                | NucleusError::UndefinedScore { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NucleusError>;
