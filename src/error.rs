use thiserror::Error;

/// Errors reported by dataset construction, CSV interchange, and model use.
///
/// Degenerate numeric inputs (a zero-variance predictor or response) are not
/// errors; `fit` and `r2_score` document sentinel values for those cases.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("dataset must contain at least one row")]
    EmptyDataset,

    #[error("columns must have the same length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: {source}")]
    ParseValue {
        row: usize,
        column: &'static str,
        source: std::num::ParseFloatError,
    },

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
