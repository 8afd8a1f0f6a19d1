use thiserror::Error;

/// Construction-time problems with a view table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewTableError {
    #[error("view table must contain at least one viewpoint")]
    Empty,
    #[error("viewpoint {index} ({label}) has a non-finite {field}")]
    NonFinite {
        index: usize,
        label: String,
        field: &'static str,
    },
    #[error("viewpoint {label} has a bad accent: {source}")]
    BadAccent {
        label: String,
        source: ColorParseError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected #RGB or #RRGGBB, got {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in {0:?}")]
    BadDigit(String),
}
