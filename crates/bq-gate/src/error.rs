use bq_core::BoardingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest parse error: {0}")]
    Parse(String),

    #[error("manifest row {row} rejected: {source}")]
    Rejected {
        /// 1-based data row (the header is not counted).
        row:    usize,
        #[source]
        source: BoardingError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
