use thiserror::Error;

/// Everything that can go wrong outside the search core. The search
/// functions themselves are total and never produce one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("a product with barcode '{0}' already exists")]
    DuplicateBarcode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
