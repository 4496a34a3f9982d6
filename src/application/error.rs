use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No category selected")]
    NoCategorySelected,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
