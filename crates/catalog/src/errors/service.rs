use crate::{csv::CsvParseError, errors::repository::RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Csv error: {0}")]
    Csv(#[from] CsvParseError),

    #[error("Custom error: {0}")]
    Custom(String),
}
