use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("{0}")]
    UniqueViolation(String),
    #[error("Malformed record: {0}")]
    InvalidRecord(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
