use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bug status: {0}")]
    InvalidStatus(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
