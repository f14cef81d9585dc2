use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch failed")]
    FetchFailed,

    #[error("Create failed")]
    CreateFailed,

    #[error("Update failed")]
    UpdateFailed,

    #[error("Delete failed")]
    DeleteFailed,

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
