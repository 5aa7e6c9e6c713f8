use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("recipe '{id}' is invalid: {source}")]
    Validate {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("recipe id '{0}' is used more than once")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, Error>;
