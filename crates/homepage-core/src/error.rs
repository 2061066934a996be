use thiserror::Error;

/// Why a content section could not be rendered.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("container `{0}` not found")]
    MissingContainer(&'static str),
    #[error("network response error: {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid JSON document")]
    Decode(#[from] serde_json::Error),
}

impl LoadError {
    /// Missing containers are a page-layout matter and stay invisible to readers.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, LoadError::MissingContainer(_))
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
