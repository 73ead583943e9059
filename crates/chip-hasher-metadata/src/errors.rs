use thiserror::Error;

pub type MetadataResult<T> = Result<T, MetadataError>;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialized JSON is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
