use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed header: {0}")]
    MalformedHeader(&'static str),

    #[error("Header does not declare an 'element vertex' count")]
    MissingVertexCount,

    #[error("Invalid vertex count declaration: '{0}'")]
    InvalidVertexCount(String),

    #[error("Truncated buffer: need {required} bytes for the declared vertices, got {available}")]
    TruncatedBuffer { required: usize, available: usize },

    #[error("No points survived decoding")]
    EmptyPointCloud,

    #[error("Invalid decode config: {0}")]
    InvalidConfig(&'static str),
}
