use thiserror::Error;

/// Failures while turning an uploaded file or a transform response into
/// table entries.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON list of table definitions")]
    NotAList,

    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("unreadable workbook: {0}")]
    Workbook(String),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("transform response has no usable content")]
    UnexpectedContent,
}
