use thiserror::Error;

/// Errors produced while loading the bundled site content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate FAQ item id: {0}")]
    DuplicateFaqId(String),
}
