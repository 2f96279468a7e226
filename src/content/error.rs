//! Content ingestion errors

use thiserror::Error;

/// Reasons a post is rejected at load time
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No front-matter block found")]
    MissingFrontMatter,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
