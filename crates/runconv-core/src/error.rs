use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no action elements found in input document")]
    NoActions,

    #[error("action #{index} has no displayName")]
    MissingDisplayName { index: usize },

    #[error("action has no goals: {display_name}")]
    NoGoals { display_name: String },

    #[error("output directory is already a file: {0}")]
    OutputDirIsFile(PathBuf),

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error(transparent)]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
