use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load proposal data from {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("invalid value for `{field}`: {reason}")]
    Shape { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn load(path: &std::path::Path, reason: impl ToString) -> Self {
        ConfigError::Load {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn shape(field: &str, reason: impl ToString) -> Self {
        ConfigError::Shape {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
