#[derive(thiserror::Error, Debug)]
pub enum SlugifyError {
    #[error("Invalid remove pattern `{pattern}`: {source}")]
    InvalidRemovePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Char map key must be exactly one character, got `{key}`")]
    InvalidKey { key: String },
    #[error("Invalid char map extension `{entry}`, expected `char=replacement`")]
    InvalidExtension { entry: String },
}

pub(crate) fn invalid_key(key: &str) -> SlugifyError {
    SlugifyError::InvalidKey {
        key: key.escape_default().to_string(),
    }
}
