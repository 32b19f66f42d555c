use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while turning a file into a [`Dictionary`](crate::Dictionary).
///
/// Bad filter parameters are not errors; they yield an empty result instead.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    /// The file could not be resolved, opened or read.
    #[error("could not read dictionary '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contains bytes the configured encoding cannot map.
    #[error("dictionary '{}' is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    /// The encoding label is not one `encoding_rs` knows about.
    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, DictionaryLoadError>;
