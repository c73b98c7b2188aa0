//! Errors raised around the page: route registration, config loading and
//! writing the static output. Rendering itself cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while assembling or writing the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Two renderers registered for one path
    #[error("route {0} is already registered")]
    DuplicateRoute(String),

    /// Path that cannot be mapped to an output file
    #[error("invalid route path {path:?}: {reason}")]
    InvalidRoute {
        /// Offending path
        path: String,
        /// What is wrong with it
        reason: &'static str,
    },

    /// Config file exists but could not be read
    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        /// Config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::SiteConfig`]
    #[error("failed to parse config {}", .path.display())]
    ConfigParse {
        /// Config file
        path: PathBuf,
        /// Parser error with location
        #[source]
        source: toml::de::Error,
    },

    /// Output directory or page file could not be written
    #[error("failed to write {}", .path.display())]
    Write {
        /// File or directory being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, SiteError>;
