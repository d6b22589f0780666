use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the program: configuration and the window.
///
/// The simulation itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}
