//! Error types for rotbar
//!
//! Everything that can go wrong at the xrandr boundary ends up here;
//! the widget itself degrades instead of propagating.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to run {command}")]
    CommandFailed {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    CommandStatus {
        command: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("{command} produced non-UTF-8 output")]
    NonUtf8Output {
        command: &'static str,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid rotation keyword {0:?}")]
    InvalidRotation(String),

    #[error("failed to read config file {path:?}")]
    ConfigRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize block")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to parse config file {path:?}")]
    ConfigParse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
