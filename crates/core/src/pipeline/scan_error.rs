use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to open video {path}: {reason}")]
    OpenVideo { path: PathBuf, reason: String },
    #[error("failed to list videos in {path}: {source}")]
    ListVideos {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create result log {path}: {source}")]
    CreateLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write result log: {0}")]
    WriteLog(#[source] std::io::Error),
}
