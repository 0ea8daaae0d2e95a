use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassError {
    #[error("Config error: {msg}")]
    Config { msg: String, path: PathBuf },

    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PassError {
    pub fn config(msg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config { msg: msg.into(), path: path.into() }
    }

    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            PassError::Config { path, .. } | PassError::Io { path, .. } => path,
        }
    }
}
