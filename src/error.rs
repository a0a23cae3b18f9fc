use std::path::{Path, PathBuf};

pub type EpsResult<T> = Result<T, EpsError>;

#[derive(thiserror::Error, Debug)]
pub enum EpsError {
    #[error("i/o error{}: {source}", display_path(.path.as_deref()))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!(" on '{}'", p.display()),
        None => String::new(),
    }
}

impl EpsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Attaches `path` to an i/o error that was raised without one.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(path.into()),
                source,
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for EpsError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

impl From<serde_json::Error> for EpsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
