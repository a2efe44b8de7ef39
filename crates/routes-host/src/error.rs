use std::path::PathBuf;

use routes_core::model::EnvironmentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown environment {0}")]
    UnknownEnvironment(EnvironmentId),
}
