use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use routes_core::model::Environment;

use crate::error::HostError;

/// Reads one environment from a JSON file.
pub fn load_environment(path: impl AsRef<Path>) -> Result<Environment, HostError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HostError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let environment: Environment =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| HostError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        environment_id = %environment.id,
        routes = environment.routes.len(),
        "environment loaded"
    );
    Ok(environment)
}
