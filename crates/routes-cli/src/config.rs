use std::fs;
use std::path::Path;
use std::path::PathBuf;

use routes_core::config::Config;
use tracing::debug;

const CONFIG_DIR: &str = "routes-menu";
const CONFIG_FILE: &str = "config.toml";

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// An explicit path must exist. The default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };
    let raw = fs::read_to_string(&path)
        .map_err(|err| format!("read config {}: {err}", path.display()))?;
    let config: Config =
        toml::from_str(&raw).map_err(|err| format!("parse config {}: {err}", path.display()))?;
    debug!(path = %path.display(), debounce_ms = config.filter.debounce_ms, "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_debounce_from_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[filter]\ndebounce_ms = 120").expect("write config");
        let config = load_config(Some(file.path())).expect("config should load");
        assert_eq!(config.filter.debounce_ms, 120);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let config = load_config(Some(file.path())).expect("config should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_config(Some(&dir.path().join("nope.toml"))).expect_err("missing config");
        assert!(err.to_string().contains("nope.toml"));
    }
}
