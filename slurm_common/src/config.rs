//! The CLI's persistent configuration.

use serde_json::{Map, Value};
use std::{fs, io};

use crate::prelude::*;

// TODO: store a separate config for each base URL.

/// A flat key-value store backed by a single JSON file, used to hold state
/// that survives between CLI invocations (most importantly the `auth` object
/// written by `slurm login`).
///
/// Every mutation rewrites the whole file synchronously. The store is not
/// safe for concurrent writers, which is fine for a short-lived single-user
/// CLI.
#[derive(Debug)]
pub struct Config {
    /// Our key-value pairs.
    data: Map<String, Value>,

    /// The file backing this configuration.
    path: PathBuf,
}

impl Config {
    /// Create an empty configuration which will be persisted to `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Config {
        Config {
            data: Map::new(),
            path: path.into(),
        }
    }

    /// Load a configuration from `path`.
    ///
    /// Fails if the file does not exist or does not contain a JSON object.
    /// Callers that want to treat a missing file as an empty configuration
    /// should use [`Config::load_or_default`] instead.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Config> {
        let path = path.into();
        let text = fs::read_to_string(&path)
            .with_context(|| format!("can't read config file {}", path.display()))?;
        let data = serde_json::from_str(&text)
            .with_context(|| format!("can't parse config file {}", path.display()))?;
        Ok(Config { data, path })
    }

    /// Load a configuration from `path`, starting with an empty one if the
    /// file does not exist yet. Malformed files are still an error.
    pub fn load_or_default<P: Into<PathBuf>>(path: P) -> Result<Config> {
        let path = path.into();
        match Config::load(&path) {
            Err(ref err) if is_not_found(err) => Ok(Config::new(path)),
            result => result,
        }
    }

    /// Return the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Store `value` under `key`, then persist the whole map to disk.
    pub fn put<V: Serialize>(&mut self, key: &str, value: V) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("can't serialize config value for {:?}", key))?;
        self.data.insert(key.to_owned(), value);
        self.save()
    }

    /// The file backing this configuration.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite our backing file with the current key-value pairs.
    fn save(&self) -> Result<()> {
        let text = serde_json::to_string(&self.data)
            .context("can't serialize configuration")?;
        fs::write(&self.path, text)
            .with_context(|| format!("can't write config file {}", self.path.display()))?;
        Ok(())
    }
}

/// Is `err` caused by a file which doesn't exist?
fn is_not_found(err: &Error) -> bool {
    err.downcast_ref::<io::Error>()
        .map(|io_err| io_err.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn put_then_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new(&path);
        config.put("k", "v").unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.get("k"), Some(&json!("v")));
    }

    #[test]
    fn put_persists_structured_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new(&path);
        config
            .put("auth", json!({ "access_token": "t0ken" }))
            .unwrap();
        config.put("auth", json!({ "access_token": "newer" })).unwrap();

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(
            reloaded.get("auth"),
            Some(&json!({ "access_token": "newer" }))
        );
    }

    #[test]
    fn get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("config.json"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn load_missing_file_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.json")).unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn load_or_default_starts_empty_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.json")).unwrap();
        assert_eq!(config.get("auth"), None);
    }

    #[test]
    fn load_or_default_still_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        assert!(Config::load_or_default(&path).is_err());
    }
}
