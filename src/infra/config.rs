use crate::domain::User;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed configuration document.
///
/// Kept as a raw JSON value on purpose: podmen never validates the document
/// against a schema, and a top-level array or scalar is not a parse error,
/// just a document without a usable `users` map.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Config {
    document: Value,
}

impl Config {
    /// Projects the `users` map into an ordered list of user records.
    ///
    /// Anything under `users` that is not a JSON object (absent, null, a
    /// scalar, and notably an array) yields an empty list. Each record takes
    /// its `name` from the map key; the key wins over any `name` field
    /// carried inside the value.
    pub fn users(&self) -> Vec<User> {
        let users = match self.document.get("users").and_then(Value::as_object) {
            Some(map) => map,
            None => return Vec::new(),
        };

        users
            .iter()
            .map(|(name, data)| {
                let mut extra = data.as_object().cloned().unwrap_or_default();
                // shift_remove: tirar o campo "name" não pode reordenar o resto
                extra.shift_remove("name");
                User::new(name.clone(), extra)
            })
            .collect()
    }
}

pub fn default_config_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/root"))
        .join(".config/podmen.conf")
}

/// Resolves the configuration path: the `-c/--config` value (with `~`
/// expanded) when given, the default path otherwise.
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(path) => {
            PathBuf::from(shellexpand::tilde(path.to_string_lossy().as_ref()).into_owned())
        }
        None => default_config_path(),
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        bail!("Arquivo de configuração não encontrado: {}", path.display());
    }

    let content = fs::read_to_string(path).with_context(|| format!("lendo {:?}", path))?;
    let config: Config =
        serde_json::from_str(&content).with_context(|| format!("parse de {:?}", path))?;

    Ok(config)
}
