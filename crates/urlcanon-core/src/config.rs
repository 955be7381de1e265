use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::denylist::Denylist;

/// Global configuration loaded from `~/.config/urlcanon/config.toml`.
///
/// The denylist is policy: short keys such as `t` or `hash` are functional on
/// some sites, so deployments can drop or add names here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlcanonConfig {
    /// Parameter names appended to the denylist.
    pub extra_params: Vec<String>,
    /// Names that must never be stripped, even if built in.
    pub keep_params: Vec<String>,
    /// Replaces the built-in denylist entirely when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_params: Option<Vec<String>>,
}

impl UrlcanonConfig {
    /// Effective denylist: base (built-in or `replace_params`), plus
    /// `extra_params`, minus `keep_params`.
    pub fn denylist(&self) -> Denylist {
        let base = match &self.replace_params {
            Some(names) => Denylist::new(names.iter().cloned()),
            None => Denylist::builtin(),
        };
        base.with_extra(self.extra_params.iter().cloned())
            .without(&self.keep_params)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlcanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlcanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlcanonConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: UrlcanonConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(cfg)
}
