use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/regget/config.toml`.
///
/// Both directories are resolved relative to the working directory when
/// given as relative paths, matching how the consuming application lays
/// out its `storage/` tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegGetConfig {
    /// Directory holding the live regulations files.
    pub regulations_dir: PathBuf,
    /// Directory holding one prior backup per file name.
    pub backup_dir: PathBuf,
}

impl Default for RegGetConfig {
    fn default() -> Self {
        Self {
            regulations_dir: PathBuf::from("storage/regulations"),
            backup_dir: PathBuf::from("storage/regulations_backup"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("regget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RegGetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RegGetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RegGetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
