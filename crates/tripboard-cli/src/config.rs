use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tripboard_types::{FilterKind, SortKind};

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path
/// 2. TRIPBOARD_CONFIG environment variable
/// 3. ./tripboard.toml
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(env_path) = std::env::var_os("TRIPBOARD_CONFIG") {
        return PathBuf::from(env_path);
    }
    PathBuf::from("tripboard.toml")
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoardConfig {
    /// Sort tag applied on startup; unknown tags fall back to the default
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Filter tag applied on startup; unknown tags fall back to the default
    #[serde(default)]
    pub default_filter: Option<String>,

    /// Point collection to load when `--points` is not given
    #[serde(default)]
    pub points_file: Option<PathBuf>,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(explicit);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn default_sort(&self) -> SortKind {
        self.board
            .default_sort
            .as_deref()
            .map(SortKind::from_tag)
            .unwrap_or_default()
    }

    pub fn default_filter(&self) -> FilterKind {
        self.board
            .default_filter
            .as_deref()
            .map(FilterKind::from_tag)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config.default_sort(), SortKind::Day);
        assert_eq!(config.default_filter(), FilterKind::Everything);
        assert!(config.board.points_file.is_none());
    }

    #[test]
    fn reads_board_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[board]\ndefault_sort = \"price\"\ndefault_filter = \"future\"\npoints_file = \"trips.json\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.default_sort(), SortKind::Price);
        assert_eq!(config.default_filter(), FilterKind::Future);
        assert_eq!(
            config.board.points_file.as_deref(),
            Some(Path::new("trips.json"))
        );
    }

    #[test]
    fn unknown_tags_fall_back_instead_of_failing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board]\ndefault_sort = \"distance\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.default_sort(), SortKind::Day);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[board\ndefault_sort = ").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
