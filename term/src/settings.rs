use anyhow::{Context, Result};
use mines_core::{CellCount, Coord, GameConfig, ViewCapabilities};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Frontend settings, read from a TOML file; every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub flagging: bool,
    pub confirm_restart: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let GameConfig { rows, cols, mines } = GameConfig::default();
        Self {
            rows,
            cols,
            mines,
            seed: None,
            flagging: true,
            confirm_restart: true,
        }
    }
}

impl Settings {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        let settings = toml::from_str(&text)
            .with_context(|| format!("could not parse settings in {}", path.display()))?;
        log::debug!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub(crate) fn game_config(&self) -> mines_core::Result<GameConfig> {
        GameConfig::new(self.rows, self.cols, self.mines)
    }

    pub(crate) fn capabilities(&self) -> ViewCapabilities {
        let mut capabilities = ViewCapabilities::empty();
        capabilities.set(ViewCapabilities::FLAGGING, self.flagging);
        capabilities.set(ViewCapabilities::CONFIRM_RESTART, self.confirm_restart);
        capabilities
    }

    pub(crate) fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("could not serialize settings")
    }
}
