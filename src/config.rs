use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{path::DEFAULT_MAX_WIDTH, recents};

const SETTINGS_DIR: &str = "code-recents";
const SETTINGS_FILE: &str = "settings.json";

/// User-editable settings, read from `<config dir>/code-recents/settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Executable name (or path) of the editor.
    pub editor: String,
    pub trigger: String,
    pub icon: String,
    /// Editor state file; the per-user default when unset.
    pub state_path: Option<PathBuf>,
    pub max_width: usize,
    pub new_window_entry: bool,
    /// Emphasize file names with `<b>` markup.
    pub markup: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: "code".to_string(),
            trigger: "vs".to_string(),
            icon: "visual-studio-code".to_string(),
            state_path: None,
            max_width: DEFAULT_MAX_WIDTH,
            new_window_entry: true,
            markup: true,
        }
    }
}

impl Settings {
    /// Settings file merged with `CODE_RECENTS_*` environment overrides.
    pub fn load() -> Result<Self> {
        let mut settings = match dirs::config_dir() {
            Some(dir) => Self::from_file(&dir.join(SETTINGS_DIR).join(SETTINGS_FILE))?,
            None => Self::default(),
        };

        if let Ok(editor) = env::var("CODE_RECENTS_EDITOR") {
            settings.editor = editor;
        }
        if let Ok(trigger) = env::var("CODE_RECENTS_TRIGGER") {
            settings.trigger = trigger;
        }
        if let Ok(state) = env::var("CODE_RECENTS_STATE") {
            settings.state_path = Some(PathBuf::from(state));
        }

        Ok(settings)
    }

    /// A missing file means defaults; a broken one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {} failed", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {} failed", path.display()))
    }
}

/// Everything a query needs, resolved once when the plugin starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Resolved editor executable; `None` when it is not installed.
    pub editor: Option<PathBuf>,
    pub icon: String,
    pub trigger: String,
    pub state_path: Option<PathBuf>,
    pub max_width: usize,
    pub new_window_entry: bool,
    pub markup: bool,
}

impl Config {
    pub fn resolve(settings: Settings) -> Self {
        let editor = match which::which(&settings.editor) {
            Ok(path) => {
                log::info!("found {} at {}", settings.editor, path.display());
                Some(path)
            }
            Err(e) => {
                log::warn!("could not find {}: {}", settings.editor, e);
                None
            }
        };

        Self {
            editor,
            icon: settings.icon,
            trigger: settings.trigger,
            state_path: settings.state_path.or_else(recents::default_state_path),
            max_width: settings.max_width,
            new_window_entry: settings.new_window_entry,
            markup: settings.markup,
        }
    }
}
