use anyhow::{Context, Result};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Identifiers the editor has used for the "Open Recent" submenu in its
/// persisted menubar. Newer builds use the named one.
const RECENT_MENU_IDS: &[&str] = &["submenuitem.MenubarRecentMenu", "submenuitem.35"];

const OPEN_RECENT_FILE: &str = "openRecentFile";
const OPEN_RECENT_FOLDER: &str = "openRecentFolder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecentKind {
    File,
    Folder,
}

impl RecentKind {
    pub fn label(self) -> &'static str {
        match self {
            RecentKind::File => "file",
            RecentKind::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    pub path: String,
    pub kind: RecentKind,
}

/// Recently opened paths, most recent first, as the editor stored them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recents {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

impl Recents {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.folders.is_empty()
    }

    /// Folders first, then files, each in stored order.
    pub fn entries(&self) -> impl Iterator<Item = RecentEntry> + '_ {
        let folders = self.folders.iter().map(|path| RecentEntry {
            path: path.clone(),
            kind: RecentKind::Folder,
        });
        let files = self.files.iter().map(|path| RecentEntry {
            path: path.clone(),
            kind: RecentKind::File,
        });
        folders.chain(files)
    }
}

/// Location of the editor's global state file for the current user.
pub fn default_state_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join("Code")
            .join("User")
            .join("globalStorage")
            .join("storage.json")
    })
}

/// Pulls the recent files and folders out of the editor's persisted menubar.
///
/// Missing keys along `lastKnownMenubarData.menus.File.items` or in the
/// recent submenu are errors. A menubar without a recent submenu simply has
/// no recents.
pub fn extract(document: &Value) -> Result<Recents> {
    let items = document
        .pointer("/lastKnownMenubarData/menus/File/items")
        .and_then(Value::as_array)
        .context("no File menu in lastKnownMenubarData")?;

    let Some(menu) = items.iter().find(|item| {
        item.get("id")
            .and_then(Value::as_str)
            .is_some_and(|id| RECENT_MENU_IDS.contains(&id))
    }) else {
        return Ok(Recents::default());
    };

    let recent_items = menu
        .pointer("/submenu/items")
        .and_then(Value::as_array)
        .context("recent menu has no submenu items")?;

    let mut recents = Recents::default();
    for item in recent_items {
        let Some(path) = item.pointer("/uri/path").and_then(Value::as_str) else {
            continue;
        };
        match item.get("id").and_then(Value::as_str) {
            Some(OPEN_RECENT_FILE) => recents.files.push(path.to_string()),
            Some(OPEN_RECENT_FOLDER) => recents.folders.push(path.to_string()),
            _ => {}
        }
    }

    Ok(recents)
}

pub fn load(path: &Path) -> Result<Recents> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {} failed", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {} failed", path.display()))?;
    extract(&document).with_context(|| format!("no recents in {}", path.display()))
}

/// Reads the recents, treating any failure as an editor without history.
pub fn load_or_empty(path: Option<&Path>) -> Recents {
    let Some(path) = path else {
        log::debug!("no state file location, showing no recents");
        return Recents::default();
    };

    match load(path) {
        Ok(recents) => {
            log::debug!(
                "loaded {} files and {} folders from {}",
                recents.files.len(),
                recents.folders.len(),
                path.display()
            );
            recents
        }
        Err(e) => {
            log::debug!("recents unavailable: {e:#}");
            Recents::default()
        }
    }
}
