// src/lib.rs
pub mod config;
pub mod filter;
pub mod host;
pub mod logger;
pub mod path;
pub mod recents;

use config::Config;
use host::{Item, Plugin, Query};

/// Lists the editor's recently opened files and folders behind a trigger.
pub struct CodeRecents {
    config: Config,
}

impl CodeRecents {
    pub fn new(config: Config) -> Self {
        CodeRecents { config }
    }
}

impl Plugin for CodeRecents {
    fn handle_query(&self, query: &Query) -> Option<Vec<Item>> {
        if !query.triggered {
            return None;
        }

        let string = query.string.as_str();
        if self.config.editor.is_none() {
            return Some(filter::filter(&self.config, string, &recents::Recents::default()));
        }

        // "vsfoo" is some other word, not a search for "foo".
        if !string.trim().is_empty() && !string.starts_with(' ') {
            return None;
        }

        let recents = recents::load_or_empty(self.config.state_path.as_deref());
        Some(filter::filter(&self.config, string, &recents))
    }

    fn trigger(&self) -> &str {
        &self.config.trigger
    }
}
