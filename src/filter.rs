use crate::{
    config::Config,
    host::{Action, Item},
    path::{abbreviate, emphasize_last_segment},
    recents::{RecentEntry, Recents},
};
use std::path::Path;

pub const ITEM_ID: &str = "code-recents";
pub const NEW_WINDOW_LABEL: &str = "New Empty Window";
const OPEN_LABEL: &str = "Open in Visual Studio Code";
const NOT_INSTALLED: &str = "Visual Studio Code not installed";
const NOT_FOUND: &str = "Recent files and folders not found";

/// Turns the recents into launcher items matching `query`.
///
/// Order is fixed: the new-window entry, then folders, then files. An
/// editor without any history still gets an informational row.
pub fn filter(config: &Config, query: &str, recents: &Recents) -> Vec<Item> {
    let Some(editor) = config.editor.as_deref() else {
        return vec![info_item(config, NOT_INSTALLED)];
    };

    let needle = query.trim().to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&needle);

    let mut items = Vec::new();
    if config.new_window_entry && matches(NEW_WINDOW_LABEL) {
        items.push(new_window_item(config, editor));
    }

    if recents.is_empty() {
        items.push(info_item(config, NOT_FOUND));
        return items;
    }

    items.extend(
        recents
            .entries()
            .filter(|entry| matches(&entry.path))
            .map(|entry| recent_item(config, editor, &entry)),
    );
    items
}

fn recent_item(config: &Config, editor: &Path, entry: &RecentEntry) -> Item {
    let short = abbreviate(&entry.path, config.max_width);
    let text = if config.markup {
        emphasize_last_segment(&short)
    } else {
        short
    };

    Item {
        id: ITEM_ID.to_string(),
        icon: config.icon.clone(),
        text,
        subtext: format!("Open {}", entry.kind.label()),
        actions: vec![Action::new(OPEN_LABEL, editor, vec![entry.path.clone()])],
    }
}

fn new_window_item(config: &Config, editor: &Path) -> Item {
    Item {
        id: ITEM_ID.to_string(),
        icon: config.icon.clone(),
        text: NEW_WINDOW_LABEL.to_string(),
        subtext: "Open a new empty window".to_string(),
        actions: vec![Action::new(OPEN_LABEL, editor, vec!["-n".to_string()])],
    }
}

fn info_item(config: &Config, text: &str) -> Item {
    Item {
        id: ITEM_ID.to_string(),
        icon: config.icon.clone(),
        text: text.to_string(),
        subtext: String::new(),
        actions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            editor: Some(PathBuf::from("/opt/editor/bin/code")),
            icon: "test-icon".to_string(),
            trigger: "vs".to_string(),
            state_path: None,
            max_width: 45,
            new_window_entry: true,
            markup: false,
        }
    }

    fn recents() -> Recents {
        Recents {
            files: vec!["/home/user/projectA/readme.md".to_string()],
            folders: vec!["/home/user/projectB".to_string()],
        }
    }

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn substring_match_skips_new_window_entry() {
        let items = filter(&config(), "proj", &recents());
        assert_eq!(
            texts(&items),
            vec!["/home/user/projectB", "/home/user/projectA/readme.md"]
        );
        assert_eq!(items[0].subtext, "Open folder");
        assert_eq!(items[1].subtext, "Open file");
    }

    #[test]
    fn empty_query_lists_everything_in_fixed_order() {
        let items = filter(&config(), "", &recents());
        assert_eq!(
            texts(&items),
            vec![
                NEW_WINDOW_LABEL,
                "/home/user/projectB",
                "/home/user/projectA/readme.md"
            ]
        );
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let items = filter(&config(), "  README ", &recents());
        assert_eq!(texts(&items), vec!["/home/user/projectA/readme.md"]);

        let items = filter(&config(), "empty", &recents());
        assert_eq!(texts(&items), vec![NEW_WINDOW_LABEL]);
    }

    #[test]
    fn no_history_still_shows_something() {
        let items = filter(&config(), "", &Recents::default());
        assert_eq!(texts(&items), vec![NEW_WINDOW_LABEL, NOT_FOUND]);
        assert!(items[1].actions.is_empty());

        let without_new_window = Config {
            new_window_entry: false,
            ..config()
        };
        let items = filter(&without_new_window, "", &Recents::default());
        assert_eq!(texts(&items), vec![NOT_FOUND]);
    }

    #[test]
    fn no_match_gives_no_items() {
        assert!(filter(&config(), "zzz", &recents()).is_empty());
    }

    #[test]
    fn missing_editor_short_circuits() {
        let config = Config {
            editor: None,
            ..config()
        };
        let items = filter(&config, "proj", &recents());
        assert_eq!(texts(&items), vec![NOT_INSTALLED]);
        assert!(items[0].actions.is_empty());
    }

    #[test]
    fn actions_launch_the_editor() {
        let items = filter(&config(), "", &recents());
        let editor = PathBuf::from("/opt/editor/bin/code");

        assert_eq!(items[0].actions[0].program, editor);
        assert_eq!(items[0].actions[0].args, vec!["-n"]);
        assert_eq!(items[1].actions[0].args, vec!["/home/user/projectB"]);
        assert_eq!(items[2].actions[0].label, OPEN_LABEL);
        assert_eq!(items[2].actions[0].args, vec!["/home/user/projectA/readme.md"]);
        assert!(items.iter().all(|item| item.icon == "test-icon"));
    }

    #[test]
    fn long_paths_are_abbreviated_and_emphasized() {
        let config = Config {
            markup: true,
            ..config()
        };
        let long = "/home/user/projects/deeply/nested/example/file.txt";
        let recents = Recents {
            files: vec![long.to_string()],
            folders: Vec::new(),
        };

        let items = filter(&config, "nested", &recents);
        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].text,
            ".../projects/deeply/nested/example/<b>file.txt</b>"
        );
        assert_eq!(items[0].actions[0].args, vec![long]);
    }

    #[test]
    fn matches_against_the_full_path() {
        let long = "/home/user/projects/deeply/nested/example/file.txt";
        let recents = Recents {
            files: vec![long.to_string()],
            folders: Vec::new(),
        };
        // "user" is dropped from the display text but still matches.
        assert_eq!(filter(&config(), "user", &recents).len(), 1);
    }
}
