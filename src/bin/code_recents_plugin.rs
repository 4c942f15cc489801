// src/bin/code_recents_plugin.rs
use anyhow::{Context, Result};
use code_recents::{
    config::{Config, Settings},
    host, logger, CodeRecents,
};
use std::io;

fn main() -> Result<()> {
    logger::init()?;
    log::info!("code-recents plugin starting...");

    let settings = Settings::load().context("failed to load settings")?;
    let config = Config::resolve(settings);
    match &config.state_path {
        Some(path) => log::info!("reading recents from {}", path.display()),
        None => log::warn!("no config directory, recents will be empty"),
    }

    let plugin = CodeRecents::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    host::serve(&plugin, stdin.lock(), stdout.lock())
}
