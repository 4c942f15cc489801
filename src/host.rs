//! The launcher side of the plugin: what a query looks like, what the
//! plugin hands back, and the line-delimited JSON loop that carries both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
    process::{Command, Stdio},
    thread,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    /// Text typed after the trigger.
    pub string: String,
    /// Whether the user typed this plugin's trigger.
    pub triggered: bool,
}

impl Query {
    /// Builds a query from the raw launcher input, for hosts that do not
    /// handle triggers themselves.
    pub fn from_input(text: &str, trigger: &str) -> Self {
        match text.strip_prefix(trigger) {
            Some(rest) if !trigger.is_empty() => Query {
                string: rest.to_string(),
                triggered: true,
            },
            _ => Query {
                string: text.to_string(),
                triggered: false,
            },
        }
    }
}

/// Something the host runs when the user picks an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

impl Action {
    pub fn new(label: impl Into<String>, program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args,
        }
    }

    /// Starts the program without blocking the request loop. A background
    /// thread waits on the child so it does not linger as a zombie.
    pub fn spawn(&self) -> Result<()> {
        log::info!("running {} {:?}", self.program.display(), self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("running `{}` failed", self.program.display()))?;

        let program = self.program.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) => log::debug!("{} exited with {status}", program.display()),
            Err(e) => log::warn!("waiting on {} failed: {e}", program.display()),
        });
        Ok(())
    }
}

/// One row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub icon: String,
    pub text: String,
    pub subtext: String,
    pub actions: Vec<Action>,
}

pub trait Plugin {
    /// Answers one launcher query. `None` leaves the query to other plugins.
    fn handle_query(&self, query: &Query) -> Option<Vec<Item>>;

    fn trigger(&self) -> &str;
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    Query(Query),
    Input { text: String },
    Activate { action: Action },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Items { items: Vec<Item> },
    Activated,
    Error { message: String },
}

/// Answers requests from `reader` on `writer`, one JSON object per line,
/// until the host closes its end.
pub fn serve<P, R, W>(plugin: &P, reader: R, mut writer: W) -> Result<()>
where
    P: Plugin,
    R: BufRead,
    W: Write,
{
    for line in reader.lines() {
        let line = line.context("reading request failed")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => respond(plugin, request),
            Err(e) => {
                log::warn!("malformed request: {e}");
                Response::Error {
                    message: format!("malformed request: {e}"),
                }
            }
        };

        serde_json::to_writer(&mut writer, &response).context("encoding response failed")?;
        writer.write_all(b"\n").context("writing response failed")?;
        writer.flush().context("writing response failed")?;
    }

    log::info!("host closed the connection");
    Ok(())
}

fn respond<P: Plugin>(plugin: &P, request: Request) -> Response {
    match request {
        Request::Query(query) => query_response(plugin, &query),
        Request::Input { text } => query_response(plugin, &Query::from_input(&text, plugin.trigger())),
        Request::Activate { action } => match action.spawn() {
            Ok(()) => Response::Activated,
            Err(e) => {
                log::error!("{e:#}");
                Response::Error {
                    message: format!("{e:#}"),
                }
            }
        },
    }
}

fn query_response<P: Plugin>(plugin: &P, query: &Query) -> Response {
    log::debug!("query {:?} (triggered: {})", query.string, query.triggered);
    Response::Items {
        items: plugin.handle_query(query).unwrap_or_default(),
    }
}
