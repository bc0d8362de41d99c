//! The interactive session: an owned store, a syncer, and a render loop.
//!
//! # Design
//! The store is constructed here and lent to collaborators per call; nothing
//! holds a second reference to it. Rendering is pull based: the loop
//! remembers the store revision it last printed and prints again only when
//! the revision has moved. Sync failures are reported to the user with the
//! full typed error and leave the list exactly as it was.

use std::io::{BufRead, Write};

use onelist_core::{ItemPatch, ItemStore, SyncError, Syncer, Transport};
use tracing::warn;

use crate::command::Command;
use crate::view;

const HELP: &str = "\
commands:
  add <title>        create a new item
  toggle <id>        flip an item's completed flag
  edit <id> <title>  replace an item's title
  list               print the list
  refresh            re-fetch the list from the server
  help               show this help
  quit               leave";

/// What a dispatched command wants the loop to do besides re-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Silent,
    Message(String),
    Quit,
}

pub struct App<T> {
    store: ItemStore,
    syncer: Syncer<T>,
    rendered_at: Option<u64>,
}

impl<T: Transport> App<T> {
    pub fn new(syncer: Syncer<T>) -> Self {
        Self {
            store: ItemStore::new(),
            syncer,
            rendered_at: None,
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// The on-startup fetch. On failure the store stays empty and the error
    /// is returned for the caller to report.
    pub fn load(&mut self) -> Result<usize, SyncError> {
        self.syncer.refresh(&mut self.store)
    }

    /// Dispatch one parsed command against the store and the server.
    ///
    /// Commands naming an id that is not in the store answer with a message
    /// and never issue a request.
    pub fn apply(&mut self, command: Command) -> Result<Feedback, SyncError> {
        match command {
            Command::Add { title } => {
                let item = self.syncer.create(&mut self.store, title.trim())?;
                Ok(Feedback::Message(format!("added {}", item.id)))
            }
            Command::Toggle { id } => {
                let Some(current) = self.store.get(id).map(|item| item.completed) else {
                    return Ok(Feedback::Message(format!("no item {id}")));
                };
                self.syncer
                    .update(&mut self.store, id, &ItemPatch::completed(!current))?;
                Ok(Feedback::Silent)
            }
            Command::Edit { id, title } => {
                if self.store.get(id).is_none() {
                    return Ok(Feedback::Message(format!("no item {id}")));
                }
                self.syncer
                    .update(&mut self.store, id, &ItemPatch::title(title.trim()))?;
                Ok(Feedback::Silent)
            }
            Command::List => {
                self.rendered_at = None;
                Ok(Feedback::Silent)
            }
            Command::Refresh => {
                let count = self.load()?;
                Ok(Feedback::Message(format!("{count} items fetched")))
            }
            Command::Help => Ok(Feedback::Message(HELP.to_string())),
            Command::Quit => Ok(Feedback::Quit),
        }
    }

    fn render_if_changed(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        let revision = self.store.revision();
        if self.rendered_at == Some(revision) {
            return Ok(());
        }
        let page = view::page(&self.store);
        if !page.is_empty() {
            out.write_all(page.as_bytes())?;
        }
        self.rendered_at = Some(revision);
        Ok(())
    }

    /// The event loop: initial load, then read, parse, apply, re-render
    /// until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> std::io::Result<()> {
        if let Err(err) = self.load() {
            writeln!(out, "sync failed: {err}")?;
        }
        self.render_if_changed(&mut out)?;

        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match Command::parse(&line) {
                    Ok(command) => match self.apply(command) {
                        Ok(Feedback::Quit) => return Ok(()),
                        Ok(Feedback::Message(message)) => writeln!(out, "{message}")?,
                        Ok(Feedback::Silent) => {}
                        Err(err) => {
                            warn!(%err, "sync failed");
                            writeln!(out, "sync failed: {err}")?;
                        }
                    },
                    Err(err) => writeln!(out, "{err}")?,
                }
                self.render_if_changed(&mut out)?;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}
