//! Drives a [`MenuEditor`] from console commands and renders the results.

use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Parser;
use menu_catalog::{IdSource, MenuEditor, SubmitOutcome};
use menu_model::{CatalogError, Direction, EntryId, ErrorReport};
use tracing::{debug, warn};

use crate::{
    commands::{parse_switch, split_line, ConsoleCommand, ConsoleLine, DraftField},
    render::{availability_line, listing_view, render_entries, render_form},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub json: bool,
}

pub struct Session<S> {
    editor: MenuEditor<S>,
    options: RenderOptions,
}

impl<S: IdSource> Session<S> {
    pub fn new(editor: MenuEditor<S>, options: RenderOptions) -> Self {
        Self { editor, options }
    }

    pub fn editor(&self) -> &MenuEditor<S> {
        &self.editor
    }

    /// Processes commands until input ends or `quit` is read.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> anyhow::Result<()> {
        self.write_listing(out)?;
        self.prompt(out, interactive)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                self.prompt(out, interactive)?;
                continue;
            }
            if self.handle_line(line, out)? == Flow::Quit {
                break;
            }
            self.prompt(out, interactive)?;
        }

        out.flush().context("failed to flush output")?;
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let tokens = match split_line(line) {
            Ok(tokens) => tokens,
            Err(reason) => {
                writeln!(out, "parse error: {reason}")?;
                return Ok(Flow::Continue);
            }
        };

        match ConsoleLine::try_parse_from(tokens) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(err) => {
                write!(out, "{}", err.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(
        &mut self,
        command: ConsoleCommand,
        out: &mut W,
    ) -> anyhow::Result<Flow> {
        debug!(?command, "console command");
        match command {
            ConsoleCommand::List => self.write_listing(out)?,
            ConsoleCommand::Draft => self.write_form(out)?,
            ConsoleCommand::Set { field, value } => {
                let value = value.join(" ");
                let draft = self.editor.draft_mut();
                match field {
                    DraftField::Name => draft.name = value,
                    DraftField::Price => draft.price = value,
                    DraftField::Category => draft.category = value,
                    DraftField::Available => match parse_switch(&value) {
                        Some(flag) => draft.available = flag,
                        None => {
                            writeln!(out, "available must be on or off, got '{value}'")?;
                            return Ok(Flow::Continue);
                        }
                    },
                }
                self.write_form(out)?;
            }
            ConsoleCommand::Submit => match self.editor.submit() {
                Ok(SubmitOutcome::Created(id)) => {
                    writeln!(out, "added {id}")?;
                    self.write_listing(out)?;
                }
                Ok(SubmitOutcome::Updated(id)) => {
                    writeln!(out, "saved {id}")?;
                    self.write_listing(out)?;
                }
                Err(err) => self.write_error(out, &err)?,
            },
            ConsoleCommand::Edit { id } => {
                let started = self.editor.begin_edit(&EntryId::new(id)).map(|_| ());
                match started {
                    Ok(()) => self.write_form(out)?,
                    Err(err) => self.write_error(out, &err)?,
                }
            }
            ConsoleCommand::Cancel => {
                self.editor.cancel_edit();
                writeln!(out, "edit cancelled")?;
            }
            ConsoleCommand::Toggle { id } => {
                let id = EntryId::new(id);
                match self.editor.toggle_availability(&id) {
                    Ok(available) => writeln!(out, "{}", availability_line(&id, available))?,
                    Err(err) => self.write_error(out, &err)?,
                }
            }
            ConsoleCommand::Up { index } => self.move_entry(index, Direction::Up, out)?,
            ConsoleCommand::Down { index } => self.move_entry(index, Direction::Down, out)?,
            ConsoleCommand::Delete { id } => match self.editor.delete(&EntryId::new(id)) {
                Ok(removed) => {
                    writeln!(out, "removed {} ({})", removed.id, removed.name)?;
                    self.write_listing(out)?;
                }
                Err(err) => self.write_error(out, &err)?,
            },
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn move_entry<W: Write>(
        &mut self,
        index: usize,
        direction: Direction,
        out: &mut W,
    ) -> anyhow::Result<()> {
        if self.editor.reorder(index, direction) {
            return self.write_listing(out);
        }
        let direction = match direction {
            Direction::Up => "up",
            Direction::Down => "down",
        };
        writeln!(out, "item at {index} cannot move {direction}")?;
        Ok(())
    }

    fn write_listing<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let symbol = &self.options.currency_symbol;
        if self.options.json {
            let view = listing_view(self.editor.mode(), self.editor.entries(), symbol);
            serde_json::to_writer_pretty(&mut *out, &view).context("failed to encode listing")?;
            writeln!(out)?;
        } else {
            write!(out, "{}", render_entries(self.editor.entries(), symbol))?;
        }
        Ok(())
    }

    fn write_form<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.options.json {
            serde_json::to_writer_pretty(&mut *out, self.editor.draft())
                .context("failed to encode draft")?;
            writeln!(out)?;
        } else {
            write!(
                out,
                "{}",
                render_form(
                    self.editor.mode(),
                    self.editor.draft(),
                    &self.options.currency_symbol
                )
            )?;
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, out: &mut W, err: &CatalogError) -> anyhow::Result<()> {
        if err.is_user_error() {
            debug!(error = %err, "draft rejected");
        } else {
            warn!(code = ?err.code(), error = %err, "operation referenced a stale entry");
        }

        if self.options.json {
            serde_json::to_writer(&mut *out, &ErrorReport::from(err))
                .context("failed to encode error")?;
            writeln!(out)?;
        } else if err.is_user_error() {
            writeln!(out, "cannot save: {err}")?;
        } else {
            writeln!(out, "error: {err}")?;
        }
        Ok(())
    }

    fn prompt<W: Write>(&self, out: &mut W, interactive: bool) -> anyhow::Result<()> {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
