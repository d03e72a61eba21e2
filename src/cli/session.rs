//! The interactive read-eval-render loop.

use super::command::{Command, HELP};
use super::render;
use crate::error::FormError;
use crate::form::SubmitOutcome;
use crate::repositories::ContactSource;
use crate::services::{ConfirmPrompt, ContactApp, DeleteOutcome};
use async_trait::async_trait;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Asks yes/no questions on the same input stream the session reads from.
pub struct LinePrompt<'a, R, W> {
    lines: &'a mut Lines<R>,
    out: &'a mut W,
}

impl<'a, R, W> LinePrompt<'a, R, W> {
    pub fn new(lines: &'a mut Lines<R>, out: &'a mut W) -> Self {
        Self { lines, out }
    }
}

#[async_trait(?Send)]
impl<'a, R, W> ConfirmPrompt for LinePrompt<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    async fn confirm(&mut self, message: &str) -> bool {
        if write!(self.out, "{} [y/N] ", message)
            .and_then(|_| self.out.flush())
            .is_err()
        {
            return false;
        }

        match self.lines.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Load contacts from `source`, then process commands from `input` until
/// `quit` or end of input.
///
/// Command and validation errors are reported to `out`; only I/O errors end
/// the session early.
pub async fn run_session<R, W>(
    app: &mut ContactApp,
    source: &dyn ContactSource,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render::header())?;
    writeln!(out)?;
    write!(out, "{}", render::contact_list(app))?;
    out.flush()?;

    app.load(source).await;
    write!(out, "{}", render::contact_list(app))?;
    writeln!(out, "\nType 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if let Flow::Quit = execute(app, command, &mut lines, out).await? {
            break;
        }
    }

    writeln!(out, "Goodbye.")?;
    out.flush()
}

async fn execute<R, W>(
    app: &mut ContactApp,
    command: Command,
    lines: &mut Lines<R>,
    out: &mut W,
) -> io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match command {
        Command::Empty => {}
        Command::List => write!(out, "{}", render::contact_list(app))?,
        Command::Search(query) => {
            app.set_search_query(query);
            write!(out, "{}", render::contact_list(app))?;
        }
        Command::ClearSearch => {
            app.clear_search();
            write!(out, "{}", render::contact_list(app))?;
        }
        Command::Show(id) => match app.store().get(id) {
            Some(contact) => write!(out, "{}", render::contact_card(contact))?,
            None => writeln!(out, "Contact #{} not found", id)?,
        },
        Command::Add => {
            app.open_add();
            write!(out, "{}", render::form(app.form()))?;
        }
        Command::Edit(id) => {
            if app.open_edit(id) {
                write!(out, "{}", render::form(app.form()))?;
            } else {
                writeln!(out, "Contact #{} not found", id)?;
            }
        }
        Command::Set(field, value) => {
            if app.set_field(field, value) {
                write!(out, "{}", render::form(app.form()))?;
            } else {
                writeln!(out, "{}", no_form_hint())?;
            }
        }
        Command::Save => match app.submit() {
            Ok(SubmitOutcome::Added(contact)) => {
                writeln!(out, "Added contact #{} {}", contact.id, contact.name)?;
                write!(out, "{}", render::contact_list(app))?;
            }
            Ok(SubmitOutcome::Updated(contact)) => {
                writeln!(out, "Updated contact #{} {}", contact.id, contact.name)?;
                write!(out, "{}", render::contact_list(app))?;
            }
            Ok(SubmitOutcome::Missing(id)) => {
                writeln!(out, "Contact #{} no longer exists; nothing was saved", id)?;
            }
            Err(FormError::NotOpen) => writeln!(out, "{}", no_form_hint())?,
            Err(FormError::Invalid(_)) => write!(out, "{}", render::form(app.form()))?,
        },
        Command::Cancel => {
            app.cancel();
            write!(out, "{}", render::contact_list(app))?;
        }
        Command::Delete(id) => {
            let outcome = {
                let mut prompt = LinePrompt::new(lines, out);
                app.delete(id, &mut prompt).await
            };
            match outcome {
                DeleteOutcome::Deleted(contact) => {
                    writeln!(out, "Deleted contact #{} {}", contact.id, contact.name)?;
                    write!(out, "{}", render::contact_list(app))?;
                }
                DeleteOutcome::Declined => writeln!(out, "Kept contact #{}", id)?,
                DeleteOutcome::NotFound(id) => writeln!(out, "Contact #{} not found", id)?,
            }
        }
        Command::Export => {
            let json = serde_json::to_string_pretty(app.store().list())?;
            writeln!(out, "{}", json)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn no_form_hint() -> &'static str {
    "No contact form is open (use 'add' or 'edit <id>')"
}
