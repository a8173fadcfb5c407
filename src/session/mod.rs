//! Interactive session loop.
//!
//! Reads command lines, dispatches them against the loaded address book and
//! saves the book when the session ends.

use crate::commands::{Dispatcher, Outcome};
use crate::models::AddressBook;
use crate::storage::BookStore;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const INVALID_ENCODING: &str = "Input must be valid UTF-8 text.";

/// Run a session until `close`/`exit` or end of input.
///
/// The book is loaded from `store` before the first prompt and saved back
/// once the session ends, whichever way it ends.
///
/// # Arguments
/// * `store` - Where the address book lives between sessions
/// * `dispatcher` - Command router
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
///
/// # Returns
/// An error if loading, saving or terminal I/O fails
pub fn run_session<S, R, W>(
    store: &S,
    dispatcher: &Dispatcher,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    S: BookStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut book = store.load().context("Failed to load address book")?;

    // Terminal failures end the loop but never skip the save.
    let terminal = converse(dispatcher, &mut book, &mut input, &mut output);
    if let Err(e) = &terminal {
        tracing::error!(error = %e, "Terminal I/O failed, saving and closing session");
    }

    store.save(&book).context("Failed to save address book")?;
    terminal.context("Terminal I/O failed")?;
    Ok(())
}

/// Prompt, read and reply until exit or end of input.
fn converse<R, W>(
    dispatcher: &Dispatcher,
    book: &mut AddressBook,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut raw = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            tracing::info!("End of input, closing session");
            writeln!(output)?;
            return Ok(());
        }

        let Ok(line) = std::str::from_utf8(&raw) else {
            tracing::warn!(bytes = raw.len(), "Skipping line that is not valid UTF-8");
            writeln!(output, "{}", INVALID_ENCODING)?;
            continue;
        };

        match dispatcher.dispatch(book, line) {
            Some(Outcome::Reply(message)) => writeln!(output, "{}", message)?,
            Some(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
            None => {}
        }
    }
}
