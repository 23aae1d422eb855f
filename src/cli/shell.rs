//! Interactive prompt loop sharing the argv dispatch path.
use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use clap::Parser;
use tracing::warn;

use super::{args::ShellLine, console::Console, execute_command, exit::CliExit};
use crate::{
    command::tokenize,
    store::{ProfileCache, ProfileStore},
};

const PROMPT: &str = "> ";
/// Entries printed by `history`.
const HISTORY_LIMIT: usize = 10;
/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Built-in shell words handled before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Exit,
    Clear,
    History,
}

impl Builtin {
    fn parse(line: &str) -> Option<Self> {
        ["exit", "quit", "clear", "history"]
            .into_iter()
            .find(|word| line.eq_ignore_ascii_case(word))
            .map(|word| match word {
                "clear" => Builtin::Clear,
                "history" => Builtin::History,
                _ => Builtin::Exit,
            })
    }
}

/// Read commands until `exit`, `quit` or end of input.
///
/// Command failures are printed and the loop continues; fatal store errors end it.
pub async fn run<C, R, W>(
    store: &mut ProfileStore<C>,
    console: &mut Console<R, W>,
) -> Result<(), CliExit>
where
    C: ProfileCache,
    R: BufRead,
    W: Write,
{
    let mut history: VecDeque<String> = VecDeque::with_capacity(HISTORY_LIMIT);

    while let Some(line) = console.prompt(PROMPT).map_err(CliExit::from_error)? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(line.to_string());

        match Builtin::parse(line) {
            Some(Builtin::Exit) => return Ok(()),
            Some(Builtin::Clear) => console.write(CLEAR_SCREEN).map_err(CliExit::from_error)?,
            Some(Builtin::History) => {
                for entry in history.iter().rev() {
                    console.write_line(entry).map_err(CliExit::from_error)?;
                }
            }
            None => dispatch(line, store, console).await?,
        }
    }

    Ok(())
}

async fn dispatch<C, R, W>(
    line: &str,
    store: &mut ProfileStore<C>,
    console: &mut Console<R, W>,
) -> Result<(), CliExit>
where
    C: ProfileCache,
    R: BufRead,
    W: Write,
{
    let parsed = match ShellLine::try_parse_from(tokenize(line)) {
        Ok(parsed) => parsed,
        Err(err) => {
            let rendered = err.render().to_string();
            return console
                .write_line(rendered.trim_end())
                .map_err(CliExit::from_error);
        }
    };

    match execute_command(parsed.command, store, console).await {
        Ok(()) => Ok(()),
        Err(exit) if exit.is_fatal() => Err(exit),
        Err(exit) => {
            warn!(
                target: "settings_profile::cli",
                status = ?exit.status(),
                "Command failed"
            );
            console
                .write_line(exit.message())
                .map_err(CliExit::from_error)
        }
    }
}
