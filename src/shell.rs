mod commands;
mod error;

pub use self::commands::*;
pub use self::error::*;

use crate::State;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// What commands get to touch: the file tree and the prompt.
#[derive(Debug)]
pub struct Session {
    pub state: State,
    pub prompt: String,
}

impl Session {
    pub const DEFAULT_PROMPT: &'static str = "% ";
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: State::new(),
            prompt: Self::DEFAULT_PROMPT.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(Option<i32>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Shows the prompt before reading each command
    Interactive,

    /// Prints each command (after the prompt) before running it
    Script,
}

/// Reads commands line by line and dispatches them to their handlers.
///
/// Regular output (and lookup misses, such as `cat` of a missing file) goes
/// into `out`, while errors go into `err` - a failing command sets the exit
/// status to 1, but doesn't stop the shell.
pub struct Shell<O, E> {
    session: Session,
    commands: BTreeMap<&'static str, Handler>,
    mode: Mode,
    status: i32,
    exited: bool,
    out: O,
    err: E,
}

impl<O, E> Shell<O, E>
where
    O: Write,
    E: Write,
{
    pub fn new(mode: Mode, out: O, err: E) -> Self {
        Self {
            session: Default::default(),
            commands: commands(),
            mode,
            status: 0,
            exited: false,
            out,
            err,
        }
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub fn into_output(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Runs commands until the input ends or `exit` gets called.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        let mut lines = input.lines();

        while !self.exited {
            if self.mode == Mode::Interactive {
                write!(self.out, "{}", self.session.prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };

            let line = line.context("couldn't read command")?;

            if self.mode == Mode::Script {
                writeln!(self.out, "{}{}", self.session.prompt, line)?;
            }

            self.execute(&line)?;
            self.out.flush()?;
        }

        Ok(())
    }

    /// Runs a single command.
    ///
    /// Blank lines and lines starting with `#` are ignored. Fails only when
    /// writing into `err` fails.
    #[instrument(skip(self))]
    pub fn execute(&mut self, line: &str) -> Result<()> {
        let words: Vec<String> = line.split_whitespace().map(String::from).collect();

        let Some(verb) = words.first() else {
            return Ok(());
        };

        if verb.starts_with('#') {
            return Ok(());
        }

        debug!("dispatching {:?}", words);

        let result = self
            .commands
            .get(verb.as_str())
            .copied()
            .ok_or(CommandError::NoSuchFunction)
            .and_then(|handler| handler(&mut self.session, &words, &mut self.out));

        match result {
            Ok(Flow::Continue) => {}

            Ok(Flow::Exit(status)) => {
                if let Some(status) = status {
                    self.status = status;
                }

                self.exited = true;
            }

            Err(err) => {
                err.log();
                writeln!(self.err, "{}: {}", verb, err)?;
                self.status = 1;
            }
        }

        Ok(())
    }
}
