use super::report_exit;
use crate::{Mode, Shell};
use anyhow::Result;
use std::io::{self, IsTerminal};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct ShellCmd {
    /// Echo each command even when stdin is a terminal
    #[structopt(short, long)]
    echo: bool,
}

impl ShellCmd {
    pub fn run(self) -> Result<i32> {
        let stdin = io::stdin();

        let mode = if stdin.is_terminal() && !self.echo {
            Mode::Interactive
        } else {
            Mode::Script
        };

        let mut shell = Shell::new(mode, io::stdout(), io::stderr());

        shell.run(stdin.lock())?;

        let status = shell.status();

        report_exit(&mut io::stdout(), status)?;

        Ok(status)
    }
}
