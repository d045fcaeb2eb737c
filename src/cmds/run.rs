use super::report_exit;
use crate::{Mode, Shell};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct RunCmd {
    /// Scripts to execute, in order, against a single file tree
    #[structopt(required = true)]
    scripts: Vec<PathBuf>,
}

impl RunCmd {
    pub fn run(self) -> Result<i32> {
        self.run_with(io::stdout(), io::stderr())
    }

    fn run_with(self, out: impl Write, err: impl Write) -> Result<i32> {
        let mut shell = Shell::new(Mode::Script, out, err);

        for script in &self.scripts {
            let file = File::open(script)
                .with_context(|| format!("couldn't open: {}", script.display()))?;

            shell
                .run(BufReader::new(file))
                .with_context(|| format!("couldn't run: {}", script.display()))?;

            if shell.has_exited() {
                break;
            }
        }

        let status = shell.status();
        let (mut out, _) = shell.into_output();

        report_exit(&mut out, status)?;

        Ok(status)
    }
}
