mod cmds;
mod content;
mod inode;
mod inode_id;
mod inodes;
mod shell;
mod state;

pub use self::cmds::*;
pub use self::content::*;
pub use self::inode::*;
pub use self::inode_id::*;
pub use self::inodes::*;
pub use self::shell::*;
pub use self::state::*;

use anyhow::Result;
use std::io;
use std::process;
use structopt::StructOpt;
use tracing::Level;

/// inodesh, a shell playing with a file tree that lives only in memory
#[derive(Debug, StructOpt)]
struct Opts {
    /// Raises the trace level; repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Trace flags; any non-empty value turns on full tracing
    #[structopt(short = "@", long)]
    debug: Option<String>,

    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    Run(RunCmd),
    Shell(ShellCmd),
}

impl Opts {
    fn level(&self) -> Level {
        if self.debug.as_deref().map_or(false, |flags| !flags.is_empty()) {
            return Level::TRACE;
        }

        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::from_args();

    tracing_subscriber::fmt()
        .with_max_level(opts.level())
        .with_writer(io::stderr)
        .init();

    let status = match opts.cmd {
        Cmd::Run(cmd) => cmd.run(),
        Cmd::Shell(cmd) => cmd.run(),
    }?;

    process::exit(status);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str]) -> Opts {
        Opts::from_iter_safe(args).unwrap()
    }

    #[test]
    fn trace_flags() {
        assert_eq!(opts(&["inodesh", "-@", "ci", "shell"]).level(), Level::TRACE);
        assert_eq!(opts(&["inodesh", "--debug", "@", "shell"]).level(), Level::TRACE);
        assert_eq!(opts(&["inodesh", "--debug", "", "shell"]).level(), Level::WARN);
    }

    #[test]
    fn verbosity() {
        assert_eq!(opts(&["inodesh", "shell"]).level(), Level::WARN);
        assert_eq!(opts(&["inodesh", "-vv", "shell"]).level(), Level::DEBUG);
        assert_eq!(opts(&["inodesh", "-vvvv", "run", "x.sh"]).level(), Level::TRACE);
    }
}
