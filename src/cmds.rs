mod run;
mod shell;

pub use self::run::*;
pub use self::shell::*;

use std::io::Write;

/// Prints the final status the way the shell reports it on exit.
fn report_exit(out: &mut dyn Write, status: i32) -> std::io::Result<()> {
    writeln!(out, "{}: exit({})", env!("CARGO_PKG_NAME"), status)
}
