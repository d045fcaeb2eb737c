use super::{CmdResult, CommandError, Flow, Session};
use std::collections::BTreeMap;
use std::io::Write;

pub type Handler = fn(&mut Session, &[String], &mut dyn Write) -> CmdResult<Flow>;

const COMMANDS: [(&str, Handler); 12] = [
    ("cat", cat),
    ("cd", cd),
    ("echo", echo),
    ("exit", exit),
    ("ls", ls),
    ("lsr", lsr),
    ("make", make),
    ("mkdir", mkdir),
    ("prompt", prompt),
    ("pwd", pwd),
    ("rm", rm),
    ("rmr", rmr),
];

pub fn commands() -> BTreeMap<&'static str, Handler> {
    BTreeMap::from(COMMANDS)
}

fn operand(words: &[String]) -> CmdResult<&str> {
    words
        .get(1)
        .map(String::as_str)
        .ok_or(CommandError::MissingOperand)
}

fn cat(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    operand(words)?;

    for name in &words[1..] {
        match session.state.cat(name)? {
            Some(words) => {
                for word in words {
                    write!(out, "{} ", word)?;
                }

                writeln!(out)?;
            }

            None => {
                writeln!(out, "cat: {}: No such file or directory", name)?;
            }
        }
    }

    Ok(Flow::Continue)
}

fn cd(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let name = words.get(1).map_or("/", String::as_str);

    if !session.state.cd(name)? {
        writeln!(out, "cd: {}: no directory found", name)?;
    }

    Ok(Flow::Continue)
}

fn echo(_: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let words: Vec<_> = words[1..]
        .iter()
        .filter(|word| !word.starts_with('#'))
        .map(String::as_str)
        .collect();

    writeln!(out, "{}", words.join(" "))?;

    Ok(Flow::Continue)
}

fn exit(_: &mut Session, words: &[String], _: &mut dyn Write) -> CmdResult<Flow> {
    let status = words
        .get(1)
        .map(|status| {
            status
                .parse()
                .map_err(|_| CommandError::InvalidStatus(status.clone()))
        })
        .transpose()?;

    Ok(Flow::Exit(status))
}

fn ls(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let target = words.get(1).map_or(".", String::as_str);

    match session.state.ls(target)? {
        Some(listing) => write!(out, "{}", listing)?,
        None => writeln!(out, "ls: {}: does not exist", target)?,
    }

    Ok(Flow::Continue)
}

/// Takes an optional argument for compatibility, but always lists from the
/// root.
fn lsr(session: &mut Session, _: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    for listing in session.state.lsr()? {
        write!(out, "{}", listing)?;
    }

    Ok(Flow::Continue)
}

fn make(session: &mut Session, words: &[String], _: &mut dyn Write) -> CmdResult<Flow> {
    if words.len() < 2 {
        return Err(CommandError::MissingName("file"));
    }

    session.state.make_file(words)?;

    Ok(Flow::Continue)
}

fn mkdir(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let name = operand(words).map_err(|_| CommandError::MissingName("directory"))?;

    if session.state.mkdir(name)?.is_none() {
        writeln!(out, "mkdir: {}: directory already exists", name)?;
    }

    Ok(Flow::Continue)
}

fn prompt(session: &mut Session, words: &[String], _: &mut dyn Write) -> CmdResult<Flow> {
    session.prompt = words[1..]
        .iter()
        .map(|word| format!("{} ", word))
        .collect();

    Ok(Flow::Continue)
}

fn pwd(session: &mut Session, _: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    writeln!(out, "{}", session.state.pwd()?)?;

    Ok(Flow::Continue)
}

fn rm(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let name = operand(words)?;

    if !session.state.rm(name)? {
        writeln!(out, "rm: cannot remove '{}': No such file or directory", name)?;
    }

    Ok(Flow::Continue)
}

fn rmr(session: &mut Session, words: &[String], out: &mut dyn Write) -> CmdResult<Flow> {
    let name = operand(words)?;

    if !session.state.rmr(name)? {
        writeln!(out, "rmr: cannot remove '{}': No such file or directory", name)?;
    }

    Ok(Flow::Continue)
}
