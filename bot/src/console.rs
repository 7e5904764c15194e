//! Line-oriented stand-in for the chat transport.
//!
//! Each input line is `SESSION press DATA` for a button press, `SESSION say TEXT` for a
//! chat message, or `SESSION state` to dump the session as JSON.
use std::io::{self, BufRead, Write};
use thiserror::Error;

use sweeper_protocol::{Action, ParseActionError, Request, SessionId};

use crate::{Controller, render};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("expected `SESSION press DATA`, `SESSION say TEXT` or `SESSION state`")]
    Usage,
    #[error("session id must be an integer, got {0:?}")]
    BadSession(String),
    #[error(transparent)]
    Callback(#[from] ParseActionError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Request(Request),
    DumpState(SessionId),
}

pub fn parse_line(line: &str) -> Result<Command, ConsoleError> {
    let line = line.trim();
    let (session, rest) = line.split_once(' ').ok_or(ConsoleError::Usage)?;
    let session = session
        .parse::<i64>()
        .map(SessionId)
        .map_err(|_| ConsoleError::BadSession(session.to_owned()))?;

    let rest = rest.trim_start();
    let (verb, payload) = rest.split_once(' ').unwrap_or((rest, ""));
    let action = match verb {
        "press" => Action::from_callback_data(payload.trim())?,
        "say" => Action::from_message(payload),
        "state" => return Ok(Command::DumpState(session)),
        _ => return Err(ConsoleError::Usage),
    };
    Ok(Command::Request(Request::new(session, action)))
}

/// Feeds every input line to the controller until end of input.
pub fn run(controller: &Controller, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(Command::Request(request)) => {
                let session = request.session;
                let text = render::reply(&controller.handle_request(request));
                if !text.is_empty() {
                    writeln!(output, "[{session}]\n{text}")?;
                }
            }
            Ok(Command::DumpState(session)) => {
                let snapshot = controller.store().get_or_create(session);
                let json = serde_json::to_string(&snapshot).map_err(io::Error::other)?;
                writeln!(output, "[{session}] {json}")?;
            }
            Err(err) => {
                log::warn!("Unreadable input {:?}: {}", line, err);
                writeln!(output, "error: {err}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
