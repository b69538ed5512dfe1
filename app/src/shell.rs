//! Interactive loop: reads commands, dispatches requests, re-renders.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::command::{self, Input, HELP};
use crate::render::render;
use crate::session::Session;

/// Loads the list, then serves commands from `input` until `quit` or end
/// of input. Outstanding requests are settled before returning.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let pending = session.controller_mut().begin_load();
    session.dispatch(pending);
    write!(out, "{}", render(session.controller()))?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match command::parse(&line) {
                    Ok(Input::Quit) => break,
                    Ok(cmd) => handle(session, cmd, out)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Some(completion) = session.next_completion() => {
                session.apply(completion);
                write!(out, "{}", render(session.controller()))?;
            }
        }
        out.flush()?;
    }

    if session.in_flight() > 0 {
        debug!(in_flight = session.in_flight(), "waiting for outstanding requests");
        session.settle().await;
        write!(out, "{}", render(session.controller()))?;
    }
    out.flush()?;
    Ok(())
}

fn handle<W: Write>(session: &mut Session, input: Input, out: &mut W) -> Result<()> {
    match input {
        Input::Type(text) => session.controller_mut().set_new_todo(text),
        Input::Add(text) => {
            if let Some(text) = text {
                session.controller_mut().set_new_todo(text);
            }
            match session.controller_mut().submit_create() {
                Some(pending) => session.dispatch(pending),
                None => writeln!(out, "Nothing to add.")?,
            }
        }
        Input::Edit(row) => {
            if !session.controller_mut().begin_edit_at(row - 1) {
                writeln!(out, "No todo at row {row}.")?;
            }
        }
        Input::Text(text) => {
            if session.controller().editing().editing_id().is_none() {
                writeln!(out, "Not editing.")?;
            } else {
                session.controller_mut().set_edit_text(text);
            }
        }
        Input::Save => {
            let pending = session
                .controller()
                .editing()
                .editing_id()
                .and_then(|id| session.controller_mut().save_edit(id));
            match pending {
                Some(pending) => session.dispatch(pending),
                None => writeln!(out, "Not editing.")?,
            }
        }
        Input::Cancel => session.controller_mut().cancel_edit(),
        Input::Delete(row) => match session.controller().todos().get(row - 1) {
            Some(todo) => {
                let pending = session.controller().delete(todo.id);
                session.dispatch(pending);
            }
            None => writeln!(out, "No todo at row {row}.")?,
        },
        Input::Reload => {
            let pending = session.controller_mut().begin_load();
            session.dispatch(pending);
        }
        Input::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        Input::List | Input::Quit => {}
    }
    write!(out, "{}", render(session.controller()))?;
    Ok(())
}
