//! Interactive commands read from stdin and their mapping onto feed events.

use crossbeam_channel::{Sender, TrySendError};
use feed_core::{FeedEvent, HtmlSurface};
use shared::NotificationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Read(NotificationId),
    MarkAll,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "commands: read <id> | all | show | help | quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let command = match head {
        "read" | "r" => match parts.next() {
            Some(id) => Command::Read(NotificationId::from(id)),
            None => return Err("usage: read <id>".to_string()),
        },
        "all" | "mark-all" => Command::MarkAll,
        "show" | "s" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command {other:?}; {HELP}")),
    };
    if parts.next().is_some() {
        return Err(format!("unexpected arguments after {head:?}"));
    }
    Ok(command)
}

/// Turns an interaction command into the event the surface would raise for
/// the equivalent click. `None` when the surface has no handler for it.
pub fn to_event(surface: &HtmlSurface, command: &Command) -> Option<FeedEvent> {
    match command {
        Command::Read(id) => surface.click_item(id),
        Command::MarkAll => surface.click_mark_all(),
        Command::Show | Command::Help | Command::Quit => None,
    }
}

/// Queues a parsed command for the event loop. Returns `false` once the loop
/// is gone.
pub fn enqueue(tx: &Sender<Command>, command: Command) -> bool {
    match tx.try_send(command) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::warn!("command queue is full; dropping input");
            true
        }
        Err(TrySendError::Disconnected(_)) => false,
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
