//! Command types for the trigger interface
//!
//! The host decides *when* to act (a keyboard shortcut, a menu entry) and
//! sends a command by name; this module turns that name into a [`Command`].

use std::str::FromStr;

/// Identifies an action the host can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Convert the active selection to the other layout, in place
    ReplaceText,
}

impl Command {
    /// All commands, in display order
    pub const ALL: &'static [Command] = &[Command::ReplaceText];

    /// Name the host uses to send this command
    pub const fn name(self) -> &'static str {
        match self {
            Command::ReplaceText => "replace-text",
        }
    }

    /// Human-readable description
    pub const fn label(self) -> &'static str {
        match self {
            Command::ReplaceText => "Convert Selection to Other Layout",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a command name nobody handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .iter()
            .copied()
            .find(|command| command.name() == name.trim())
            .ok_or_else(|| UnknownCommand(name.to_string()))
    }
}
