//! Interactive host commands.

use std::str::FromStr;

use crate::error::CommandError;

/// A single line of REPL input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Default launch (`launch`).
    Launch,
    /// Explicit view request (`view <target>`).
    View(String),
    /// Capture a target without navigating (`record <target>`).
    Record(String),
    /// Shared text (`share <text>`). Empty text is ignored.
    Share(String),
    /// Try to dispatch the pending target (`dispatch`).
    Dispatch,
    /// Complete onboarding (`finish`).
    Finish,
    /// Drop the window and rebind a fresh one (`recreate`).
    Recreate,
    /// Reopen from the recent-apps list, redelivering the startup entry (`relaunch`).
    Relaunch,
    /// Print current state (`status`).
    Status,
    /// Leave the REPL (`quit`, `/quit`, `exit`, `/exit`).
    Quit,
}

impl FromStr for HostCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let target = |command: &str| {
            if rest.is_empty() {
                Err(CommandError::MissingTarget {
                    command: command.to_string(),
                })
            } else {
                Ok(rest.to_string())
            }
        };
        let bare = |cmd: HostCommand| {
            if rest.is_empty() {
                Ok(cmd)
            } else {
                Err(CommandError::UnexpectedArgument {
                    command: name.to_string(),
                })
            }
        };

        match name.to_ascii_lowercase().as_str() {
            "view" | "open" => target("view").map(Self::View),
            "record" => target("record").map(Self::Record),
            "share" => Ok(Self::Share(rest.to_string())),
            "launch" => bare(Self::Launch),
            "dispatch" => bare(Self::Dispatch),
            "finish" => bare(Self::Finish),
            "recreate" => bare(Self::Recreate),
            "relaunch" => bare(Self::Relaunch),
            "status" => bare(Self::Status),
            "quit" | "/quit" | "exit" | "/exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_targets_verbatim() {
        assert_eq!(
            "view https://example.com/a b".parse::<HostCommand>(),
            Ok(HostCommand::View("https://example.com/a b".to_string()))
        );
        assert_eq!(
            "  record   about:blank ".parse::<HostCommand>(),
            Ok(HostCommand::Record("about:blank".to_string()))
        );
        assert_eq!(
            "OPEN x".parse::<HostCommand>(),
            Ok(HostCommand::View("x".to_string()))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!("launch".parse::<HostCommand>(), Ok(HostCommand::Launch));
        assert_eq!("dispatch".parse::<HostCommand>(), Ok(HostCommand::Dispatch));
        assert_eq!("finish".parse::<HostCommand>(), Ok(HostCommand::Finish));
        assert_eq!("recreate".parse::<HostCommand>(), Ok(HostCommand::Recreate));
        assert_eq!("status".parse::<HostCommand>(), Ok(HostCommand::Status));
        assert_eq!("relaunch".parse::<HostCommand>(), Ok(HostCommand::Relaunch));
        assert_eq!("/quit".parse::<HostCommand>(), Ok(HostCommand::Quit));
    }

    #[test]
    fn share_accepts_empty_text() {
        assert_eq!(
            "share".parse::<HostCommand>(),
            Ok(HostCommand::Share(String::new()))
        );
        assert_eq!(
            "share look at this".parse::<HostCommand>(),
            Ok(HostCommand::Share("look at this".to_string()))
        );
    }

    #[test]
    fn missing_target() {
        assert_eq!(
            "view".parse::<HostCommand>(),
            Err(CommandError::MissingTarget {
                command: "view".to_string()
            })
        );
    }

    #[test]
    fn rejects_arguments_on_bare_commands() {
        assert_eq!(
            "launch now".parse::<HostCommand>(),
            Err(CommandError::UnexpectedArgument {
                command: "launch".to_string()
            })
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            "navigate x".parse::<HostCommand>(),
            Err(CommandError::Unknown("navigate x".to_string()))
        );
    }
}
