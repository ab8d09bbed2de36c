//! Message text to command parsing.

/// Leading character that marks a command.
pub const COMMAND_MARKER: char = '/';

/// A command name and its raw argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Command name including the marker, e.g. `/mxd-search`.
    pub command_name: String,
    /// Everything after the first space, untrimmed.
    pub args: String,
}

/// Splits chat text into commands.
///
/// Text without the marker is routed to the default command when one is set,
/// so `matrix` behaves like `/mxd-search matrix`.
#[derive(Debug, Clone, Default)]
pub struct MessageParser {
    default_command: Option<String>,
}

impl MessageParser {
    /// Create a parser. An empty default command disables free-text routing.
    pub fn new(default_command: Option<String>) -> Self {
        Self {
            default_command: default_command.filter(|c| !c.is_empty()),
        }
    }

    /// Parser that only accepts marked commands.
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn default_command(&self) -> Option<&str> {
        self.default_command.as_deref()
    }

    /// Parse a message. Returns `None` for text that is not a command.
    ///
    /// Length is counted in UTF-16 code units, as the platform counts it, so a
    /// lone astral character such as an emoji is long enough.
    pub fn parse(&self, text: &str) -> Option<ParsedCommand> {
        if text.encode_utf16().count() < 2 {
            return None;
        }

        if !text.starts_with(COMMAND_MARKER) {
            return self.default_command.as_ref().map(|name| ParsedCommand {
                command_name: name.clone(),
                args: text.to_string(),
            });
        }

        let (command_name, args) = match text.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (text, ""),
        };

        Some(ParsedCommand {
            command_name: command_name.to_string(),
            args: args.to_string(),
        })
    }
}
