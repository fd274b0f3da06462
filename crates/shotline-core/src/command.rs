//! Region command language.
//!
//! A region's `command` tag holds one or more commands separated by `;`.
//! Each command is either a bare name or a name followed by a
//! parenthesized, comma-separated argument list:
//!
//! ```text
//! play_sound(sounds/beep.wav); reset_score
//! ```
//!
//! The whole tag is tokenized, parsed and validated before any command
//! runs, so malformed content never executes partially.

use crate::region::TargetRegion;

/// Name of the command that plays a sound file.
pub const PLAY_SOUND: &str = "play_sound";

/// Error type for malformed command content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Command {index} has no name")]
    EmptyName { index: usize },
    #[error("Command `{name}` has an unclosed argument list")]
    UnclosedArguments { name: String },
    #[error("Command `{name}` has an empty argument at position {index}")]
    EmptyArgument { name: String, index: usize },
    #[error("Command `{name}`: unexpected `{token}` at byte {position}")]
    UnexpectedToken {
        name: String,
        token: String,
        position: usize,
    },
    #[error("Command `{name}` expects {expected} argument(s), got {found}")]
    MissingArgument {
        name: String,
        expected: usize,
        found: usize,
    },
}

/// A parsed command: name plus positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Text(String),
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    position: usize,
}

impl Token {
    fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Text(text) => text.clone(),
            TokenKind::OpenParen => "(".to_string(),
            TokenKind::CloseParen => ")".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Semicolon => ";".to_string(),
        }
    }
}

/// Splits the source into structural tokens and trimmed text runs.
fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    // Position of the first non-whitespace character of the current run.
    let mut text_start: Option<usize> = None;

    let flush = |text: &mut String, start: Option<usize>, tokens: &mut Vec<Token>| {
        if let Some(position) = start {
            tokens.push(Token {
                kind: TokenKind::Text(text.trim().to_string()),
                position,
            });
        }
        text.clear();
    };

    for (position, ch) in source.char_indices() {
        let kind = match ch {
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            _ => {
                if text_start.is_none() && !ch.is_whitespace() {
                    text_start = Some(position);
                }
                text.push(ch);
                continue;
            }
        };
        flush(&mut text, text_start.take(), &mut tokens);
        tokens.push(Token { kind, position });
    }
    flush(&mut text, text_start.take(), &mut tokens);

    tokens
}

/// Parses a command string into ordered commands.
///
/// Empty segments (`a;;b`, trailing `;`) are skipped.
pub fn parse_commands(source: &str) -> Result<Vec<Command>, CommandError> {
    let tokens = tokenize(source);
    let mut commands = Vec::new();

    for (index, segment) in tokens
        .split(|t| t.kind == TokenKind::Semicolon)
        .enumerate()
    {
        if segment.is_empty() {
            continue;
        }
        commands.push(parse_command(index, segment)?);
    }

    Ok(commands)
}

fn parse_command(index: usize, tokens: &[Token]) -> Result<Command, CommandError> {
    let (first, rest) = tokens
        .split_first()
        .ok_or(CommandError::EmptyName { index })?;
    let TokenKind::Text(name) = &first.kind else {
        return Err(CommandError::EmptyName { index });
    };

    let Some((open, rest)) = rest.split_first() else {
        return Ok(Command::new(name.clone(), Vec::new()));
    };
    if open.kind != TokenKind::OpenParen {
        return Err(unexpected(name, open));
    }

    let mut args = Vec::new();
    let mut pending: Option<String> = None;
    let mut saw_comma = false;
    let mut iter = rest.iter();

    loop {
        let Some(token) = iter.next() else {
            return Err(CommandError::UnclosedArguments { name: name.clone() });
        };
        match &token.kind {
            TokenKind::Text(text) => {
                if pending.is_some() {
                    return Err(unexpected(name, token));
                }
                pending = Some(text.clone());
            }
            TokenKind::Comma => {
                let arg = pending.take().ok_or_else(|| CommandError::EmptyArgument {
                    name: name.clone(),
                    index: args.len(),
                })?;
                args.push(arg);
                saw_comma = true;
            }
            TokenKind::CloseParen => {
                match pending.take() {
                    Some(arg) => args.push(arg),
                    None if saw_comma => {
                        return Err(CommandError::EmptyArgument {
                            name: name.clone(),
                            index: args.len(),
                        });
                    }
                    None => {}
                }
                break;
            }
            TokenKind::OpenParen | TokenKind::Semicolon => {
                return Err(unexpected(name, token));
            }
        }
    }

    if let Some(trailing) = iter.next() {
        return Err(unexpected(name, trailing));
    }

    Ok(Command::new(name.clone(), args))
}

fn unexpected(name: &str, token: &Token) -> CommandError {
    CommandError::UnexpectedToken {
        name: name.to_string(),
        token: token.describe(),
        position: token.position,
    }
}

/// Collaborator that performs the side effects commands ask for.
pub trait ActionRegistry {
    fn play_sound(&mut self, path: &str);
}

/// A validated command ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionAction {
    PlaySound(String),
    /// Unrecognized command, skipped when executed.
    Unknown(String),
}

impl RegionAction {
    /// Checks the command's arguments and turns it into an action.
    pub fn from_command(command: &Command) -> Result<Self, CommandError> {
        match command.name.as_str() {
            PLAY_SOUND => {
                let path = required_arg(command, 0, 1)?;
                if command.args.len() > 1 {
                    tracing::warn!(
                        "[command] {} ignores {} extra argument(s)",
                        PLAY_SOUND,
                        command.args.len() - 1
                    );
                }
                Ok(Self::PlaySound(path.to_string()))
            }
            other => Ok(Self::Unknown(other.to_string())),
        }
    }

    /// Runs the action. Unknown actions do nothing.
    pub fn execute(&self, actions: &mut dyn ActionRegistry) {
        match self {
            Self::PlaySound(path) => {
                tracing::debug!("[command] play_sound({})", path);
                actions.play_sound(path);
            }
            Self::Unknown(name) => {
                tracing::debug!("[command] ignoring unknown command `{}`", name);
            }
        }
    }
}

fn required_arg(command: &Command, index: usize, expected: usize) -> Result<&str, CommandError> {
    command
        .args
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| CommandError::MissingArgument {
            name: command.name.clone(),
            expected,
            found: command.args.len(),
        })
}

/// Parses and validates a full command string.
pub fn parse_actions(source: &str) -> Result<Vec<RegionAction>, CommandError> {
    parse_commands(source)?
        .iter()
        .map(RegionAction::from_command)
        .collect()
}

/// Runs every command of a command string, left to right.
///
/// Nothing runs if any part of the string is malformed. Returns the number
/// of actions executed, unknown ones included.
pub fn execute(source: &str, actions: &mut dyn ActionRegistry) -> Result<usize, CommandError> {
    let parsed = parse_actions(source)?;
    for action in &parsed {
        action.execute(actions);
    }
    Ok(parsed.len())
}

/// Runs the commands attached to a region, if it has any.
pub fn dispatch(region: &TargetRegion, actions: &mut dyn ActionRegistry) -> Result<usize, CommandError> {
    match region.command() {
        Some(source) => execute(source, actions),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::RegionShape;
    use crate::test_utils::RecordingActions;

    fn region_with_command(command: &str) -> TargetRegion {
        TargetRegion::new(RegionShape::Rectangle {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        })
        .with_tag("command", command)
    }

    #[test]
    fn test_parse_bare_and_called_commands() {
        let commands = parse_commands("reset; play_sound(a.wav, loud) ;stop()").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::new("reset", vec![]),
                Command::new("play_sound", vec!["a.wav".into(), "loud".into()]),
                Command::new("stop", vec![]),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let commands = parse_commands(";a;;b;").unwrap();
        let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(parse_commands("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_arguments_keep_inner_spaces_and_dots() {
        let commands = parse_commands("play_sound( sounds/big bang.wav )").unwrap();
        assert_eq!(commands[0].args, vec!["sounds/big bang.wav".to_string()]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_commands("play_sound(a.wav"),
            Err(CommandError::UnclosedArguments {
                name: "play_sound".into()
            })
        );
        assert_eq!(
            parse_commands("(a.wav)"),
            Err(CommandError::EmptyName { index: 0 })
        );
        assert_eq!(
            parse_commands("a;play_sound(x,,y)"),
            Err(CommandError::EmptyArgument {
                name: "play_sound".into(),
                index: 1
            })
        );
        assert_eq!(
            parse_commands("play_sound(x,)"),
            Err(CommandError::EmptyArgument {
                name: "play_sound".into(),
                index: 1
            })
        );
        assert!(matches!(
            parse_commands("play_sound(a.wav) extra"),
            Err(CommandError::UnexpectedToken { ref token, .. }) if token == "extra"
        ));
        assert!(matches!(
            parse_commands("play_sound((a.wav))"),
            Err(CommandError::UnexpectedToken { ref token, position: 11, .. }) if token == "("
        ));
    }

    #[test]
    fn test_error_position_skips_leading_whitespace() {
        assert_eq!(
            parse_commands("play_sound(a.wav)   extra"),
            Err(CommandError::UnexpectedToken {
                name: "play_sound".into(),
                token: "extra".into(),
                position: 20,
            })
        );
    }

    #[test]
    fn test_play_sound_dispatches_once() {
        let mut actions = RecordingActions::default();
        let executed = dispatch(&region_with_command("play_sound(click.wav)"), &mut actions).unwrap();
        assert_eq!(executed, 1);
        assert_eq!(actions.sounds(), vec!["click.wav".to_string()]);
    }

    #[test]
    fn test_unknown_command_ignored() {
        let mut actions = RecordingActions::default();
        dispatch(&region_with_command("foo;play_sound(a.wav)"), &mut actions).unwrap();
        assert_eq!(actions.sounds(), vec!["a.wav".to_string()]);
    }

    #[test]
    fn test_commands_run_left_to_right() {
        let mut actions = RecordingActions::default();
        execute("play_sound(1.wav);play_sound(2.wav);play_sound(3.wav)", &mut actions).unwrap();
        assert_eq!(actions.sounds(), vec!["1.wav", "2.wav", "3.wav"]);
    }

    #[test]
    fn test_missing_argument_aborts_everything() {
        let mut actions = RecordingActions::default();
        let result = execute("play_sound(first.wav);play_sound()", &mut actions);
        assert_eq!(
            result,
            Err(CommandError::MissingArgument {
                name: "play_sound".into(),
                expected: 1,
                found: 0
            })
        );
        assert!(actions.sounds().is_empty());

        let result = execute("play_sound", &mut actions);
        assert!(matches!(result, Err(CommandError::MissingArgument { .. })));
    }

    #[test]
    fn test_region_without_command_does_nothing() {
        let mut actions = RecordingActions::default();
        let region = TargetRegion::new(RegionShape::Polygon {
            points: vec![[0.0, 0.0], [1.0, 1.0]],
        });
        assert_eq!(dispatch(&region, &mut actions), Ok(0));
        assert!(actions.sounds().is_empty());
    }
}
