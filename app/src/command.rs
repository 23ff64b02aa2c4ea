//! One line of user input, parsed.

use crud_core::Route;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the current page.
    Show,
    Go(Route),
    Refresh,
    Edit(u64),
    Set { field: String, value: String },
    Submit,
    Cancel,
    Delete(u64),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument: {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("'{0}' is not a valid id")]
    InvalidId(String),
    #[error("unknown route '{0}' (try /, /users or /posts)")]
    UnknownRoute(String),
}

pub const HELP: &str = "\
commands:
  go <path>             open /, /users or /posts
  refresh               re-fetch the list
  edit <id>             load a row into the form
  set <field> <value>   change a form field
  submit                create, or update the row being edited
  cancel                discard the form
  delete <id>           delete a row (asks for confirmation)
  help                  show this text
  quit                  leave";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };
        match word {
            "" => Ok(Command::Show),
            "go" | "open" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("go", "<path>"));
                }
                Route::resolve(rest)
                    .map(Command::Go)
                    .ok_or_else(|| CommandError::UnknownRoute(rest.to_string()))
            }
            "refresh" | "r" => Ok(Command::Refresh),
            "edit" | "e" => parse_id("edit", rest).map(Command::Edit),
            "delete" | "rm" => parse_id("delete", rest).map(Command::Delete),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("set", "<field> <value>"));
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "submit" | "save" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<u64, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command, "<id>"));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

/// Reads a `y/N` answer; anything but yes declines.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation() {
        assert_eq!(Command::parse("go /users"), Ok(Command::Go(Route::Users)));
        assert_eq!(Command::parse("  open /posts/ "), Ok(Command::Go(Route::Posts)));
        assert_eq!(
            Command::parse("go /nowhere"),
            Err(CommandError::UnknownRoute("/nowhere".to_string()))
        );
        assert_eq!(
            Command::parse("go"),
            Err(CommandError::MissingArgument("go", "<path>"))
        );
    }

    #[test]
    fn parses_ids() {
        assert_eq!(Command::parse("edit 3"), Ok(Command::Edit(3)));
        assert_eq!(Command::parse("delete 12"), Ok(Command::Delete(12)));
        assert_eq!(
            Command::parse("delete x"),
            Err(CommandError::InvalidId("x".to_string()))
        );
        assert!(matches!(
            Command::parse("edit"),
            Err(CommandError::MissingArgument("edit", _))
        ));
    }

    #[test]
    fn set_keeps_inner_spaces_of_value() {
        assert_eq!(
            Command::parse("set name   Ada  Lovelace"),
            Ok(Command::Set {
                field: "name".to_string(),
                value: "Ada  Lovelace".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            Command::parse("set email"),
            Ok(Command::Set {
                field: "email".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn blank_line_shows_page() {
        assert_eq!(Command::parse("   "), Ok(Command::Show));
    }

    #[test]
    fn unknown_word_is_an_error() {
        assert_eq!(
            Command::parse("launch rockets"),
            Err(CommandError::Unknown("launch".to_string()))
        );
    }

    #[test]
    fn confirmation_accepts_only_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
