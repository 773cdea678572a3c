//! Shell command parsing.
//!
//! Each line the user types maps to exactly one [`Event`]. The first word is
//! the command; the rest of the line is its argument, so values with spaces
//! (`discipline Long Jump`, `set name Ann Holm`) need no quoting.

use super::handler::Event;
use super::modes::Page;
use crate::domain::error::{Result, TracksideError};

/// Parses one shell line.
///
/// # Errors
///
/// Returns [`TracksideError::InvalidInput`] for empty lines, unknown commands,
/// missing arguments and non-numeric ids.
///
/// # Example
///
/// ```rust
/// use trackside::app::{input::parse_command, Event};
///
/// assert_eq!(parse_command("sort athlete.name")?, Event::RequestSort("athlete.name".into()));
/// assert_eq!(parse_command("search")?, Event::Search(String::new()));
/// # Ok::<(), trackside::domain::TracksideError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Event> {
    let line = line.trim();
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    if let Some(page) = Page::parse(command) {
        return Ok(Event::Navigate(page));
    }

    match command.to_ascii_lowercase().as_str() {
        "" => Err(TracksideError::invalid("Type a command, e.g. 'results'")),
        "refresh" | "reload" => Ok(Event::Refresh),
        "sort" => argument(command, rest).map(|key| Event::RequestSort(key.to_string())),
        "search" => Ok(Event::Search(rest.to_string())),
        "discipline" => Ok(Event::FilterDiscipline(rest.to_string())),
        "gender" => Ok(Event::FilterGender(rest.to_string())),
        "view" | "toggle" => Ok(Event::ToggleView),
        "show" | "details" => id(command, rest).map(Event::ShowDetails),
        "new" | "create" => Ok(Event::Create),
        "edit" => id(command, rest).map(Event::Edit),
        "delete" => id(command, rest).map(Event::Delete),
        "set" => {
            let (field, value) = argument(command, rest)?
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(field, value)| (field, value.trim()));
            Ok(Event::SetField {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
        "submit" | "save" => Ok(Event::Submit),
        "confirm" | "yes" => Ok(Event::ConfirmDelete),
        "close" | "cancel" => Ok(Event::CloseModal),
        "quit" | "exit" | "q" => Ok(Event::Quit),
        other => Err(TracksideError::invalid(format!("Unknown command '{other}'"))),
    }
}

fn argument<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(TracksideError::invalid(format!("'{command}' needs an argument")))
    } else {
        Ok(rest)
    }
}

fn id(command: &str, rest: &str) -> Result<i64> {
    argument(command, rest)?
        .parse()
        .map_err(|_| TracksideError::invalid(format!("'{command}' expects a numeric id, got '{rest}'")))
}
