//! Parsing of terminal command lines.

use crate::domain::{ContactId, Field};
use crate::error::CommandError;

/// One user action read from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; re-render nothing
    Empty,
    List,
    /// Set the search query (an empty query clears it)
    Search(String),
    ClearSearch,
    Show(ContactId),
    Add,
    Edit(ContactId),
    /// Set a field on the open form
    Set(Field, String),
    Save,
    Cancel,
    Delete(ContactId),
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// The first word is the command; for `search` and `set` the rest of
    /// the line (minus leading whitespace) is taken verbatim as the value.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(|c: char| c == '\r' || c == '\n').trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "list" | "ls" => Self::List,
            "search" | "find" => Self::Search(rest.to_string()),
            "clear" => Self::ClearSearch,
            "show" => Self::Show(parse_id("show", rest)?),
            "add" | "new" => Self::Add,
            "edit" => Self::Edit(parse_id("edit", rest)?),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        expected: "<field> <value>",
                    });
                }
                Self::Set(field.parse()?, value.trim_end().to_string())
            }
            "save" | "submit" => Self::Save,
            "cancel" | "close" => Self::Cancel,
            "delete" | "rm" => Self::Delete(parse_id("delete", rest)?),
            "export" => Self::Export,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn parse_id(command: &'static str, arg: &str) -> Result<ContactId, CommandError> {
    let arg = arg.trim().trim_start_matches('#');
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "<id>",
        });
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  list                  Show contacts matching the current search
  search <text>         Filter by name, email or company
  clear                 Clear the search
  show <id>             Show one contact
  add                   Open the form for a new contact
  edit <id>             Open the form for an existing contact
  set <field> <value>   Set name, email, phone or company on the open form
  save                  Validate and save the open form
  cancel                Close the form without saving
  delete <id>           Delete a contact (asks for confirmation)
  export                Print all contacts as JSON
  help                  Show this help
  quit                  Exit";
