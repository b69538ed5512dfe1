//! Line commands understood by the shell.

/// One parsed input line. Row numbers are 1-based, as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Replace the new-todo input text.
    Type(String),
    /// Submit the input, optionally replacing it first.
    Add(Option<String>),
    Edit(usize),
    /// Replace the edit text of the record being edited.
    Text(String),
    Save,
    Cancel,
    Delete(usize),
    List,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; try `help`")]
    Unknown(String),
    #[error("`{command}` expects a row number, got `{arg}`")]
    BadRow { command: &'static str, arg: String },
}

pub const HELP: &str = "\
commands:
  type <text>    set the new todo text
  add [text]     add the new todo (optionally setting its text first)
  edit <n>       start editing row n
  text <text>    set the text of the todo being edited
  save           save the edit
  cancel         drop the edit
  delete <n>     delete row n
  list           show the list again
  reload         fetch the list again
  help           show this help
  quit           exit";

/// Blank lines parse as `List`.
pub fn parse(line: &str) -> Result<Input, CommandError> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim_end(), None),
    };

    let input = match word.to_ascii_lowercase().as_str() {
        "" | "list" | "ls" => Input::List,
        "type" => Input::Type(rest.unwrap_or_default().to_string()),
        "add" => Input::Add(rest.map(str::to_string)),
        "edit" => Input::Edit(row("edit", rest)?),
        "text" => Input::Text(rest.unwrap_or_default().to_string()),
        "save" => Input::Save,
        "cancel" => Input::Cancel,
        "delete" | "rm" => Input::Delete(row("delete", rest)?),
        "reload" => Input::Reload,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(input)
}

fn row(command: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.unwrap_or_default().trim();
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow {
            command,
            arg: arg.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_arguments_are_kept_as_typed() {
        assert_eq!(parse("type Buy milk").unwrap(), Input::Type("Buy milk".to_string()));
        assert_eq!(parse("text  B2 ").unwrap(), Input::Text(" B2 ".to_string()));
        assert_eq!(parse("add   ").unwrap(), Input::Add(Some("  ".to_string())));
        assert_eq!(parse("add").unwrap(), Input::Add(None));
        assert_eq!(parse("type").unwrap(), Input::Type(String::new()));
    }

    #[test]
    fn row_commands_need_positive_numbers() {
        assert_eq!(parse("edit 2").unwrap(), Input::Edit(2));
        assert_eq!(parse("DELETE 1").unwrap(), Input::Delete(1));
        assert_eq!(
            parse("delete 0").unwrap_err(),
            CommandError::BadRow {
                command: "delete",
                arg: "0".to_string()
            }
        );
        assert!(parse("edit").is_err());
        assert!(parse("edit two").is_err());
    }

    #[test]
    fn bare_words() {
        assert_eq!(parse("").unwrap(), Input::List);
        assert_eq!(parse("  save  ").unwrap(), Input::Save);
        assert_eq!(parse("cancel").unwrap(), Input::Cancel);
        assert_eq!(parse("reload").unwrap(), Input::Reload);
        assert_eq!(parse("q").unwrap(), Input::Quit);
        assert_eq!(parse("frobnicate 3").unwrap_err(), CommandError::Unknown("frobnicate".to_string()));
    }
}
