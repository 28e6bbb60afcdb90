/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `add <title> | <description>`
    Add { title: String, description: String },
    /// `toggle <n>`
    Toggle(usize),
    /// `delete <n>` (or `rm <n>`)
    Delete(usize),
    /// `search [query]`; an empty query leaves search mode
    Search(String),
    List,
    Count,
    Help,
    Quit,
}

/// Error type for session input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
}

pub const HELP: &str = "\
commands:
  add <title> | <description>   append a task
  toggle <n>                    flip done/open for row n
  delete <n>                    remove row n
  search [query]                filter rows (empty query clears)
  list                          print the rows
  count                         print the count label
  help                          show this text
  quit                          leave the session";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, SessionError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => {
            let (title, description) = rest
                .split_once('|')
                .ok_or(SessionError::Usage("add <title> | <description>"))?;
            SessionCommand::Add {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
            }
        }
        "toggle" => SessionCommand::Toggle(parse_index(rest, "toggle <n>")?),
        "delete" | "rm" => SessionCommand::Delete(parse_index(rest, "delete <n>")?),
        "search" => SessionCommand::Search(rest.to_string()),
        "list" | "ls" => SessionCommand::List,
        "count" => SessionCommand::Count,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => return Err(SessionError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn parse_index(arg: &str, usage: &'static str) -> Result<usize, SessionError> {
    if arg.is_empty() {
        return Err(SessionError::Usage(usage));
    }
    arg.parse()
        .map_err(|_| SessionError::InvalidIndex(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(line: &str) -> SessionCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_add_splits_on_first_bar() {
        assert_eq!(
            parse("add Buy milk | 2% | fresh"),
            SessionCommand::Add {
                title: "Buy milk".into(),
                description: "2% | fresh".into(),
            }
        );
    }

    #[test]
    fn test_add_without_description() {
        assert_eq!(
            parse_line("add Buy milk"),
            Err(SessionError::Usage("add <title> | <description>"))
        );
    }

    #[test]
    fn test_add_keeps_empty_parts_for_the_store_to_reject() {
        assert_eq!(
            parse("add | 2%"),
            SessionCommand::Add {
                title: String::new(),
                description: "2%".into(),
            }
        );
    }

    #[test]
    fn test_indexed_commands() {
        assert_eq!(parse("toggle 3"), SessionCommand::Toggle(3));
        assert_eq!(parse("DELETE 0"), SessionCommand::Delete(0));
        assert_eq!(parse("rm 2"), SessionCommand::Delete(2));
        assert_eq!(
            parse_line("toggle -1"),
            Err(SessionError::InvalidIndex("-1".into()))
        );
        assert_eq!(parse_line("delete"), Err(SessionError::Usage("delete <n>")));
    }

    #[test]
    fn test_search_query() {
        assert_eq!(parse("search milk"), SessionCommand::Search("milk".into()));
        assert_eq!(
            parse("search take rex"),
            SessionCommand::Search("take rex".into())
        );
        assert_eq!(parse("search"), SessionCommand::Search(String::new()));
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(
            parse_line("frobnicate 1"),
            Err(SessionError::UnknownCommand("frobnicate".into()))
        );
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(parse("list"), SessionCommand::List);
        assert_eq!(parse("count"), SessionCommand::Count);
        assert_eq!(parse("?"), SessionCommand::Help);
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }
}
