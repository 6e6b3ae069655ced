/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Open the article with this 1-based list number.
    Open(usize),
    Refresh,
    ShowSettings,
    SetOrderBy(String),
    SetPageSize(String),
    Help,
    Quit,
}

pub(crate) fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if let Ok(number) = word.parse::<usize>() {
        return if rest.is_empty() {
            open(number)
        } else {
            Err(format!("unexpected text after {number}"))
        };
    }

    match word.to_ascii_lowercase().as_str() {
        "open" | "o" => rest
            .parse::<usize>()
            .map_err(|_| "usage: open <number>".to_string())
            .and_then(open),
        "refresh" | "r" => Ok(Command::Refresh),
        "settings" | "s" => Ok(Command::ShowSettings),
        // Values are forwarded as typed, empty included.
        "order" => Ok(Command::SetOrderBy(rest.to_string())),
        "size" => Ok(Command::SetPageSize(rest.to_string())),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "" => Err("type `help` for commands".to_string()),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn open(number: usize) -> Result<Command, String> {
    if number == 0 {
        Err("articles are numbered from 1".to_string())
    } else {
        Ok(Command::Open(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_opens_article() {
        assert_eq!(parse_command("3"), Ok(Command::Open(3)));
        assert_eq!(parse_command("  open 12 "), Ok(Command::Open(12)));
        assert!(parse_command("0").is_err());
        assert!(parse_command("open x").is_err());
        assert!(parse_command("3 4").is_err());
    }

    #[test]
    fn settings_commands_keep_value_verbatim() {
        assert_eq!(
            parse_command("order relevance"),
            Ok(Command::SetOrderBy("relevance".to_string()))
        );
        assert_eq!(
            parse_command("size 25"),
            Ok(Command::SetPageSize("25".to_string()))
        );
        assert_eq!(
            parse_command("size lots of them"),
            Ok(Command::SetPageSize("lots of them".to_string()))
        );
    }

    #[test]
    fn short_aliases() {
        assert_eq!(parse_command("r"), Ok(Command::Refresh));
        assert_eq!(parse_command("S"), Ok(Command::ShowSettings));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn unknown_and_blank_lines_are_errors() {
        assert!(parse_command("dance").is_err());
        assert!(parse_command("   ").is_err());
    }
}
