use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ListCommand {
    Append(i32),
    Prepend(i32),
    DeleteFirst,
    DeleteLast,
    RemoveNthFromEnd(usize),
    Print,
    Head,
    Tail,
    Length,
    Help,
    Quit,
}

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(name) => write!(f, "unknown command \"{}\" (try \"help\")", name),
            CommandError::MissingArgument(command) => {
                write!(f, "missing the argument of {}", command)
            }
            CommandError::InvalidNumber(token) => write!(f, "\"{}\" is not a valid number", token),
        }
    }
}

impl std::error::Error for CommandError {}

pub const HELP: &str = "\
append|a <value>       add a value after the tail
prepend|p <value>      add a value before the head
delete-first|df        remove the head
delete-last|dl         remove the tail
remove-nth|rn <n>      remove the n-th value counting from the tail
print|ls               print every value, one per line
head|h                 show the head
tail|t                 show the tail
length|len             show the length
quit|q                 leave the shell";

impl ListCommand {
    pub fn from_tokens(tokens: &[&str]) -> Result<ListCommand, CommandError> {
        let name = match tokens.first() {
            Some(name) => *name,
            None => return Err(CommandError::Unknown(String::new())),
        };
        match name {
            "a" | "append" => Ok(ListCommand::Append(parse_arg(tokens, "append")?)),
            "p" | "prepend" => Ok(ListCommand::Prepend(parse_arg(tokens, "prepend")?)),
            "df" | "delete-first" => Ok(ListCommand::DeleteFirst),
            "dl" | "delete-last" => Ok(ListCommand::DeleteLast),
            "rn" | "remove-nth" => Ok(ListCommand::RemoveNthFromEnd(parse_arg(
                tokens,
                "remove-nth",
            )?)),
            "ls" | "print" => Ok(ListCommand::Print),
            "h" | "head" => Ok(ListCommand::Head),
            "t" | "tail" => Ok(ListCommand::Tail),
            "len" | "length" => Ok(ListCommand::Length),
            "help" => Ok(ListCommand::Help),
            "q" | "quit" => Ok(ListCommand::Quit),
            // Default case:
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

fn parse_arg<N: std::str::FromStr>(
    tokens: &[&str],
    command: &'static str,
) -> Result<N, CommandError> {
    let token = tokens
        .get(1)
        .ok_or(CommandError::MissingArgument(command))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ListCommand, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        ListCommand::from_tokens(&tokens)
    }

    #[test]
    fn parses_value_commands() {
        assert!(matches!(parse("append 10"), Ok(ListCommand::Append(10))));
        assert!(matches!(parse("p -3"), Ok(ListCommand::Prepend(-3))));
        assert!(matches!(parse("rn 2"), Ok(ListCommand::RemoveNthFromEnd(2))));
    }

    #[test]
    fn parses_aliases() {
        assert!(matches!(parse("df"), Ok(ListCommand::DeleteFirst)));
        assert!(matches!(parse("delete-last"), Ok(ListCommand::DeleteLast)));
        assert!(matches!(parse("ls"), Ok(ListCommand::Print)));
        assert!(matches!(parse("len"), Ok(ListCommand::Length)));
        assert!(matches!(parse("q"), Ok(ListCommand::Quit)));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(parse("append").err(), Some(CommandError::MissingArgument("append")));
        assert_eq!(
            parse("rn -1").err(),
            Some(CommandError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            parse("pop").err(),
            Some(CommandError::Unknown("pop".to_string()))
        );
    }
}
