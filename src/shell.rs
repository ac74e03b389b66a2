use crate::linked_list::LinkedList;
use crate::list_command::{ListCommand, HELP};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use std::io::{self, Write};
use std::path::PathBuf;

pub const EMPTY_REPORT: &str = "There's no value in the list";

/// Whether the caller should keep feeding commands after `execute`.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies `command` to `list` and writes its console report to `out`.
pub fn execute<W: Write>(
    list: &mut LinkedList<i32>,
    command: &ListCommand,
    out: &mut W,
) -> io::Result<Flow> {
    match command {
        ListCommand::Append(value) => list.append(*value),
        ListCommand::Prepend(value) => list.prepend(*value),
        ListCommand::DeleteFirst => {
            list.delete_first();
        }
        ListCommand::DeleteLast => {
            list.delete_last();
        }
        ListCommand::RemoveNthFromEnd(n) => {
            if list.remove_nth_from_end(*n).is_none() {
                writeln!(out, "No node {} from the end (length: {})", n, list.len())?;
            }
        }
        ListCommand::Print => write!(out, "{}", list)?,
        ListCommand::Head => match list.head() {
            Some(value) => writeln!(out, "Head: {}", value)?,
            None => writeln!(out, "{}", EMPTY_REPORT)?,
        },
        ListCommand::Tail => match list.tail() {
            Some(value) => writeln!(out, "Tail: {}", value)?,
            None => writeln!(out, "{}", EMPTY_REPORT)?,
        },
        ListCommand::Length => writeln!(out, "length: {}", list.len())?,
        ListCommand::Help => writeln!(out, "{}", HELP)?,
        ListCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// The walkthrough run when the binary is started without `--interactive`.
pub fn scenario() -> Vec<ListCommand> {
    vec![
        ListCommand::Append(10),
        ListCommand::Append(15),
        ListCommand::Print,
        ListCommand::DeleteLast,
        ListCommand::Print,
        ListCommand::Head,
        ListCommand::Tail,
        ListCommand::Length,
        ListCommand::DeleteLast,
        ListCommand::Print,
        ListCommand::Prepend(20),
        ListCommand::Prepend(22),
        ListCommand::Prepend(25),
        ListCommand::Print,
        ListCommand::DeleteFirst,
        ListCommand::Print,
    ]
}

pub fn run_scenario<W: Write>(seed: i32, out: &mut W) -> io::Result<()> {
    let mut list = LinkedList::new(seed);
    for command in scenario() {
        log::debug!("scenario step: {:?}", command);
        execute(&mut list, &command, out)?;
    }
    Ok(())
}

pub struct Shell {
    readline: Editor<()>,
    history_path: Option<PathBuf>,
    list: LinkedList<i32>,
}

impl Shell {
    pub fn new(seed: i32, history_path: Option<PathBuf>) -> Shell {
        let mut readline = Editor::<()>::new();
        if let Some(path) = &history_path {
            // A missing history file is normal on first start
            if let Err(err) = readline.load_history(path) {
                log::debug!("no history loaded from {}: {}", path.display(), err);
            }
        }
        Shell {
            readline,
            history_path,
            list: LinkedList::new(seed),
        }
    }

    pub fn run(&mut self) {
        log::info!("list seeded with {:?}, type \"help\" for commands", self.list.head());
        let stdout = io::stdout();
        loop {
            let command = match self.get_next_command() {
                Some(command) => command,
                None => return,
            };
            match execute(&mut self.list, &command, &mut stdout.lock()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return,
                Err(err) => {
                    log::error!("failed to write to stdout: {}", err);
                    return;
                }
            }
        }
    }

    fn get_next_command(&mut self) -> Option<ListCommand> {
        loop {
            match self.readline.readline("(list) ") {
                Err(ReadlineError::Interrupted) => {
                    println!("Type \"quit\" to exit");
                }
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    log::error!("Unexpected I/O error: {:?}", err);
                    return None;
                }
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.readline.add_history_entry(line.as_str());
                    if let Some(path) = &self.history_path {
                        if let Err(err) = self.readline.save_history(path) {
                            log::warn!("failed to save history file at {}: {}", path.display(), err);
                        }
                    }
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    match ListCommand::from_tokens(&tokens) {
                        Ok(command) => return Some(command),
                        Err(err) => {
                            log::warn!("rejected input {:?}", line);
                            println!("{}", err);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(list: &mut LinkedList<i32>, command: ListCommand) -> String {
        let mut out = Vec::new();
        execute(list, &command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_on_empty_list() {
        let mut list = LinkedList::new(1);
        run(&mut list, ListCommand::DeleteFirst);
        assert_eq!(run(&mut list, ListCommand::Head), "There's no value in the list\n");
        assert_eq!(run(&mut list, ListCommand::Tail), "There's no value in the list\n");
        assert_eq!(run(&mut list, ListCommand::Length), "length: 0\n");
        assert_eq!(run(&mut list, ListCommand::Print), "");
    }

    #[test]
    fn remove_nth_out_of_range_is_reported() {
        let mut list = LinkedList::new(1);
        assert_eq!(
            run(&mut list, ListCommand::RemoveNthFromEnd(4)),
            "No node 4 from the end (length: 1)\n"
        );
        assert_eq!(run(&mut list, ListCommand::RemoveNthFromEnd(1)), "");
        assert!(list.is_empty());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut list = LinkedList::new(1);
        let mut out = Vec::new();
        assert_eq!(execute(&mut list, &ListCommand::Quit, &mut out).unwrap(), Flow::Quit);
        assert_eq!(
            execute(&mut list, &ListCommand::Length, &mut out).unwrap(),
            Flow::Continue
        );
    }

    #[test]
    fn scenario_output_matches_walkthrough() {
        let mut out = Vec::new();
        run_scenario(5, &mut out).unwrap();
        let expected = "\
5
10
15
5
10
Head: 5
Tail: 10
length: 2
5
25
22
20
5
22
20
5
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
