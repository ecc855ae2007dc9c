use catalog_core::{Category, Msg};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Open(String),
    Categories,
    Help,
    Refresh,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Refresh,
        "c" | "category" => Command::Dispatch(Msg::CategorySelected(Category::parse(rest))),
        "s" | "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "p" | "page" => match rest.parse::<u32>() {
            Ok(page) => Command::Dispatch(Msg::PageSelected(page)),
            Err(_) => Command::Invalid(format!("page expects a number, got {rest:?}")),
        },
        "n" | "next" => Command::Dispatch(Msg::NextPage),
        "b" | "prev" => Command::Dispatch(Msg::PrevPage),
        "o" | "open" => Command::Open(rest.to_string()),
        "categories" => Command::Categories,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command {other:?}")),
    }
}
