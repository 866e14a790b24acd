//! Line protocol for driving the tour page, the headless stand-in for
//! clicking around the rendered demo.

use std::str::FromStr;

use tether_widgets::LikeAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhichCounter {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterOp {
    Increment,
    Decrement,
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Counter(WhichCounter, CounterOp),
    Likes(LikeAction),
    StoreIncrement,
    DeriveSet(String),
    SearchType(String),
    FieldFocus,
    FieldBlur,
    FieldSet(String),
    NameSet(String),
    EmailSet(String),
    Settle,
    Show,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'show')")]
    Unknown(String),
    #[error("'{0}' takes no argument")]
    UnexpectedArg(&'static str),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default();
        let rest = || {
            let r: Vec<&str> = line.split_whitespace().skip(2).collect();
            r.join(" ")
        };

        match head {
            "counter" => {
                let which = match words.next() {
                    Some("a") => WhichCounter::A,
                    Some("b") => WhichCounter::B,
                    _ => return Err(ParseError::Usage("counter <a|b> <inc|dec|reset>")),
                };
                let op = match words.next() {
                    Some("inc") => CounterOp::Increment,
                    Some("dec") => CounterOp::Decrement,
                    Some("reset") => CounterOp::Reset,
                    _ => return Err(ParseError::Usage("counter <a|b> <inc|dec|reset>")),
                };
                Ok(Command::Counter(which, op))
            }
            "likes" => match words.next() {
                Some("like") => Ok(Command::Likes(LikeAction::Like)),
                Some("dislike") => Ok(Command::Likes(LikeAction::Dislike)),
                Some("reset") => Ok(Command::Likes(LikeAction::Reset)),
                _ => Err(ParseError::Usage("likes <like|dislike|reset>")),
            },
            "store" => match words.next() {
                Some("inc") => Ok(Command::StoreIncrement),
                _ => Err(ParseError::Usage("store inc")),
            },
            "derive" => match words.next() {
                Some("set") => Ok(Command::DeriveSet(rest())),
                _ => Err(ParseError::Usage("derive set <text>")),
            },
            "search" => match words.next() {
                Some("type") => Ok(Command::SearchType(rest())),
                _ => Err(ParseError::Usage("search type <text>")),
            },
            "field" => match words.next() {
                Some("focus") => Ok(Command::FieldFocus),
                Some("blur") => Ok(Command::FieldBlur),
                Some("set") => Ok(Command::FieldSet(rest())),
                _ => Err(ParseError::Usage("field <focus|blur|set <text>>")),
            },
            "name" => match words.next() {
                Some("set") => Ok(Command::NameSet(rest())),
                _ => Err(ParseError::Usage("name set <text>")),
            },
            "email" => match words.next() {
                Some("set") => Ok(Command::EmailSet(rest())),
                _ => Err(ParseError::Usage("email set <text>")),
            },
            "settle" => match words.next() {
                None => Ok(Command::Settle),
                Some(_) => Err(ParseError::UnexpectedArg("settle")),
            },
            "show" => match words.next() {
                None => Ok(Command::Show),
                Some(_) => Err(ParseError::UnexpectedArg("show")),
            },
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}
