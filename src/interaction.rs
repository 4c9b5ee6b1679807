use regex::Regex;
use std::num::IntErrorKind;
use std::sync::OnceLock;

use super::error::FieldError;

pub const MIN_BOMBS: i64 = 1;
pub const MAX_BOMBS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Bet,
    Cancel,
    Unknown(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Command(Command),
    Text(String)
}

fn command_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/([A-Za-z0-9_]+)(@\w+)?(\s|$)").expect("command regex"))
}

impl Message {
    /// Anything starting with a slash is a command; only the command word is
    /// looked at, so `/bet@some_bot extra` is still `/bet`.
    pub fn parse(input: &str) -> Message {
        let trimmed = input.trim_start();
        if !trimmed.starts_with('/') {
            return Message::Text(input.to_owned())
        }
        let command = match command_regex().captures(trimmed) {
            None => Command::Unknown(trimmed.to_owned()),
            Some(cap) => Message::command_from_name(&cap[1])
        };
        Message::Command(command)
    }

    fn command_from_name(name: &str) -> Command {
        match name.to_lowercase().as_str() {
            "start" => Command::Start,
            "bet" => Command::Bet,
            "cancel" => Command::Cancel,
            other => Command::Unknown(other.to_owned())
        }
    }
}

pub fn parse_bombs(input: &str) -> Result<usize, FieldError> {
    // integers too wide for i64 are still integers, just out of range
    let bombs: i64 = input.trim().parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => FieldError::BombsOutOfRange,
        _ => FieldError::BombsNotANumber
    })?;
    if bombs < MIN_BOMBS || bombs > MAX_BOMBS {
        return Err(FieldError::BombsOutOfRange)
    }
    Ok(bombs as usize)
}

pub fn parse_client_seed(input: &str) -> Result<String, FieldError> {
    non_empty(input).ok_or(FieldError::EmptyClientSeed)
}

pub fn parse_server_seed(input: &str) -> Result<String, FieldError> {
    non_empty(input).ok_or(FieldError::EmptyServerSeed)
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

pub fn parse_bet(input: &str) -> Result<f64, FieldError> {
    let bet: f64 = input.trim().parse().map_err(|_| FieldError::BetNotANumber)?;
    if !bet.is_finite() {
        return Err(FieldError::BetNotANumber)
    }
    if bet <= 0.0 {
        return Err(FieldError::BetNotPositive)
    }
    Ok(bet)
}

#[cfg(test)]
use proptest::prelude::*;

#[cfg(test)]
mod interaction_tests {
    use super::*;

    #[test]
    fn recognises_commands() {
        assert_eq!(Message::parse("/start"), Message::Command(Command::Start));
        assert_eq!(Message::parse("/bet"), Message::Command(Command::Bet));
        assert_eq!(Message::parse("/Cancel now"), Message::Command(Command::Cancel));
        assert_eq!(Message::parse("/bet@mines_bot"), Message::Command(Command::Bet));
        assert_eq!(Message::parse("/help"), Message::Command(Command::Unknown("help".to_owned())));
        assert_eq!(Message::parse("/"), Message::Command(Command::Unknown("/".to_owned())));
    }

    #[test]
    fn plain_text_is_text() {
        assert_eq!(Message::parse("hello /bet"), Message::Text("hello /bet".to_owned()));
        assert_eq!(Message::parse("  12 "), Message::Text("  12 ".to_owned()));
    }

    #[test]
    fn bomb_bounds() {
        assert_eq!(parse_bombs("1"), Ok(1));
        assert_eq!(parse_bombs(" 24 "), Ok(24));
        assert_eq!(parse_bombs("0"), Err(FieldError::BombsOutOfRange));
        assert_eq!(parse_bombs("30"), Err(FieldError::BombsOutOfRange));
        assert_eq!(parse_bombs("-3"), Err(FieldError::BombsOutOfRange));
        assert_eq!(parse_bombs("three"), Err(FieldError::BombsNotANumber));
        assert_eq!(parse_bombs("2.5"), Err(FieldError::BombsNotANumber));
        assert_eq!(parse_bombs("99999999999999999999"), Err(FieldError::BombsOutOfRange));
        assert_eq!(parse_bombs("-99999999999999999999"), Err(FieldError::BombsOutOfRange));
        assert_eq!(parse_bombs("9999999999999999999x"), Err(FieldError::BombsNotANumber));
    }

    #[test]
    fn seeds_are_trimmed() {
        assert_eq!(parse_client_seed("  abc "), Ok("abc".to_owned()));
        assert_eq!(parse_client_seed(" \t"), Err(FieldError::EmptyClientSeed));
        assert_eq!(parse_server_seed(""), Err(FieldError::EmptyServerSeed));
    }

    #[test]
    fn bet_validation() {
        assert_eq!(parse_bet("10"), Ok(10.0));
        assert_eq!(parse_bet(" 0.5"), Ok(0.5));
        assert_eq!(parse_bet("0"), Err(FieldError::BetNotPositive));
        assert_eq!(parse_bet("-1"), Err(FieldError::BetNotPositive));
        assert_eq!(parse_bet("ten"), Err(FieldError::BetNotANumber));
        assert_eq!(parse_bet("NaN"), Err(FieldError::BetNotANumber));
        assert_eq!(parse_bet("inf"), Err(FieldError::BetNotANumber));
    }

    proptest! {
        #[test]
        fn in_range_bombs_parse(bombs in 1..=24usize) {
            prop_assert_eq!(parse_bombs(&bombs.to_string()), Ok(bombs));
        }

        #[test]
        fn text_without_slash_is_never_a_command(text in "[^/][^\n]{0,20}") {
            prop_assume!(!text.trim_start().starts_with('/'));
            prop_assert_eq!(Message::parse(&text), Message::Text(text.clone()));
        }
    }
}
