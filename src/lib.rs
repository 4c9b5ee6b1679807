pub mod board;
pub mod config;
pub mod display;
pub mod error;
pub mod interaction;
pub mod predictor;
pub mod rng;
pub mod session;

use log::debug;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

pub use error::{FieldError, PredictorError};
pub use predictor::{predict, Prediction};
pub use session::SessionStore;

fn party_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^@(\w+)\s+(.*)$").expect("party regex"))
}

/// Split a console line into the sending party and the message text.
/// `@alice /bet` is sent by `alice`; anything else by `default_party`.
pub fn split_party<'a>(line: &'a str, default_party: &'a str) -> (&'a str, &'a str) {
    match party_regex().captures(line) {
        Some(cap) => match (cap.get(1), cap.get(2)) {
            (Some(party), Some(text)) => (party.as_str(), text.as_str()),
            _ => (default_party, line)
        },
        None => (default_party, line)
    }
}

/// Drive the form flow one line at a time until `input` runs dry.
pub fn console_loop<R: BufRead, W: Write>(store: &mut SessionStore<String>, default_party: &str,
                                          input: R, output: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let (party, text) = split_party(&line, default_party);
        debug!("message from {}", party);
        if let Some(reply) = store.handle(&party.to_owned(), text) {
            writeln!(output, "{}", reply)?;
            output.flush()?;
        }
    }
    Ok(())
}
