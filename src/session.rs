use log::{error, info};
use std::collections::HashMap;
use std::hash::Hash;

use super::display::display_prediction;
use super::error::FieldError;
use super::interaction::{self, Command, Message};
use super::predictor::predict;
use super::rng::combined_seed;

pub const GREETING: &str = "Welcome to the Minesweeper Bot! Type /bet to start the process.";
pub const BOMBS_PROMPT: &str = "Please enter the number of bombs (1-24):";
pub const CLIENT_SEED_PROMPT: &str = "Bomb count set.\nNow, enter your Active Client Seed:";
pub const SERVER_SEED_PROMPT: &str = "Active Client Seed set.\nNow, enter your Active Server Seed:";
pub const BET_PROMPT: &str = "Active Server Seed set.\nNow, enter your bet amount:";
pub const CANCELLED: &str = "Operation cancelled.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    AwaitBombs,
    AwaitClientSeed,
    AwaitServerSeed,
    AwaitBet,
    Done
}

/// Fields collected so far for one conversing party.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub state: FormState,
    pub bombs_count: Option<usize>,
    pub client_seed: Option<String>,
    pub server_seed: Option<String>,
    pub combined_seed: Option<String>,
    pub bet_amount: Option<f64>,
}

impl Session {
    fn new() -> Session {
        Session{
            state: FormState::AwaitBombs,
            bombs_count: None,
            client_seed: None,
            server_seed: None,
            combined_seed: None,
            bet_amount: None,
        }
    }

    /// Feed one free-text answer. A rejected field leaves the state alone
    /// and hands back the re-prompt.
    fn accept(&mut self, text: &str, grid_size: usize) -> Result<String, FieldError> {
        match self.state {
            FormState::AwaitBombs => {
                self.bombs_count = Some(interaction::parse_bombs(text)?);
                self.state = FormState::AwaitClientSeed;
                Ok(CLIENT_SEED_PROMPT.to_owned())
            }
            FormState::AwaitClientSeed => {
                self.client_seed = Some(interaction::parse_client_seed(text)?);
                self.state = FormState::AwaitServerSeed;
                Ok(SERVER_SEED_PROMPT.to_owned())
            }
            FormState::AwaitServerSeed => {
                let server_seed = interaction::parse_server_seed(text)?;
                let client_seed = self.client_seed.as_deref().unwrap_or_default();
                self.combined_seed = Some(combined_seed(client_seed, &server_seed));
                self.server_seed = Some(server_seed);
                self.state = FormState::AwaitBet;
                Ok(BET_PROMPT.to_owned())
            }
            FormState::AwaitBet => {
                let bet_amount = interaction::parse_bet(text)?;
                self.bet_amount = Some(bet_amount);
                self.state = FormState::Done;
                Ok(self.finish(grid_size, bet_amount))
            }
            FormState::Done => Ok(String::new())
        }
    }

    fn finish(&self, grid_size: usize, bet_amount: f64) -> String {
        let bombs_count = self.bombs_count.unwrap_or_default();
        let seed = self.combined_seed.as_deref().unwrap_or_default();
        match predict(grid_size, bombs_count, seed) {
            Ok(prediction) => display_prediction(&prediction.spots, bet_amount),
            Err(e) => {
                error!("prediction failed: {}", e);
                format!("Could not generate a prediction: {}", e)
            }
        }
    }
}

/// Per-party form state. Sessions are created by the entry command and
/// removed once they finish or are cancelled. A form abandoned halfway stays
/// until the same party sends `/bet` or `/cancel`; long-running hosts should
/// call `evict` for parties they know are gone.
pub struct SessionStore<K: Hash + Eq> {
    sessions: HashMap<K, Session>,
    grid_size: usize,
}

impl<K: Hash + Eq + Clone> SessionStore<K> {
    pub fn new(grid_size: usize) -> SessionStore<K> {
        SessionStore{sessions: HashMap::new(), grid_size}
    }

    pub fn get(&self, key: &K) -> Option<&Session> {
        self.sessions.get(key)
    }

    pub fn state(&self, key: &K) -> FormState {
        self.sessions.get(key).map_or(FormState::Done, |session| session.state)
    }

    /// Drop a party's unfinished form without replying.
    pub fn evict(&mut self, key: &K) -> bool {
        self.sessions.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Route one raw message from `key`. Returns the reply, if any.
    pub fn handle(&mut self, key: &K, input: &str) -> Option<String> {
        match Message::parse(input) {
            Message::Command(command) => self.handle_command(key, command),
            Message::Text(text) => self.handle_text(key, &text)
        }
    }

    fn handle_command(&mut self, key: &K, command: Command) -> Option<String> {
        match command {
            Command::Start => Some(GREETING.to_owned()),
            Command::Bet => {
                if self.sessions.insert(key.clone(), Session::new()).is_some() {
                    info!("restarting form");
                } else {
                    info!("starting form ({} active)", self.sessions.len());
                }
                Some(BOMBS_PROMPT.to_owned())
            }
            Command::Cancel => {
                let session = self.sessions.remove(key)?;
                info!("form cancelled at {:?}", session.state);
                Some(CANCELLED.to_owned())
            }
            Command::Unknown(_) => None
        }
    }

    fn handle_text(&mut self, key: &K, text: &str) -> Option<String> {
        let grid_size = self.grid_size;
        let session = self.sessions.get_mut(key)?;
        let reply = match session.accept(text, grid_size) {
            Ok(reply) => reply,
            Err(field_error) => field_error.to_string()
        };
        if session.state == FormState::Done {
            self.sessions.remove(key);
            info!("form completed ({} active)", self.sessions.len());
        }
        Some(reply)
    }
}
