use clap::Parser;
use std::fmt;

pub const DEFAULT_GRID_SIZE: u16 = 5;
pub const MAX_GRID_SIZE: i64 = 64;

#[derive(Parser, Clone)]
#[command(name = "mines-predictor", version, about = "Seeded safe-spot predictions for a 5x5 mines board")]
pub struct Config {
    /// Access credential reserved for a chat transport; this crate ships only
    /// the console transport, which never reads it.
    #[arg(long, env = "MINES_BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "MINES_GRID_SIZE", default_value_t = DEFAULT_GRID_SIZE,
          value_parser = clap::value_parser!(u16).range(1..=MAX_GRID_SIZE))]
    pub grid_size: u16,

    /// Party name for console lines that do not start with `@name`.
    #[arg(long, env = "MINES_USER", default_value = "console")]
    pub user: String,
}

// keeps the token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("grid_size", &self.grid_size)
            .field("user", &self.user)
            .finish()
    }
}
