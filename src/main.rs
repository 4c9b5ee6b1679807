use clap::Parser;
use log::info;
use std::io;

use mines_predictor::config::Config;
use mines_predictor::{console_loop, SessionStore};

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    info!("starting console transport (grid size {}, credential {})",
          config.grid_size, if config.token.is_some() { "set" } else { "unset" });

    let mut store: SessionStore<String> = SessionStore::new(usize::from(config.grid_size));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console_loop(&mut store, &config.user, stdin.lock(), &mut stdout)
}
