use crate::arena::Settings;
use crate::gazetteer::Gazetteer;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line and environment configuration for the server binary.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "server", about = "City-name word chain game server")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,
    /// Seconds a player has to submit a move.
    #[arg(long, env = "TURN_TIMEOUT", default_value_t = crate::TURN_TIMEOUT)]
    pub timeout: u64,
    /// Newline-separated word list replacing the built-in cities.
    #[arg(long, env = "CITIES")]
    pub cities: Option<PathBuf>,
    /// HTTP worker threads.
    #[arg(long, default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings::default().with_timeout(Duration::from_secs(self.timeout))
    }
    pub fn gazetteer(&self) -> anyhow::Result<Gazetteer> {
        match self.cities {
            Some(ref path) => Gazetteer::load(path),
            None => Ok(Gazetteer::default()),
        }
    }
}
