//! City-name word chain game server.
//!
//! Players register, wait in a lobby, and are grouped into sessions of three
//! to five. Each session runs its own turn loop: the active player names a
//! city that starts with the chaining letter of the previous one. Unknown
//! cities, repeats, wrong letters and silence all eliminate the player, and
//! the last one standing wins.
//!
//! ## Modules
//!
//! - [`gazetteer`]: Valid words and the chaining-letter rule
//! - [`lobby`]: Waiting queue and matchmaking policy
//! - [`session`]: Turn engine, move mailbox and turn announcements
//! - [`registry`]: Registered players and their session assignment
//! - [`arena`]: Entry point for register / status / move operations
//! - `hosting`: HTTP transport (feature `server`)
pub mod arena;
pub mod gazetteer;
pub mod lobby;
pub mod registry;
pub mod session;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Registered player identifier, monotonically assigned from 1.
pub type PlayerId = u64;
/// Game session identifier, monotonically assigned from 1.
pub type SessionId = u64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Fewest waiting players that form a session.
pub const MIN_PLAYERS: usize = 3;
/// Most players drawn from the lobby into one session.
pub const MAX_PLAYERS: usize = 5;
/// Seconds the active player has to submit a move.
pub const TURN_TIMEOUT: u64 = 30;
/// Terminal character skipped when deriving the chaining letter.
pub const SOFT_TERMINAL: char = 'ь';

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Sessions are ephemeral, so there is nothing to flush on the way out.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
