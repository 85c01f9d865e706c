//! Game Server Binary
//!
//! Serves register / status / move over HTTP.
//! Options: --bind, --timeout, --cities, --workers (see `--help`).

use citychain::*;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(config::Config::parse()).await
}
