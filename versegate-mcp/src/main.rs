use anyhow::Result;
use std::io::BufReader;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use versegate_core::history::{self, HistoryCache};
use versegate_core::{BibleGateway, Config, VerseLookup};

mod framing;
mod server;

use framing::Transport;
use server::{Request, Server};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERSEGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // stdout carries the protocol; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let config = Config::from_env();
    let path = config.history_path();
    let cache = history::load(&path, config.history_capacity).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring unreadable history");
        HistoryCache::new(config.history_capacity)
    });
    let source = BibleGateway::new(&config)?;
    let mut server = Server::new(VerseLookup::new(source, cache), Some(path));

    let stdin = std::io::stdin();
    let mut transport = Transport::new(BufReader::new(stdin.lock()), std::io::stdout());
    while let Some(msg) = transport.read()? {
        match serde_json::from_value::<Request>(msg) {
            Ok(req) => {
                let resp = server.handle(req);
                transport.write(&resp)?;
            }
            Err(_) => debug!("notification or malformed message ignored"),
        }
    }
    Ok(())
}
