use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use versegate_core::Config;

mod cmd;
mod session;

use cmd::{
    history as cmd_history, lookup as cmd_lookup, resolve as cmd_resolve, versions as cmd_versions,
};
use session::Session;

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\nBuilt: ",
        env!("BUILD_DATE"),
        "\nCommit: ",
        env!("GIT_HASH")
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "versegate",
    about = "Show parallel Bible translations for a scripture reference",
    version,
    long_version = long_version()
)]
struct Cli {
    /// History capacity (fallback: $VERSEGATE_HISTORY_CAPACITY or 25)
    #[arg(long, global = true)]
    capacity: Option<usize>,
    /// Keep history in memory for this run only
    #[arg(long, global = true, default_value_t = false)]
    no_history: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a reference and show every translation of that verse
    Lookup {
        /// Reference as typed, e.g. "jn 3:16"
        query: String,
        /// Use the query as-is instead of resolving it
        #[arg(long, default_value_t = false)]
        exact: bool,
        /// Output JSON envelope
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Find the scripture reference in a line of text
    Resolve {
        /// Text to search
        text: String,
        /// Caret position (chars); picks the reference under it
        #[arg(long)]
        caret: Option<usize>,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List previous lookups, most recent first
    History {
        /// Max entries to show
        #[arg(long)]
        limit: Option<usize>,
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Forget all previous lookups
    HistoryClear {},
    /// List known translation codes
    Versions {
        /// Output JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show configuration and history status
    Doctor {},
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERSEGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(cap) = cli.capacity {
        config.history_capacity = cap.max(1);
    }
    let persist = !cli.no_history;
    match cli.command {
        Commands::Lookup { query, exact, json } => {
            let mut session = Session::open(config, persist)?;
            cmd_lookup::lookup(&mut session, &query, exact, json)?;
        }
        Commands::Resolve { text, caret, json } => {
            cmd_resolve::resolve(&text, caret, json)?;
        }
        Commands::History { limit, json } => {
            let session = Session::open(config, persist)?;
            cmd_history::list(&session, limit, json)?;
        }
        Commands::HistoryClear {} => {
            let mut session = Session::open(config, persist)?;
            cmd_history::clear(&mut session)?;
        }
        Commands::Versions { json } => {
            cmd_versions::versions(json)?;
        }
        Commands::Doctor {} => {
            let session = Session::open(config, persist)?;
            session.doctor();
        }
    }
    Ok(())
}
