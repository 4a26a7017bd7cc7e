use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use swiss_tournament::api::{build_router, state::AppState};
use swiss_tournament::config::{AppConfig, DatabaseConfig};
use swiss_tournament::storage::SqliteStore;
use swiss_tournament::{PlayerId, Standing, Tournament};

#[derive(Parser)]
#[command(name = "swiss-tournament")]
#[command(about = "Swiss-system tournament standings and pairings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// SQLite database path (overrides config)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Pair unplayed opponents where possible (overrides config)
    #[arg(long)]
    avoid_rematches: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new player
    Register {
        /// Player's display name
        name: String,
    },

    /// Report a match result
    Report {
        /// Id of the player who won
        winner: i64,

        /// Id of the player who lost
        loser: i64,
    },

    /// Print current standings
    Standings,

    /// Print pairings for the next round
    Pairings,

    /// Print the number of registered players
    Count,

    /// Print every reported match
    Matches,

    /// Clear match results
    Reset {
        /// Also remove every registered player
        #[arg(long)]
        players: bool,
    },

    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn open_store(config: &DatabaseConfig) -> Result<SqliteStore> {
    let store = if config.is_in_memory() {
        SqliteStore::open_in_memory()
    } else {
        SqliteStore::open(&config.path)
    };
    store.with_context(|| format!("Failed to open database {:?}", config.path))
}

/// Log formatter writing to `writer`, plain or JSON. Stdout is kept for
/// command output, so `main` always hands in stderr.
fn log_layer<S, W>(json: bool, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    if json {
        tracing_subscriber::fmt::layer().json().with_writer(writer).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(writer).boxed()
    }
}

fn standings_table(standings: &[Standing]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>4}  {:>6}  {:<24} {:>4}  {:>6}  {:>7}",
        "Rank", "Id", "Name", "Wins", "Losses", "Matches"
    )];
    for (rank, s) in standings.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:>6}  {:<24} {:>4}  {:>6}  {:>7}",
            rank + 1,
            s.player_id,
            s.name,
            s.wins,
            s.losses(),
            s.matches_played
        ));
    }
    lines
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;
    if let Some(path) = cli.database {
        config.database.path = path;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if cli.avoid_rematches {
        config.pairing.avoid_rematches = true;
    }
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(log_layer(cli.json_logs, std::io::stderr))
        .init();

    tracing::debug!("Starting swiss-tournament v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config.database)?;
    let mut tournament = Tournament::new(store).with_policy(config.pairing.policy());

    match cli.command {
        Commands::Register { name } => {
            let player = tournament.register_player(&name)?;
            println!("Registered player {} ({})", player.id, player.name);
        }
        Commands::Report { winner, loser } => {
            let id = tournament.report_match(PlayerId::new(winner), PlayerId::new(loser))?;
            println!("Recorded match {}: {} beat {}", id, winner, loser);
        }
        Commands::Standings => {
            for line in standings_table(&tournament.standings()?) {
                println!("{}", line);
            }
        }
        Commands::Pairings => {
            let pairings = tournament.pairings()?;
            for (board, p) in pairings.iter().enumerate() {
                println!(
                    "Board {:>3}:  [{}] {}  vs  [{}] {}",
                    board + 1,
                    p.player_a_id,
                    p.player_a_name,
                    p.player_b_id,
                    p.player_b_name
                );
            }
        }
        Commands::Count => {
            println!("{}", tournament.count_players()?);
        }
        Commands::Matches => {
            for m in tournament.matches()? {
                println!(
                    "#{:<5} {}  winner {}  loser {}",
                    m.id,
                    m.recorded_at.format("%Y-%m-%d %H:%M:%S"),
                    m.winner,
                    m.loser
                );
            }
        }
        Commands::Reset { players } => {
            if players {
                tournament.reset_players()?;
                println!("Removed all players and matches");
            } else {
                tournament.reset_matches()?;
                println!("Removed all matches");
            }
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let app = build_router(AppState::new(tournament), &config.server.cors_origin);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
