use std::path::PathBuf;

use clap::Parser;
use lookback_arena::{write_report, write_tables, ReportFormat, Tournament, TournamentConfig};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of generated bias players
    #[arg(long)]
    players: Option<usize>,
    /// Rounds of history each table conditions on
    #[arg(long)]
    lookback: Option<usize>,
    /// Rounds per pairing
    #[arg(long)]
    rounds: Option<usize>,
    /// Seed for random and bias tables
    #[arg(long)]
    seed: Option<u64>,
    /// Leave out the classic strategies
    #[arg(long)]
    no_classics: bool,
    /// Standings output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Print every entrant's table to stderr before playing
    #[arg(long)]
    dump_tables: bool,
}

impl Args {
    fn tournament_config(&self) -> anyhow::Result<TournamentConfig> {
        let mut config = match &self.config {
            Some(path) => TournamentConfig::load(path)?,
            None => TournamentConfig::default(),
        };
        if let Some(players) = self.players {
            config.players = players;
        }
        if let Some(lookback) = self.lookback {
            config.lookback = lookback;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.no_classics {
            config.include_classics = false;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = args.tournament_config()?;
    log::info!(
        "lookback {}, {} rounds per pairing, seed {}",
        config.lookback,
        config.rounds,
        config.seed
    );

    let players = config.build_players()?;
    if args.dump_tables {
        write_tables(&mut std::io::stderr().lock(), &players)?;
    }

    let outcome = Tournament::new(players, config.rounds).run();
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &outcome.standings(), args.format)
}
