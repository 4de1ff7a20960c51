use std::{fs::File, path::PathBuf};

use clap::{Parser, Subcommand};
use freqtrie::snapshot;
use tracing::{debug, Level};

mod complete;
mod dump;
mod seed;
mod stats;

use complete::{execute_complete, CompleteArgs};
use dump::{execute_dump, DumpArgs};
use stats::{execute_stats, StatsArgs};

/// Frequency-ranked autocomplete over a character trie.
///
/// Without a subcommand, seeds the sample words and completes "py".
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the most frequent words starting with a prefix.
    Complete(CompleteArgs),
    /// Print the trie structure as JSON.
    Dump(DumpArgs),
    /// Print existence and frequency lookups for each term.
    Stats(StatsArgs),
}

const DEMO_PREFIX: &str = "py";
const DEMO_MAX_SUGGESTIONS: usize = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(file)
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init(),
    }

    debug!("Command: {:?}", cli.command);

    match cli.command {
        Some(Command::Complete(args)) => execute_complete(args).await,
        Some(Command::Dump(args)) => execute_dump(args).await,
        Some(Command::Stats(args)) => execute_stats(args).await,
        None => run_demo(),
    }
}

fn run_demo() -> anyhow::Result<()> {
    let trie = seed::sample_trie()?;
    let suggestions = trie.autocomplete_with_limit(DEMO_PREFIX, DEMO_MAX_SUGGESTIONS)?;
    print!("{}", complete::render(DEMO_PREFIX, &suggestions));
    println!("Serialized Trie: {}", snapshot::to_json(&trie)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_complete() {
        let cli = Cli::try_parse_from(["freqtrie", "complete", "ne", "-n", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Complete(_))));
    }

    #[test]
    fn test_parse_without_subcommand() {
        let cli = Cli::try_parse_from(["freqtrie", "--verbose"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn test_stats_requires_a_term() {
        assert!(Cli::try_parse_from(["freqtrie", "stats"]).is_err());
    }
}
