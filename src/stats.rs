use clap::Args;
use freqtrie::Trie;
use serde::Serialize;

use crate::seed::SeedArgs;

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    seed: SeedArgs,
    /// Print the lookups as a JSON array.
    #[arg(long)]
    json: bool,
    #[arg(name = "TERM", required = true)]
    terms: Vec<String>,
}

/// Every lookup the trie answers for a single term.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TermStats {
    pub term: String,
    pub word_exists: bool,
    pub word_frequency: u64,
    pub prefix_frequency: u64,
    pub starts_with: bool,
}

impl TermStats {
    pub fn lookup(trie: &Trie, term: &str) -> Self {
        TermStats {
            term: term.to_string(),
            word_exists: trie.word_exists(term),
            word_frequency: trie.get_word_frequency(term),
            prefix_frequency: trie.get_prefix_frequency(term),
            starts_with: trie.starts_with(term),
        }
    }
}

pub async fn execute_stats(args: StatsArgs) -> anyhow::Result<()> {
    let trie = args.seed.load().await?;
    let stats: Vec<TermStats> = args
        .terms
        .iter()
        .map(|term| TermStats::lookup(&trie, term))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }
    for s in stats {
        println!(
            "{}: exists={}, word frequency={}, prefix frequency={}, starts with={}",
            s.term, s.word_exists, s.word_frequency, s.prefix_frequency, s.starts_with
        );
    }
    Ok(())
}
