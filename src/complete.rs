use std::time::Instant;

use clap::Args;
use freqtrie::{Suggestion, DEFAULT_MAX_SUGGESTIONS};
use tracing::debug;

use crate::seed::SeedArgs;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    #[command(flatten)]
    seed: SeedArgs,
    /// Maximum number of suggestions to print.
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,
    /// Print the suggestions as a JSON array.
    #[arg(long)]
    json: bool,
    #[arg(name = "PREFIX")]
    prefix: String,
}

pub async fn execute_complete(args: CompleteArgs) -> anyhow::Result<()> {
    let trie = args.seed.load().await?;

    let suggestions = {
        let start = Instant::now();
        let res = trie.autocomplete_with_limit(&args.prefix, args.max_suggestions)?;
        debug!("Autocomplete took {} us", start.elapsed().as_micros());
        res
    };

    if args.json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else {
        print!("{}", render(&args.prefix, &suggestions));
    }

    Ok(())
}

pub fn render(prefix: &str, suggestions: &[Suggestion]) -> String {
    let mut out = format!("Searching for auto-complete suggestions for '{}':\n", prefix);
    if suggestions.is_empty() {
        out.push_str("No suggestions found.\n");
    }
    for suggestion in suggestions {
        out.push_str(&format!(
            "Word: {}, Frequency: {}\n",
            suggestion.word, suggestion.frequency
        ));
    }
    out
}
