use std::path::PathBuf;

use clap::Args;
use freqtrie::snapshot;
use tracing::info;

use crate::seed::SeedArgs;

#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    seed: SeedArgs,
    /// Indent the JSON output.
    #[arg(short, long)]
    pretty: bool,
    /// Write the snapshot to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn execute_dump(args: DumpArgs) -> anyhow::Result<()> {
    let trie = args.seed.load().await?;
    let json = if args.pretty {
        snapshot::to_json_pretty(&trie)?
    } else {
        snapshot::to_json(&trie)?
    };

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            info!("Wrote snapshot to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
