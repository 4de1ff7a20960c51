use std::{io::IsTerminal, path::PathBuf};

use anyhow::Context;
use clap::Args;
use freqtrie::{Trie, DEFAULT_FREQUENCY};
use serde::Deserialize;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Words the demo seeds when no other source is given.
pub const SAMPLE_WORDS: [(&str, u32); 10] = [
    ("network", 8),
    ("networking", 6),
    ("neural", 5),
    ("neuralnet", 4),
    ("node", 7),
    ("nodejs", 6),
    ("python", 10),
    ("pytest", 5),
    ("query", 6),
    ("queue", 4),
];

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// JSON file holding an array of `{"word": ..., "frequency": ...}` objects.
    /// Without it, piped stdin (`word [frequency]` per line) or the sample words are used.
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
struct SeedWord {
    word: String,
    #[serde(default = "default_frequency")]
    frequency: u32,
}

fn default_frequency() -> u32 {
    DEFAULT_FREQUENCY
}

impl SeedArgs {
    pub async fn load(&self) -> anyhow::Result<Trie> {
        if let Some(path) = &self.seed {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read seed file {}", path.display()))?;
            let words = serde_json::from_str::<Vec<SeedWord>>(&json)
                .with_context(|| format!("failed to parse seed file {}", path.display()))?;
            info!("Seeding {} words from {}", words.len(), path.display());
            return Ok(Trie::from_words(
                words.iter().map(|w| (w.word.as_str(), w.frequency)),
            )?);
        }

        if !std::io::stdin().is_terminal() {
            let mut stdin = tokio::io::stdin();
            let mut buf = Vec::with_capacity(256);
            stdin.read_to_end(&mut buf).await?;
            let text = String::from_utf8_lossy(&buf);
            if !text.trim().is_empty() {
                let words = parse_lines(&text)?;
                info!("Seeding {} words from stdin", words.len());
                return Ok(Trie::from_words(
                    words.iter().map(|(word, frequency)| (word.as_str(), *frequency)),
                )?);
            }
        }

        sample_trie()
    }
}

pub fn sample_trie() -> anyhow::Result<Trie> {
    info!("Seeding {} sample words", SAMPLE_WORDS.len());
    Ok(Trie::from_words(SAMPLE_WORDS)?)
}

/// Parses `word [frequency]` lines, skipping blank lines.
fn parse_lines(text: &str) -> anyhow::Result<Vec<(String, u32)>> {
    let mut words = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let frequency = match fields.next() {
            Some(f) => f
                .parse::<u32>()
                .with_context(|| format!("line {}: invalid frequency {:?}", i + 1, f))?,
            None => DEFAULT_FREQUENCY,
        };
        if fields.next().is_some() {
            anyhow::bail!("line {}: expected `word [frequency]`", i + 1);
        }
        words.push((word.to_string(), frequency));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let words = parse_lines("python 10\n\n  pytest 5 \nquery\n").unwrap();
        assert_eq!(
            words,
            vec![
                ("python".to_string(), 10),
                ("pytest".to_string(), 5),
                ("query".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_parse_lines_rejects_bad_frequency() {
        assert!(parse_lines("python ten").is_err());
        assert!(parse_lines("python -1").is_err());
        assert!(parse_lines("python 1 2").is_err());
    }

    #[test]
    fn test_seed_word_frequency_defaults_to_one() {
        let words: Vec<SeedWord> =
            serde_json::from_str(r#"[{"word": "node"}, {"word": "nodejs", "frequency": 6}]"#)
                .unwrap();
        assert_eq!(words[0].frequency, 1);
        assert_eq!(words[1].frequency, 6);
    }

    #[test]
    fn test_sample_trie() {
        let trie = sample_trie().unwrap();
        assert_eq!(trie.get_prefix_frequency("ne"), 23);
        assert_eq!(trie.autocomplete_with_limit("py", 1).unwrap()[0].word, "python");
    }
}
