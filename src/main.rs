use std::io::Read;

use anyhow::Context;
use clap::Parser;
use immoscout_parser::{ImmoScout24, ListingInput, ScoutConfig};
use serde_json::json;
use tracing::error;

#[derive(Parser)]
#[command(name = "immoscout", about = "Look up addresses of ImmoScout24 listings")]
struct Cli {
    /// Listing URLs. A single argument is scanned as free text; with none, text is read from stdin.
    input: Vec<String>,

    /// Print one JSON object per listing
    #[arg(long)]
    json: bool,

    /// Open every listing in the browser
    #[arg(long)]
    open: bool,

    /// Only print the deduplicated listing URLs
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ScoutConfig::from_env().context("reading IMMOSCOUT_* settings")?;
    config.open_browser |= cli.open;

    let input = match cli.input.len() {
        0 => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            ListingInput::Text(text)
        }
        1 => ListingInput::Text(cli.input[0].clone()),
        _ => ListingInput::Urls(cli.input),
    };

    let scout = ImmoScout24::new(input, config)?;

    if cli.list {
        for reference in scout.urls() {
            println!("{}", reference.url);
        }
        return Ok(());
    }

    let mut failures = 0;
    for (reference, result) in scout.parse_all() {
        match result {
            Ok(record) if cli.json => println!(
                "{}",
                json!({
                    "id": reference.id,
                    "url": reference.url,
                    "full_address": record.full_address,
                    "found": record.found,
                })
            ),
            Ok(record) if record.found => println!("{}\t{}", reference.id, record.full_address),
            Ok(_) => println!("{}\t(not found)", reference.id),
            Err(e) => {
                failures += 1;
                error!("Listing {} failed: {e}", reference.id);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} listing(s) failed");
    }

    Ok(())
}
