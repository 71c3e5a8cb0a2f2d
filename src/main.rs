use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treesketch::{sketch, SketchConfig};

#[derive(Parser, Debug)]
#[command(name = "treesketch", about = "Draw a random binary tree shape as ASCII art")]
struct Cli {
    /// Number of nodes (read from stdin when omitted).
    count: Option<String>,
    /// Seed for the shape generator (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Do not print the `Number of nodes` line.
    #[arg(long)]
    no_header: bool,
    /// Also print the parenthesized form of the tree.
    #[arg(long)]
    parens: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = match cli.count {
        Some(raw) => raw,
        None => prompt_for_count()?,
    };
    let node_count = parse_count(&raw)?;

    let mut config = SketchConfig::new(node_count);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.no_header {
        config = config.without_header();
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let tree = sketch(&config, &mut out).context("failed to draw tree")?;
    if cli.parens {
        writeln!(out, "{tree}")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn prompt_for_count() -> Result<String> {
    eprint!("Enter a non-negative integer: ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read node count from stdin")?;
    if line.trim().is_empty() {
        bail!("no node count given on stdin");
    }
    Ok(line)
}

fn parse_count(raw: &str) -> Result<usize> {
    let text = raw.trim();
    text.parse::<usize>().with_context(|| {
        format!("invalid node count '{text}': expected a non-negative integer")
    })
}
