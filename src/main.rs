use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use log::debug;
use view::SummaryView;

pub mod view;

/// Print the layers, keys and feature counts of a Mapbox Vector Tile.
#[derive(Parser, Debug)]
#[command(name = "vtinfo", version = long_version())]
struct Args {
    /// Vector tile file (.mvt / .pbf), uncompressed.
    path: PathBuf,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Print JSON on a single line. Implies --json.
    #[arg(long)]
    compact: bool,
}

fn long_version() -> String {
    format!(
        "{} (engine {})",
        env!("CARGO_PKG_VERSION"),
        vtinfo_mvt::VERSION
    )
}

fn run(args: &Args) -> anyhow::Result<String> {
    let buffer =
        fs::read(&args.path).with_context(|| format!("reading {}", args.path.display()))?;
    debug!("read {} bytes from {}", buffer.len(), args.path.display());

    let summary = vtinfo_mvt::decode(&buffer)
        .with_context(|| format!("summarizing {}", args.path.display()))?;
    debug!("decoded {} layers", summary.layers.len());

    let out = if args.compact {
        serde_json::to_string(&summary)?
    } else if args.json {
        serde_json::to_string_pretty(&summary)?
    } else {
        SummaryView(&summary).to_string()
    };
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(out) => {
            println!("{}", out.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
