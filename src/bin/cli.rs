use anyhow::Context;
use clap::{Parser, Subcommand};
use geocode_ranking::{
    ranking::{classify, BAND_TABLE},
    PlaceResult, RequestContext, ResultSorter, SortOptions, TiePolicy,
};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geocode-rank")]
#[command(about = "Sort geocoding results by layer, size and distance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a JSON array of results
    Sort {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Focus point latitude
        #[arg(long, requires = "focus_lon", allow_hyphen_values = true)]
        focus_lat: Option<f64>,

        /// Focus point longitude
        #[arg(long, requires = "focus_lat", allow_hyphen_values = true)]
        focus_lon: Option<f64>,

        /// Score-tie handling: first-wins or equal
        #[arg(long)]
        tie_policy: Option<TiePolicy>,

        /// Keep at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the band each result falls into
    Classify {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,
    },

    /// List the ranking table, highest priority first
    Bands,
}

fn read_results(input: Option<&PathBuf>) -> anyhow::Result<Vec<PlaceResult>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("input must be a JSON array of results")
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so stdout stays JSON)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            input,
            focus_lat,
            focus_lon,
            tie_policy,
            limit,
            pretty,
        } => {
            let mut options = SortOptions::from_env()?;
            if let Some(policy) = tie_policy {
                options.tie_policy = policy;
            }
            if limit.is_some() {
                options.limit = limit;
            }

            let ctx = match (focus_lat, focus_lon) {
                (Some(lat), Some(lon)) => RequestContext::with_focus(lat, lon),
                _ => RequestContext::new(),
            };

            let results = read_results(input.as_ref())?;
            tracing::info!("Sorting {} results", results.len());

            let sorted = ResultSorter::new(options).sorted(results, &ctx);

            let out = if pretty {
                serde_json::to_string_pretty(&sorted)?
            } else {
                serde_json::to_string(&sorted)?
            };
            println!("{}", out);
        }

        Commands::Classify { input } => {
            for result in read_results(input.as_ref())? {
                let band = classify(&result);
                println!("{:<40} {}", result.display_name(), band.name);
            }
        }

        Commands::Bands => {
            for (i, band) in BAND_TABLE.iter().enumerate() {
                println!("{:>2}. {:<28} {:?}", i + 1, band.name, band.strategy);
            }
        }
    }

    Ok(())
}
