// src/main.rs
mod extractors;
mod plan;
mod search;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the substitution plan extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the substitution plan HTML file (e.g. subst_001.htm)
    input: PathBuf,

    /// Character encoding the file is declared in (exports are usually ISO-8859-1)
    #[arg(short, long, default_value = "UTF-8")]
    encoding: String,

    /// Field to filter on, e.g. "klasse" (requires --query)
    #[arg(short, long)]
    key: Option<String>,

    /// Single-word search query, e.g. "9E" (requires --key)
    #[arg(short, long)]
    query: Option<String>,

    /// Output directory; when set, records and metadata are written there
    /// instead of printed to stdout
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Read and parse the plan file
    let raw = std::fs::read(&args.input)?;
    tracing::info!("Read {} bytes from {}", raw.len(), args.input.display());

    let plan = plan::build_plan(raw, &args.encoding)?;
    tracing::info!(
        "Parsed plan for {} ({} records, last edited {})",
        plan.date,
        plan.records.len(),
        plan.last_edited
    );

    // 4. Run the requested search, if any
    match (&args.key, &args.query) {
        (Some(key), Some(query)) => {
            let hits = search::search(&plan, key, query)?;
            tracing::info!(
                "{} of {} records match {}={:?}",
                hits.len(),
                plan.records.len(),
                key,
                query
            );
            println!("{}", serde_json::to_string_pretty(&hits)?);
            return Ok(());
        }
        (None, None) => {}
        _ => {
            return Err(AppError::Config(
                "--key and --query must be used together".to_string(),
            ));
        }
    }

    // 5. Persist or print the full record set
    if let Some(output_dir) = &args.output_dir {
        let storage = StorageManager::new(output_dir)?;

        let records_path = storage.save_records(&plan)?;
        tracing::info!("Saved records to: {}", records_path.display());

        let metadata_path = storage.save_metadata(&plan)?;
        tracing::info!("Saved metadata to: {}", metadata_path.display());
    } else {
        println!("{}", serde_json::to_string_pretty(&plan.records)?);
    }

    Ok(())
}
