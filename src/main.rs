mod importer;
mod loader;
mod parser;
mod record;
mod storage;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pob_importer", about = "Path of Building build-code importer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode every build in a config file and save extracted records
    Import {
        /// JSON file with a build_codes array
        #[arg(short, long, default_value = "build_codes.json")]
        file: PathBuf,
        /// Directory for the extracted JSON records
        #[arg(short, long, default_value = "loaded_builds")]
        out: PathBuf,
        /// Max builds to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Decode a single build code and print the extracted record
    Inspect {
        code: String,
        /// Print the recovered XML instead of the record
        #[arg(long)]
        xml: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { file, out, limit } => {
            let mut builds = loader::load_build_codes(&file);
            if let Some(n) = limit {
                builds.truncate(n);
            }
            if builds.is_empty() {
                println!("No builds to process.");
                return Ok(());
            }

            println!("Processing {} builds...", builds.len());
            let counts = import_builds(&builds, &out);
            counts.print();
            Ok(())
        }
        Commands::Inspect { code, xml } => {
            let Some(markup) = importer::recover(Some(&code)) else {
                anyhow::bail!("could not recover XML from the given code");
            };
            if xml {
                println!("{markup}");
            } else {
                let record = parser::parse_build(&markup);
                println!("{}", serde_json::to_string_pretty(&record)?);
            }
            Ok(())
        }
    }
}

struct ImportCounts {
    saved: usize,
    skipped: usize,
    errors: usize,
}

impl ImportCounts {
    fn print(&self) {
        println!(
            "Saved {} builds ({} skipped, {} save errors).",
            self.saved, self.skipped, self.errors,
        );
    }
}

/// Decode + extract in parallel (each build is independent), then save
/// serially. A build whose code cannot be recovered is skipped; the
/// batch always runs to completion.
fn import_builds(builds: &[loader::BuildCode], out: &Path) -> ImportCounts {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(builds.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut counts = ImportCounts {
        saved: 0,
        skipped: 0,
        errors: 0,
    };

    for chunk in builds.chunks(64) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|build| {
                info!("Processing build: {}", build.name);
                let record = importer::recover(build.code.as_deref())
                    .map(|markup| parser::parse_build(&markup));
                (build.name.as_str(), record)
            })
            .collect();

        for (name, record) in results {
            match record {
                Some(record) => match storage::save_build(out, name, &record) {
                    Ok(_) => counts.saved += 1,
                    Err(e) => {
                        error!("Failed to save build '{}': {:#}", name, e);
                        counts.errors += 1;
                    }
                },
                None => {
                    error!("Failed to import code for build: {}", name);
                    counts.skipped += 1;
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    counts
}
