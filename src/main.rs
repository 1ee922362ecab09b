use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rhidx::index::{
    self, BuildOptions, OutputFormat, TableStats, index_file, load_snapshot, save_snapshot,
    sorted_records, write_index,
};
use rhidx::output::{Lookup, print_lookups};
use rhidx::table::RobinHoodTable;
use rhidx::utils::{AppConfig, get_config_path};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rhidx")]
#[command(about = "Index the line numbers of every word in a text file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index of a text file and write it sorted by word
    Index {
        /// Text file to index
        input: PathBuf,

        /// File to write the sorted index to
        output: PathBuf,

        /// Number of table slots (fixed; must exceed the distinct word count)
        #[arg(short, long)]
        capacity: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Snapshot to load into the table before indexing
        #[arg(long)]
        load: Option<PathBuf>,

        /// Save a snapshot of the final index
        #[arg(long)]
        save: Option<PathBuf>,

        /// Warn when occupancy exceeds this load factor
        #[arg(long)]
        threshold: Option<f64>,

        /// Suppress progress and timing output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Look up words in a saved snapshot
    Lookup {
        /// Snapshot written by `index --save`
        snapshot: PathBuf,

        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Number of table slots
        #[arg(short, long)]
        capacity: Option<usize>,

        /// When to use colors
        #[arg(long, default_value = "auto", value_parser = ["auto", "never"])]
        color: String,
    },
    /// Show occupancy and probe-distance statistics for a text file
    Stats {
        /// Text file to index
        input: PathBuf,

        /// Number of table slots
        #[arg(short, long)]
        capacity: Option<usize>,
    },
    /// Show the configuration, or write the defaults with --init
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load()?;
    debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Index {
            input,
            output,
            capacity,
            format,
            load,
            save,
            threshold,
            quiet,
        } => {
            let capacity = capacity.unwrap_or(config.default_capacity);
            let mut table = RobinHoodTable::new(capacity)
                .with_context(|| format!("Cannot create a table of {} slots", capacity))?;

            if let Some(path) = &load {
                let loaded = load_snapshot(path, &mut table)?;
                info!(records = loaded.records, skipped = loaded.skipped, "loaded snapshot");
            }

            let mut options = BuildOptions::from(&config);
            options.silent = quiet;
            if let Some(threshold) = threshold {
                options.load_factor_threshold = threshold;
            }

            let report = index_file(&mut table, &input, &options)?;
            if !quiet {
                println!("Indexing time: {:.6} seconds", report.elapsed.as_secs_f64());
            }

            let records = sorted_records(table);
            write_index(&records, &output, format)?;
            info!(words = records.len(), path = %output.display(), "wrote index");

            if let Some(path) = &save {
                save_snapshot(&records, path)?;
                info!(path = %path.display(), "saved snapshot");
            }
        }
        Commands::Lookup {
            snapshot,
            words,
            capacity,
            color,
        } => {
            let capacity = capacity.unwrap_or(config.default_capacity);
            let mut table = RobinHoodTable::new(capacity)
                .with_context(|| format!("Cannot create a table of {} slots", capacity))?;
            load_snapshot(&snapshot, &mut table)?;

            let lookups: Vec<Lookup> = words
                .into_iter()
                .map(|word| {
                    let lines = table.get(&word).map(|entry| entry.lines().to_vec());
                    Lookup { word, lines }
                })
                .collect();
            print_lookups(&lookups, color == "auto")?;
        }
        Commands::Stats { input, capacity } => {
            let capacity = capacity.unwrap_or(config.default_capacity);
            let mut table = RobinHoodTable::new(capacity)
                .with_context(|| format!("Cannot create a table of {} slots", capacity))?;

            let options = BuildOptions {
                silent: true,
                ..BuildOptions::from(&config)
            };
            let report = index_file(&mut table, &input, &options)?;
            index::stats::show_stats(&TableStats::collect(&table), Some(&report));
        }
        Commands::Config { init } => {
            if init {
                let path = AppConfig::default().save()?;
                println!("Wrote default config to {}", path.display());
            } else {
                match get_config_path() {
                    Some(path) => println!("Config file: {}", path.display()),
                    None => println!("Config file: (no config directory)"),
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
