//! passlog CLI
//!
//! Command-line front end for a vehicle pass record file.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use passlog::logger::FileLogger;
use passlog::record::COLUMN_HEADERS;
use passlog::logger::PassLogger;
use passlog::{file, Config, LineFormat, PassError, Registry, VehicleKind};
use tracing_subscriber::{fmt, EnvFilter};

/// passlog
#[derive(Parser, Debug)]
#[command(name = "passlog")]
#[command(about = "Registry of vehicle passes")]
#[command(version)]
struct Args {
    /// Record file
    #[arg(short, long, default_value = "passes.txt")]
    file: PathBuf,

    /// Directory for dated log files
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Line format of the record file (csv or tagged)
    #[arg(long, default_value = "csv")]
    format: LineFormat,

    /// Save even if lines of the record file were skipped on load
    #[arg(long)]
    force: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print all records with their positions
    List,

    /// Validate and append a pass, then save
    Add {
        /// Plate number, e.g. А123ВС78
        #[arg(short, long)]
        plate: String,

        /// Fuel rate in liters per 100 km
        #[arg(long)]
        fuel: f64,

        /// Pass date (YYYY-MM-DD), today if omitted
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Vehicle kind
        #[arg(short, long, value_enum, default_value_t = KindArg::Car)]
        kind: KindArg,
    },

    /// Delete the record at a 0-based position, then save
    Delete {
        /// Position as shown by `list`
        index: usize,
    },

    /// Report every line that fails to decode
    Check {
        /// Print the full load report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-encode the record file in another format
    Convert {
        /// Target format
        #[arg(long)]
        to: LineFormat,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Car,
    Truck,
    Motorcycle,
}

impl From<KindArg> for VehicleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Car => VehicleKind::Car,
            KindArg::Truck => VehicleKind::Truck,
            KindArg::Motorcycle => VehicleKind::Motorcycle,
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,passlog=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("passlog v{}", passlog::VERSION);
    tracing::debug!("Record file: {} ({})", args.file.display(), args.format);

    let config = Config::builder()
        .data_file(&args.file)
        .format(args.format)
        .log_dir(&args.log_dir)
        .build();

    match run(args.command, config, args.force) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: Config, force: bool) -> passlog::Result<ExitCode> {
    let logger = FileLogger::new(config.log_dir.clone());

    match command {
        Commands::List => {
            let registry = Registry::open(config, logger)?;
            println!(
                "{:>5}  {:<10}  {:<12}  {}",
                "#", COLUMN_HEADERS[0], COLUMN_HEADERS[1], COLUMN_HEADERS[2]
            );
            for (index, record) in registry.store().iter().enumerate() {
                let [date, plate, fuel] = record.columns();
                println!("{index:>5}  {date:<10}  {plate:<12}  {fuel}");
            }
        }

        Commands::Add {
            plate,
            fuel,
            date,
            kind,
        } => {
            let mut registry = Registry::open(config, logger)?;
            let date = date.unwrap_or_else(passlog::codec::today);
            registry.add_pass(kind.into(), date, plate.trim(), fuel)?;
            save(&mut registry, force)?;
            tracing::info!("Added pass, {} records", registry.store().len());
        }

        Commands::Delete { index } => {
            let mut registry = Registry::open(config, logger)?;
            let removed = registry.delete(index)?;
            save(&mut registry, force)?;
            tracing::info!("Deleted {}", removed);
        }

        Commands::Check { json } => {
            let report = file::load(&config.data_file, config.format, &logger)?;
            if json {
                let text = serde_json::to_string_pretty(&report)
                    .map_err(|e| PassError::Serialization(e.to_string()))?;
                println!("{text}");
                return Ok(if report.is_clean() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                });
            }
            for failure in &report.failures {
                println!(
                    "line {} [{}]: {}",
                    failure.line_number,
                    failure.kind.kind_name(),
                    failure.kind
                );
            }
            println!(
                "{} valid, {} invalid",
                report.records.len(),
                report.failures.len()
            );
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Convert { to, output } => {
            let report = file::load(&config.data_file, config.format, &logger)?;
            file::save(&report.records, &output, to, &logger)?;
            tracing::info!(
                "Converted {} records from {} to {} ({} lines skipped)",
                report.records.len(),
                config.format,
                to,
                report.failures.len()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn save<L: PassLogger>(registry: &mut Registry<L>, force: bool) -> passlog::Result<()> {
    if force {
        registry.save_force()
    } else {
        registry.save().inspect_err(|_| {
            tracing::error!("Nothing was written; rerun with --force to drop the skipped lines");
        })
    }
}
