#![warn(clippy::complexity)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::suspicious)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use track_crossings::import::{import_csv, import_json, invalid_trains, CsvImportConfig};
use track_crossings::{SimulationReport, SimulationSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "track-crossings",
    version,
    about = "Report arrival times and crossing points of trains on a single track"
)]
struct Args {
    /// Train file (CSV with columns name,speed,stops,departure,priority or a JSON array)
    file: PathBuf,

    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// JSON settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip invalid CSV rows instead of failing
    #[arg(long)]
    lenient: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn load_settings(path: Option<&Path>) -> Result<SimulationSettings> {
    let Some(path) = path else {
        return Ok(SimulationSettings::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings {}", path.display()))?;
    SimulationSettings::from_json_str(&content)
        .with_context(|| format!("Failed to parse settings {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let settings = load_settings(args.settings.as_deref())?;

    let format = args
        .format
        .or_else(|| InputFormat::from_path(&args.file))
        .with_context(|| {
            format!(
                "Cannot infer the format of {}; pass --format csv|json",
                args.file.display()
            )
        })?;

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;
    let reader = BufReader::new(file);

    let trains = match format {
        InputFormat::Csv => {
            let config = CsvImportConfig {
                lenient: args.lenient,
                ..CsvImportConfig::default()
            };
            import_csv(reader, config)
        }
        InputFormat::Json => import_json(reader),
    }
    .with_context(|| format!("Failed to import trains from {}", args.file.display()))?;

    log::info!("Loaded {} trains from {}", trains.len(), args.file.display());
    for error in invalid_trains(&trains) {
        log::warn!("{error}");
    }

    let report = SimulationReport::build(&trains, &settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let text = report
            .format(&settings)
            .context("Failed to render report with the configured time format")?;
        print!("{text}");
    }

    Ok(())
}
