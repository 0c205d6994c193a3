use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error};

use datavalid::batch::{BatchFile, BatchReport};
use datavalid::checks::{run_check, CheckKind, CheckOutcome, LengthBounds};
use datavalid::config::{AppConfig, ConfigOverrides};
use datavalid::logging::init_logging;

#[derive(Parser)]
#[command(name = "dv-cli")]
#[command(about = "Validate and normalize email, phone, date and free-text input")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Output format", value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an email address
    Email {
        #[arg(allow_hyphen_values = true, help = "Text to check; omit for absent input")]
        input: Option<String>,
    },

    /// Check a phone number (separators are ignored)
    Phone {
        #[arg(allow_hyphen_values = true, help = "Text to check; omit for absent input")]
        input: Option<String>,
    },

    /// Check a YYYY-MM-DD date shape
    Date {
        #[arg(allow_hyphen_values = true, help = "Text to check; omit for absent input")]
        input: Option<String>,
    },

    /// Print only the digits of the input
    Digits {
        #[arg(allow_hyphen_values = true, help = "Text to transform; omit for absent input")]
        input: Option<String>,
    },

    /// Print the input in title case
    Title {
        #[arg(allow_hyphen_values = true, help = "Text to transform; omit for absent input")]
        input: Option<String>,
    },

    /// Check that the input length lies within inclusive bounds
    Length {
        #[arg(allow_hyphen_values = true, help = "Text to check; omit for absent input")]
        input: Option<String>,

        #[arg(long, help = "Minimum length (defaults to configuration)")]
        min: Option<usize>,

        #[arg(long, help = "Maximum length (defaults to configuration)")]
        max: Option<usize>,
    },

    /// Run the sample demonstration
    Demo,

    /// Run every case of a TOML batch file
    Batch {
        #[arg(help = "Path to batch file")]
        file: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn from_config(format: &str) -> Self {
        if format.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if let Some(config_path) = &cli.config {
        AppConfig::load_from_file(config_path).await?
    } else {
        AppConfig::load().await?
    };
    ConfigOverrides::apply(&mut config);
    config.validate()?;

    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    init_logging(&logging)?;

    debug!("dv-cli v{}", env!("CARGO_PKG_VERSION"));

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    let success = match cli.command {
        Commands::Email { input } => single_check(CheckKind::Email, input, None, format)?,
        Commands::Phone { input } => single_check(CheckKind::Phone, input, None, format)?,
        Commands::Date { input } => single_check(CheckKind::Date, input, None, format)?,
        Commands::Digits { input } => single_check(CheckKind::Digits, input, None, format)?,
        Commands::Title { input } => single_check(CheckKind::Title, input, None, format)?,
        Commands::Length { input, min, max } => {
            let bounds = LengthBounds::new(
                min.unwrap_or(config.length.default_min),
                max.unwrap_or(config.length.default_max),
            );
            single_check(CheckKind::Length, input, Some(bounds), format)?
        }
        Commands::Demo => {
            show_demo(format)?;
            true
        }
        Commands::Batch { file } => run_batch(&config, &file, format).await?,
    };

    if !success {
        std::process::exit(1);
    }

    Ok(())
}

fn single_check(
    kind: CheckKind,
    input: Option<String>,
    bounds: Option<LengthBounds>,
    format: OutputFormat,
) -> Result<bool> {
    let outcome = run_check(kind, input.as_deref(), bounds)?;
    print_outcome(&outcome, format)?;
    Ok(!outcome.is_failure())
}

fn print_outcome(outcome: &CheckOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", outcome.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(outcome)?),
    }
    Ok(())
}

fn show_demo(format: OutputFormat) -> Result<()> {
    let lines = datavalid::demo::render()?;

    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&lines)?),
    }

    Ok(())
}

async fn run_batch(config: &AppConfig, file: &str, format: OutputFormat) -> Result<bool> {
    let batch = BatchFile::load(file).await?;

    let report = match batch.run(&config.length) {
        Ok(report) => report,
        Err(e) => {
            error!("Batch run failed ({}): {}", e.category(), e);
            return Err(e.into());
        }
    };

    print_report(&report, format)?;
    Ok(report.all_passed())
}

fn print_report(report: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for outcome in &report.outcomes {
                println!("{}", outcome.render_text());
            }
            println!("{}", "-".repeat(40));
            println!(
                "{} cases: {} passed, {} failed",
                report.total, report.passed, report.failed
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
