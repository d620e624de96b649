//! CLI entry point for the survey summarizer.
//!
//! Provides subcommands for summarizing the embedded simulation-feedback
//! survey and for exporting the raw respondent table as CSV.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use survey_summarizer::{
    dataset::{survey, validate},
    output::{append_record, export_table, write_json, write_plain, write_report},
    stats::SurveySummary,
};
use tracing::{debug, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "survey_summarizer")]
#[command(about = "A tool to summarize the simulation-feedback survey", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the survey aggregates and print them
    Summarize {
        /// Output format for the aggregates
        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,

        /// Optional CSV file to append the summary record to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export the raw respondent table as CSV
    Export {
        /// CSV file to write the table to
        #[arg(short, long, default_value = "respondents.csv")]
        output: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Three unrounded numbers, space-separated, as the original script printed
    Plain,
    /// Full summary record as pretty-printed JSON
    Json,
    /// Labeled view with display rounding
    Report,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/survey_summarizer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("survey_summarizer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let table = survey();
    validate(&table)?;

    match cli.command {
        Commands::Summarize { format, output } => {
            let summary = SurveySummary::from_table(&table);
            debug!(respondents = summary.respondents, "Survey summarized");

            let mut stdout = std::io::stdout();
            match format {
                Format::Plain => write_plain(&mut stdout, &summary)?,
                Format::Json => write_json(&mut stdout, &summary)?,
                Format::Report => write_report(&mut stdout, &summary)?,
            }

            if let Some(path) = output {
                append_record(&path, &summary)?;
                info!(path = %path, "Summary record appended");
            }
        }
        Commands::Export { output } => {
            export_table(&output, &table)?;
            info!(path = %output, rows = table.len(), "Respondent table exported");
        }
    }

    Ok(())
}
