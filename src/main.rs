mod cli;

use clap::Parser;
use seoscore::error::ScorerError;
use seoscore::report::{self, OutputFormat};
use seoscore::types::config::Settings;
use seoscore::{batch, config, tool, AnalysisRequest};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: &Path) -> Result<String, ScorerError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    if !path.exists() {
        return Err(ScorerError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn load_settings() -> Result<Settings, ScorerError> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if loaded.is_none() {
        tracing::debug!("no {} found, using defaults", config::DEFAULT_CONFIG_FILE);
    }
    Ok(loaded.map(|cfg| cfg.settings()).unwrap_or_default())
}

fn output_format(requested: Option<cli::ReportFormat>, settings: &Settings) -> OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => settings.format.unwrap_or(OutputFormat::Md),
    }
}

fn resolve_keywords(requested: Vec<String>, settings: &Settings) -> Vec<String> {
    if requested.is_empty() {
        settings.keywords.clone()
    } else {
        requested
    }
}

fn run(cli: cli::Cli) -> Result<i32, ScorerError> {
    let settings = load_settings()?;

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let content = read_input(&cmd.input)?;
            let keywords = resolve_keywords(cmd.keywords, &settings);
            let min_word_count = cmd.min_words.unwrap_or(settings.min_word_count);
            let request = AnalysisRequest::new(content, keywords, min_word_count);

            let content_report = seoscore::analyze(&request, &settings.thresholds)?;
            let format = output_format(cmd.format, &settings);
            let rendered =
                report::render(&content_report, format, settings.max_recommendations)?;

            match &cmd.output {
                Some(target) => {
                    let path = report::writer::write_report(target, &rendered, format.extension())?;
                    println!("report written to {}", path.display());
                }
                None => println!("{rendered}"),
            }

            match cmd.fail_under {
                Some(threshold) if content_report.total_score < threshold => {
                    eprintln!(
                        "score {} is below --fail-under {}",
                        content_report.total_score, threshold
                    );
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Request(cmd) => {
            let input = read_input(&cmd.input)?;
            let rendered = tool::respond(&input, &settings)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let keywords = resolve_keywords(cmd.keywords, &settings);
            let min_word_count = cmd.min_words.unwrap_or(settings.min_word_count);
            let batch_report =
                batch::score_directory(&cmd.path, &keywords, min_word_count, &settings.thresholds)?;

            let format = output_format(cmd.format, &settings);
            println!("{}", batch::render(&batch_report, format)?);

            let below = cmd.fail_under.is_some_and(|threshold| {
                batch_report
                    .lowest_score()
                    .is_some_and(|lowest| lowest < threshold)
            });
            if below {
                Ok(exit_code::BELOW_THRESHOLD)
            } else if batch_report.failed_count() > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
