use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pattern_catalog::{CatalogConfig, Category, OutputFormat, Pattern, Result, Trace};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pattern-catalog", version, about = "Run the design pattern demos")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available patterns
    List {
        /// Only show patterns in this category
        #[arg(long)]
        category: Option<Category>,
    },
    /// Run one or more pattern demos
    Run {
        /// Pattern names, e.g. `observer` or `chain_of_responsibility`
        patterns: Vec<String>,

        /// Run every pattern in the catalog
        #[arg(long, conflicts_with = "patterns")]
        all: bool,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// TOML file with defaults for format, color and patterns
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    pattern: Pattern,
    category: Category,
    lines: &'a [String],
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pattern_catalog={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list(category: Option<Category>) {
    let patterns = Pattern::ALL
        .into_iter()
        .filter(|p| category.map_or(true, |c| p.category() == c));
    for pattern in patterns {
        println!(
            "{} {:<11} {}",
            format!("{:<24}", pattern.name()).bold(),
            pattern.category().name(),
            pattern.summary()
        );
    }
}

fn select(names: &[String], all: bool, config: &CatalogConfig) -> Result<Vec<Pattern>> {
    if all {
        return Ok(Pattern::ALL.to_vec());
    }
    if names.is_empty() {
        return config.selected_patterns();
    }
    names.iter().map(|name| name.parse()).collect()
}

fn print_text(runs: &[(Pattern, Trace)]) {
    for (i, (pattern, trace)) in runs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let heading = format!("=== {} ({}) ===", pattern.name(), pattern.category());
        println!("{}", heading.bold().cyan());
        println!("{}", trace);
    }
}

fn print_json(runs: &[(Pattern, Trace)]) -> Result<()> {
    let reports: Vec<Report> = runs
        .iter()
        .map(|(pattern, trace)| Report {
            pattern: *pattern,
            category: pattern.category(),
            lines: trace.lines(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { category } => list(category),
        Commands::Run {
            patterns,
            all,
            format,
            config,
            no_color,
        } => {
            let config = match config {
                Some(path) => CatalogConfig::load(&path)?,
                None => CatalogConfig::default(),
            };
            if no_color || !config.color {
                colored::control::set_override(false);
            }

            let selected = select(&patterns, all, &config)?;
            tracing::info!(count = selected.len(), "running patterns");
            let runs: Vec<(Pattern, Trace)> = selected.into_iter().map(|p| (p, p.run())).collect();

            match format.map(OutputFormat::from).unwrap_or(config.format) {
                OutputFormat::Text => print_text(&runs),
                OutputFormat::Json => print_json(&runs)?,
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
