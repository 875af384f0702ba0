use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use movie_finder::{
    AppConfig, ConfigArgs, InteractiveSearch, SearchController,
    formatters::{SearchReport, format_report},
    interactive::ui::events::Message,
    logging,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(
    name = "movie-finder",
    version,
    about = "Search and browse the TMDB movie catalog from the terminal",
    long_about = None
)]
struct Cli {
    /// Search text; leave empty to list popular movies
    query: Option<String>,

    /// Result page for one-shot searches
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Output format for one-shot searches
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Full-screen interactive mode (default when no query is given); a
    /// query given alongside is searched on startup
    #[arg(short = 'i', long)]
    interactive: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_args(cli.config)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if cli.interactive || cli.query.is_none() {
        logging::init_file_tracing(&config.log_file, config.log_json)?;
        let _guard = runtime.enter();
        let mut interactive = InteractiveSearch::from_config(&config)?;
        if let Some(query) = &cli.query {
            interactive = interactive.with_initial_query(query);
        }
        return interactive.run();
    }

    logging::init_tracing(config.log_json);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let query = cli.query.unwrap_or_default();
    let report = runtime.block_on(search_once(&config, &query, cli.page))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            write!(handle, "{}", format_report(&report, !cli.no_color))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &report)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}

async fn search_once(config: &AppConfig, query: &str, page: u32) -> Result<SearchReport> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Searching movies...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut controller = SearchController::from_config(config)?;
    controller.search_now(query, page, Instant::now());
    controller.settle().await;

    // Load trending afterwards so the search just made is counted
    controller.dispatch(Message::RefreshTrending, Instant::now());
    controller.settle().await;

    spinner.finish_and_clear();
    Ok(SearchReport::from_state(controller.state()))
}
