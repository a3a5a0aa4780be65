use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use thelin_client::ApiClient;
use thelin_tui::Session;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "thelin", about = "Review client for the Thelin Orchestrator", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal review interface (default)
    Tui,
    /// Probe the backend and report liveness
    Health,
    /// Print the aggregate counters
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the alternate screen stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client = ApiClient::new(
        config.api_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    match Cli::parse().command.unwrap_or(Commands::Tui) {
        Commands::Tui => start_tui(client, &config).await,
        Commands::Health => check_health(client).await,
        Commands::Stats => print_stats(client).await,
    }
}

async fn start_tui(client: ApiClient, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    use crossterm::{execute, terminal};

    let session = match &config.user {
        Some(user) => Session::signed_in(user),
        None => Session::signed_out(),
    };
    let mut app = thelin_tui::App::new(client, session, config.page_size, config.refresh_secs);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Run the application with proper cleanup
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if there was an error
    let cleanup_result = (|| -> Result<(), Box<dyn std::error::Error>> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
        Ok(())
    })();

    if let Err(cleanup_error) = cleanup_result {
        eprintln!("Terminal cleanup error: {cleanup_error}");
    }

    result.map_err(Into::into)
}

async fn check_health(client: ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    match client.health().await {
        Ok(health) => {
            println!(
                "{} backend status={} database={}",
                "OK".green().bold(),
                health.status,
                health.database
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "FAIL".red().bold(), err);
            std::process::exit(1);
        }
    }
}

async fn print_stats(client: ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let stats = client.stats().await?;
    println!("{}", "Thelin Orchestrator".bold());
    println!("  Lifelogs today:         {}", stats.lifelogs_today);
    let mut labels: Vec<_> = stats.classifications.iter().collect();
    labels.sort();
    for (label, count) in labels {
        println!("    {label}: {count}");
    }
    println!("  Pending questions:      {}", stats.pending_questions);
    println!("  Pending book additions: {}", stats.pending_book_additions);
    println!("  New business ideas:     {}", stats.new_business_ideas);
    Ok(())
}
