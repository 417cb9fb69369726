//! sector-weights — print SPY or QQQ sector weights as sector ETF tickers.

mod prompt;

use clap::Parser;

use sector_weights::{FetchConfig, HttpClient, Outcome, SectorTable};

#[derive(Parser)]
#[command(
    name = "sector-weights",
    about = "Sector weights for SPY or QQQ, normalized to sector ETF tickers",
    version
)]
struct Cli {
    /// ETF ticker (SPY or QQQ). Prompted for when omitted.
    ticker: Option<String>,

    /// Request timeout in milliseconds.
    /// Also reads from SECTOR_WEIGHTS_TIMEOUT_MS.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let selection = match cli.ticker {
        Some(ticker) => ticker,
        None => prompt::read_ticker()?,
    };

    let config = FetchConfig::resolve(cli.timeout_ms);
    let client = HttpClient::new(&config)?;
    let table = SectorTable::default();

    let result = sector_weights::run(&selection, &client, &config, &table).await;
    if let Err(e) = &result {
        if e.is_fatal() {
            tracing::error!(error = %e, "fetch failed");
        }
    }

    let (text, code) = render(&result);
    print!("{text}");
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Frame a run's result between blank lines and pick the exit code:
/// 0 for reported outcomes, 1 for network failures.
fn render(result: &sector_weights::Result<Outcome>) -> (String, i32) {
    let (line, code) = match result {
        Ok(outcome) => (outcome.to_string(), 0),
        Err(e) if e.is_fatal() => (e.to_string(), 1),
        Err(e) => (e.to_string(), 0),
    };
    (format!("\n{line}\n\n"), code)
}
