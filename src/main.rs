use clap::Parser;
use hirelist::{headless, Config, HttpFetcher};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hirelist", version, about = "Fetch, group and sort the hiring list")]
struct Cli {
    /// Endpoint to fetch instead of `source.url` from the config file.
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in seconds (0 disables it).
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the rows to stdout, one per line, instead of starting the TUI.
    #[arg(long)]
    plain: bool,

    /// Read configuration from this file instead of ~/.config/hirelist/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to hirelist-debug.log in the temp dir (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not load config, using defaults");
            Config::defaults()
        }),
    };
    if let Some(url) = cli.url {
        config.source.url = url;
    }
    if let Some(secs) = cli.timeout {
        config.source.timeout_secs = secs;
    }

    let runtime = tokio::runtime::Runtime::new()?;

    if cli.plain {
        let fetcher = HttpFetcher::new().with_timeout(config.source.timeout());
        let stdout = std::io::stdout().lock();
        runtime.block_on(headless::run(&fetcher, &config.source.url, stdout))?;
        return Ok(());
    }

    hirelist_tui::run(config, runtime.handle().clone())
}

/// `--debug` logs to a file at `debug` level. Otherwise only `--plain` logs,
/// to stderr at `warn`; the TUI owns the terminal and gets no subscriber.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = |default: &str| {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default))
    };

    if cli.debug {
        let path = std::env::temp_dir().join("hirelist-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(filter("debug"))
            .init();
        tracing::info!(path = %path.display(), "hirelist debug log started");
    } else if cli.plain {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter("warn"))
            .init();
    }
    Ok(())
}
