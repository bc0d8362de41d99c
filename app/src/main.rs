use clap::Parser;
use onelist_app::{App, UreqTransport};
use onelist_core::{ApiClient, Syncer};

#[derive(Parser)]
#[command(name = "onelist")]
#[command(about = "Single-list to-do client over a REST backend")]
struct Args {
    /// Base URL of the to-do API (falls back to ONELIST_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let api_url = args
        .api_url
        .or_else(|| std::env::var("ONELIST_API_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());

    let syncer = Syncer::new(ApiClient::new(&api_url), UreqTransport::new());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    App::new(syncer).run(stdin.lock(), stdout.lock())?;
    Ok(())
}
