use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemini_models::config::{self, Settings};
use gemini_models::source::PagedSource;

#[derive(Parser)]
#[command(
    name = "list-models",
    about = "List Gemini models that support content generation"
)]
#[command(version)]
struct Cli {
    /// Load variables from this file instead of searching for `.env`
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the API version (default v1beta)
    #[arg(long, value_name = "VERSION")]
    api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Models requested per page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(i32).range(1..))]
    page_size: Option<i32>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            timeout: self.timeout,
            page_size: self.page_size,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gemini_models=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    config::load_dotenv(cli.env_file.as_deref());
    let settings = Settings::from_lookup(config::env_lookup).merge(cli.settings());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = gemini_models::run(
        config::env_lookup,
        |api_key| {
            let client = settings.build_client(api_key)?;
            Ok(PagedSource::new(client, settings.page_size))
        },
        &mut out,
    )
    .await;

    if let Err(err) = result {
        tracing::error!(error = %err, "failed to write output");
    }
}
