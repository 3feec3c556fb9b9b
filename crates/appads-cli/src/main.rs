mod crawl;

use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "appads-cli")]
#[command(about = "Locate and parse the app-ads.txt that applies to a website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve app-ads.txt for one or more URLs and print each result as JSON.
    Crawl(CrawlArgs),
}

#[derive(Debug, Args)]
struct CrawlArgs {
    /// Website URLs to resolve (e.g. `https://www.example.com/games`).
    #[arg(required = true)]
    urls: Vec<String>,

    /// Route every request through this proxy (overrides `APPADS_PROXY_URL`).
    #[arg(long)]
    proxy: Option<String>,

    /// Milliseconds to wait for a server to start responding.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    response_timeout_ms: Option<u64>,

    /// Milliseconds allowed for each request to complete.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    deadline_ms: Option<u64>,

    /// Number of input URLs crawled at the same time.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Pretty-print JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

impl CrawlArgs {
    /// Applies command-line overrides on top of environment configuration.
    fn apply_to(&self, config: &mut appads_core::CrawlerConfig) {
        if let Some(proxy) = self.proxy.as_deref().filter(|p| !p.trim().is_empty()) {
            config.proxy_url = Some(proxy.trim().to_string());
        }
        if let Some(ms) = self.response_timeout_ms {
            config.response_timeout_ms = ms;
        }
        if let Some(ms) = self.deadline_ms {
            config.deadline_ms = ms;
        }
        if let Some(n) = self.concurrency {
            config.max_concurrent_crawls = n.max(1);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = appads_core::load_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Crawl(args)) => {
            args.apply_to(&mut config);
            tracing::debug!(?config, "starting crawl");

            let crawler = appads_crawler::Crawler::from_config(&config)?;
            let summary = crawl::run_crawl(
                &crawler,
                &args.urls,
                config.max_concurrent_crawls,
                args.pretty,
                &mut std::io::stdout().lock(),
            )
            .await?;

            tracing::info!(
                total = summary.total,
                found = summary.found,
                invalid = summary.invalid,
                "crawl finished"
            );

            if summary.invalid > 0 {
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
