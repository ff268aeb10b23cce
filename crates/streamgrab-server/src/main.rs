mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use streamgrab_core::{ExtractorOptions, StreamClient, StreamExtractor};
use streamgrab_server::{ServerConfig, start_server};

async fn extract_once(url: &str, options: ExtractorOptions) -> Result<()> {
    let client = Arc::new(StreamClient::new()?);
    let extractor = StreamExtractor::new(client, url, options)?;
    let result = extractor.extract().await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG if set, otherwise pick defaults from the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "streamgrab_core=trace,streamgrab_server=debug,tower_http=debug".to_string()
        } else {
            "streamgrab_core=info,streamgrab_server=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_title,
            request_timeout_secs,
        } => {
            let defaults = ServerConfig::default();
            let config = ServerConfig {
                host,
                port,
                request_timeout_secs,
                options: ExtractorOptions {
                    include_title: !no_title,
                    ..defaults.options
                },
                ..defaults
            };
            rt.block_on(start_server(config))
        }
        Commands::Extract { url, no_title } => {
            let options = ExtractorOptions {
                include_title: !no_title,
                ..ExtractorOptions::default()
            };
            rt.block_on(extract_once(&url, options))
        }
    }
}
