use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "streamgrab")]
#[command(author, version, about = "Streaming URL extractor API")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Host to bind to
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "8000")]
        port: u16,

        /// Leave the page title out of responses
        #[arg(long)]
        no_title: bool,

        /// Overall deadline for one request, in seconds
        #[arg(long, default_value = "60")]
        request_timeout_secs: u64,
    },

    /// Extract streams from one page and print the result as JSON
    Extract {
        /// Target video page URL
        #[arg(required = true)]
        url: String,

        /// Leave the page title out of the result
        #[arg(long)]
        no_title: bool,
    },
}
