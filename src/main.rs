use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use didyoufeelit::app::AppContext;
use didyoufeelit::cli::{commands, Cli, Commands};
use didyoufeelit::render::{JsonRenderer, Renderer, TerminalRenderer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs on stderr, rendered output on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config.as_deref())?;

    match cli.command {
        Commands::Fetch { url, json } => {
            let renderer: Box<dyn Renderer> = if json {
                Box::new(JsonRenderer::new(io::stdout()))
            } else {
                Box::new(TerminalRenderer::new(io::stdout()))
            };
            commands::fetch_event(&ctx, url.as_deref(), renderer.as_ref()).await?;
        }
        Commands::Scale => {
            commands::print_scale(&ctx, &mut io::stdout())?;
        }
    }

    Ok(())
}
