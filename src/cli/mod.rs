pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "didyoufeelit")]
#[command(about = "How strongly did people feel the latest earthquake?", long_about = None)]
pub struct Cli {
    /// Config file to read instead of ~/.config/didyoufeelit/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a feed and show its first event
    Fetch {
        /// Feed URL (default: the configured USGS query)
        #[arg(short, long)]
        url: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the intensity table in use
    Scale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch_defaults() {
        let cli = Cli::try_parse_from(["didyoufeelit", "fetch"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Fetch { url, json } => {
                assert!(url.is_none());
                assert!(!json);
            }
            Commands::Scale => panic!("Expected fetch"),
        }
    }

    #[test]
    fn test_parse_fetch_with_options() {
        let cli = Cli::try_parse_from([
            "didyoufeelit",
            "fetch",
            "--url",
            "http://localhost/feed",
            "--json",
            "--config",
            "/tmp/c.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(std::path::PathBuf::from("/tmp/c.toml")));
        match cli.command {
            Commands::Fetch { url, json } => {
                assert_eq!(url.as_deref(), Some("http://localhost/feed"));
                assert!(json);
            }
            Commands::Scale => panic!("Expected fetch"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["didyoufeelit"]).is_err());
    }
}
