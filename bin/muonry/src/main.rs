//! Muonry CLI
//!
//! Serves the built site and checks its configuration.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the Muonry site.
#[derive(Parser)]
#[command(name = "muonry", version, about = "Serve and check the Muonry site")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "muonry.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Serve the built site
    Serve {
        /// Directory with the built site (defaults to server.dist_dir)
        #[arg(short, long)]
        dist: Option<std::path::PathBuf>,
        /// Port to listen on (defaults to server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Validate the site configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    muonry::init_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { dist, port } => {
            muonry::cmd::serve::run(&cli.config, dist.as_deref(), port).await?;
        }
        Commands::Check { strict } => {
            muonry::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_serve_command_parsing() {
        let args = ["muonry", "serve", "--dist", "public", "--port", "8080"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("muonry.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Serve { dist, port } => {
                assert_eq!(dist, Some(std::path::PathBuf::from("public")));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_serve_defaults_to_config() {
        let cli = Cli::parse_from(["muonry", "serve"]);

        match cli.command {
            Commands::Serve { dist, port } => {
                assert!(dist.is_none());
                assert!(port.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["muonry", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["muonry", "-vvv", "check"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["muonry", "--config", "site.toml", "check"]);
        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
    }
}
