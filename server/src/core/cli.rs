use clap::{Parser, Subcommand};

use std::path::PathBuf;

use super::constants::{ENV_CONFIG, ENV_DATABASE, ENV_HOST, ENV_PORT};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version, about = "Product catalog query server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server host address
    #[arg(long, short = 'H', global = true, env = ENV_HOST)]
    pub host: Option<String>,

    /// Server port
    #[arg(long, short = 'p', global = true, env = ENV_PORT)]
    pub port: Option<u16>,

    /// Path to config file
    #[arg(long, short = 'c', global = true, env = ENV_CONFIG)]
    pub config: Option<PathBuf>,

    /// Path to the SQLite database file
    #[arg(long, short = 'd', global = true, env = ENV_DATABASE)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the server (default command)
    Start,
    /// Load products from a JSON array file into the database
    Seed {
        /// Path to the JSON file
        file: PathBuf,
        /// Keep existing products instead of replacing them
        #[arg(long)]
        keep: bool,
    },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
}

impl From<Cli> for (CliConfig, Option<Commands>) {
    fn from(cli: Cli) -> Self {
        let config = CliConfig {
            host: cli.host,
            port: cli.port,
            config: cli.config,
            database: cli.database,
        };
        (config, cli.command)
    }
}

/// Parse CLI arguments and return config with command
pub fn parse() -> (CliConfig, Option<Commands>) {
    Cli::parse().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> (CliConfig, Option<Commands>) {
        Cli::try_parse_from(args).unwrap().into()
    }

    #[test]
    fn test_no_subcommand() {
        let (config, command) = parse_from(&["catalog", "--port", "8080"]);
        assert_eq!(config.port, Some(8080));
        assert!(command.is_none());
    }

    #[test]
    fn test_seed_command() {
        let (config, command) =
            parse_from(&["catalog", "seed", "products.json", "--keep", "-d", "/tmp/c.db"]);
        assert_eq!(
            command,
            Some(Commands::Seed {
                file: PathBuf::from("products.json"),
                keep: true,
            })
        );
        assert_eq!(config.database, Some(PathBuf::from("/tmp/c.db")));
    }

    #[test]
    fn test_seed_requires_file() {
        assert!(Cli::try_parse_from(["catalog", "seed"]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["catalog", "--port", "not-a-port"]).is_err());
    }
}
