use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(version)]
#[command(about = "Rebrand a source tree with ordered literal token replacements")]
#[command(long_about = "A CLI tool that walks a source tree and rewrites every occurrence of a fixed, ordered set of old tokens to their new values, in place, across source, markup, styles and packaging metadata.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply the replacement table to every eligible file")]
    Apply {
        #[arg(help = "Target directory (defaults to current directory)")]
        target: Option<PathBuf>,

        #[arg(short, long, help = "TOML configuration file (defaults to the built-in Void -> Syfer table)")]
        config: Option<PathBuf>,

        #[arg(long, help = "Perform a dry run without making changes")]
        dry_run: bool,

        #[arg(short, long, help = "Interactive mode - prompt for each change")]
        interactive: bool,
    },

    #[command(about = "Print the effective replacement table in application order")]
    Rules {
        #[arg(short, long, help = "TOML configuration file (defaults to the built-in Void -> Syfer table)")]
        config: Option<PathBuf>,
    },

    #[command(about = "Validate a configuration file")]
    CheckConfig {
        #[arg(help = "TOML configuration file to validate")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_apply_command() {
        let args = vec![
            "rebrand",
            "apply",
            "/path/to/fork",
            "--config",
            "rebrand.toml",
            "--dry-run",
        ];

        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Apply { target, config, dry_run, interactive } => {
                assert_eq!(target, Some(PathBuf::from("/path/to/fork")));
                assert_eq!(config, Some(PathBuf::from("rebrand.toml")));
                assert!(dry_run);
                assert!(!interactive);
            }
            _ => panic!("Expected Apply command"),
        }
    }

    #[test]
    fn test_apply_defaults() {
        let cli = Cli::try_parse_from(vec!["rebrand", "apply", "-i", "-v"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Apply { target, config, dry_run, interactive } => {
                assert_eq!(target, None);
                assert_eq!(config, None);
                assert!(!dry_run);
                assert!(interactive);
            }
            _ => panic!("Expected Apply command"),
        }
    }

    #[test]
    fn test_rules_command() {
        let cli = Cli::try_parse_from(vec!["rebrand", "rules", "-c", "custom.toml"]).unwrap();

        match cli.command {
            Commands::Rules { config } => {
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
            }
            _ => panic!("Expected Rules command"),
        }
    }

    #[test]
    fn test_check_config_command() {
        let cli = Cli::try_parse_from(vec!["rebrand", "check-config", "custom.toml"]).unwrap();

        match cli.command {
            Commands::CheckConfig { file } => {
                assert_eq!(file, PathBuf::from("custom.toml"));
            }
            _ => panic!("Expected CheckConfig command"),
        }
    }

    #[test]
    fn test_check_config_requires_file() {
        assert!(Cli::try_parse_from(vec!["rebrand", "check-config"]).is_err());
    }
}
