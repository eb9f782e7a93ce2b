mod cli;
mod diff;

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use rebrand_core::{ConsoleReporter, RebrandConfig, RebrandOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    setup_logging(&cli)?;

    info!("Starting rebrand");

    match cli.command {
        Commands::Apply {
            target,
            config,
            dry_run,
            interactive,
        } => {
            handle_apply_command(target, config, dry_run, interactive)?;
        }
        Commands::Rules { config } => {
            handle_rules_command(config)?;
        }
        Commands::CheckConfig { file } => {
            handle_check_config_command(&file)?;
        }
    }

    Ok(())
}

fn load_config(config: Option<&Path>) -> Result<RebrandConfig> {
    match config {
        Some(path) => {
            info!("Config file: {:?}", path);
            RebrandConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => {
            info!("Using built-in Void -> Syfer config");
            RebrandConfig::builtin().context("Built-in config is invalid")
        }
    }
}

fn handle_apply_command(
    target: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
    interactive: bool,
) -> Result<()> {
    let target_dir = match target {
        Some(target) => target,
        None => std::env::current_dir()?,
    };

    info!("Target directory: {:?}", target_dir);
    info!("Interactive mode: {}", interactive);

    if dry_run {
        warn!("Dry run mode - no changes will be made");
    }

    if !target_dir.exists() {
        anyhow::bail!("Target directory does not exist: {:?}", target_dir);
    }

    if !target_dir.is_dir() {
        anyhow::bail!("Target must be a directory: {:?}", target_dir);
    }

    let config = load_config(config.as_deref())?;
    let table = config.replacement_table()?;
    let filter = config.path_filter()?;
    let options = RebrandOptions { dry_run };
    let mut reporter = ConsoleReporter::stdout(dry_run);

    if interactive {
        let callback = |file_path: &Path, old_content: &str, new_content: &str, description: &str| {
            diff::show_diff_and_confirm(file_path, old_content, new_content, description)
        };

        rebrand_core::rebrand_directory_interactive(
            &target_dir,
            &table,
            &filter,
            &options,
            &mut reporter,
            callback,
        )?;
    } else {
        rebrand_core::rebrand_directory(&target_dir, &table, &filter, &options, &mut reporter)?;
    }

    Ok(())
}

fn handle_rules_command(config: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let table = config.replacement_table()?;

    for (i, rule) in table.iter().enumerate() {
        if rule.excluded_extensions().is_empty() {
            println!("{:>3}. {} -> {}", i + 1, rule.old(), rule.new_text());
        } else {
            println!(
                "{:>3}. {} -> {} (except {})",
                i + 1,
                rule.old(),
                rule.new_text(),
                rule.excluded_extensions().join(", ")
            );
        }
    }

    Ok(())
}

fn handle_check_config_command(file: &Path) -> Result<()> {
    let config = load_config(Some(file))?;
    let table = config.replacement_table()?;
    let filter = config.path_filter()?;
    let filter = filter.config();

    println!("Config is valid: {}", file.display());
    println!("  Rules: {}", table.len());
    if table.merged_duplicates() > 0 {
        println!("  Duplicate tokens merged: {}", table.merged_duplicates());
    }
    println!("  Skipped directories: {}", filter.skip_dir_names.len());
    println!("  Allowed extensions: {}", filter.allowed_extensions.len());
    println!("  Allowed exact names: {}", filter.allowed_exact_names.len());

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact()
        )
        .with(filter)
        .init();

    Ok(())
}
