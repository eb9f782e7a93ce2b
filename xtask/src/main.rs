use std::process;

use anyhow::Result;
use clap::{ArgMatches, Command};

const BIN_NAME: &str = "rebrand";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("install").about("Install rebrand binary locally"))
        .subcommand(
            Command::new("run")
                .about("Build and run rebrand with arguments")
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .arg(clap::Arg::new("args")
                    .help("Arguments to pass to rebrand")
                    .action(clap::ArgAction::Append)
                    .num_args(0..))
        )
        .subcommand(
            Command::new("test")
                .about("Test Operations")
                .subcommand(Command::new("all").about("Run all tests for the entire project"))
                .subcommand(Command::new("core").about("Run tests for rebrand-core"))
                .subcommand(Command::new("bin").about("Run tests for rebrand-bin"))
                .subcommand(Command::new("integration").about("Run the CLI against a scratch tree"))
        )
        .get_matches();

    match args.subcommand() {
        Some(("install", args)) => handle_install_command(args),
        Some(("run", args)) => handle_run_command(args),
        Some(("test", args)) => handle_test_commands(args),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn handle_install_command(_args: &ArgMatches) -> Result<()> {
    println!("Installing {}...", BIN_NAME);
    let status = process::Command::new("cargo")
        .args(["install", "--path", "crates/rebrand-bin"])
        .status()?;

    if status.success() {
        println!("✓ {} installed successfully", BIN_NAME);
    } else {
        anyhow::bail!("Failed to install {}", BIN_NAME);
    }

    Ok(())
}

fn handle_run_command(args: &ArgMatches) -> Result<()> {
    println!("Building and running {}...", BIN_NAME);

    let run_args: Vec<String> = args.get_many::<String>("args")
        .map_or(Vec::new(), |vals| vals.cloned().collect());

    let mut command = process::Command::new("cargo");
    command.args(["run", "--bin", BIN_NAME, "--"]);

    if !run_args.is_empty() {
        command.args(&run_args);
    }

    let status = command.status()?;

    if !status.success() {
        anyhow::bail!("Failed to run {}", BIN_NAME);
    }

    Ok(())
}

fn handle_test_commands(args: &ArgMatches) -> Result<()> {
    match args.subcommand() {
        Some(("all", _args)) => test_all(),
        Some(("core", _args)) => test_core(),
        Some(("bin", _args)) => test_bin(),
        Some(("integration", _args)) => test_integration(),
        _ => {
            println!("Available test commands:");
            println!("  all          - Run all tests for the entire project");
            println!("  core         - Run tests for rebrand-core");
            println!("  bin          - Run tests for rebrand-bin");
            println!("  integration  - Run the CLI against a scratch tree");
            Ok(())
        }
    }
}

fn test_all() -> Result<()> {
    println!("🧪 Running all tests for the rebrand project...\n");

    let suites: [(&str, fn() -> Result<()>); 4] = [
        ("rebrand-core", test_core_internal),
        ("rebrand-bin", test_bin_internal),
        ("documentation", test_docs_internal),
        ("integration", test_integration_internal),
    ];

    let mut all_passed = true;
    for (name, suite) in suites {
        println!("▶ Running {} tests...", name);
        match suite() {
            Ok(()) => println!("✅ {} tests passed", name),
            Err(e) => {
                all_passed = false;
                println!("❌ {} tests failed: {:?}", name, e);
            }
        }
        println!();
    }

    if all_passed {
        println!("🎉 All tests passed successfully!");
    } else {
        println!("💥 Some tests failed. Please check the output above.");
        anyhow::bail!("Test suite failed");
    }

    Ok(())
}

fn test_core() -> Result<()> {
    println!("🧪 Running rebrand-core tests...");
    test_core_internal()
}

fn test_bin() -> Result<()> {
    println!("🧪 Running rebrand-bin tests...");
    test_bin_internal()
}

fn test_integration() -> Result<()> {
    println!("🧪 Running integration tests...");
    test_integration_internal()
}

fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("{}", failure);
    }
    Ok(())
}

fn test_core_internal() -> Result<()> {
    cargo(&["test", "--package", "rebrand-core"], "Core tests failed")
}

fn test_bin_internal() -> Result<()> {
    cargo(&["test", "--package", "rebrand-bin"], "Binary tests failed")
}

fn test_docs_internal() -> Result<()> {
    cargo(&["test", "--doc", "--package", "rebrand-core"], "Documentation tests failed")
}

fn test_integration_internal() -> Result<()> {
    cargo(&["build", "--bin", BIN_NAME], "Failed to build rebrand binary")?;

    // Scratch tree under target/ so the run never touches the workspace sources.
    let scratch = std::path::Path::new("target/xtask-integration");
    if scratch.exists() {
        std::fs::remove_dir_all(scratch)?;
    }
    std::fs::create_dir_all(scratch.join("node_modules"))?;
    std::fs::write(scratch.join("a.ts"), "import voidSettingsService")?;
    std::fs::write(scratch.join("b.md"), "# Void Editor")?;
    std::fs::write(scratch.join("node_modules/c.ts"), "Void")?;

    let scratch_arg = scratch.to_string_lossy().to_string();
    cargo(
        &["run", "--bin", BIN_NAME, "--", "apply", &scratch_arg],
        "CLI apply command failed",
    )?;

    let expectations = [
        ("a.ts", "import syferSettingsService"),
        ("b.md", "# Syfer Editor"),
        ("node_modules/c.ts", "Void"),
    ];
    for (file, expected) in expectations {
        let actual = std::fs::read_to_string(scratch.join(file))?;
        if actual != expected {
            anyhow::bail!("{}: expected {:?}, found {:?}", file, expected, actual);
        }
    }

    cargo(&["run", "--bin", BIN_NAME, "--", "rules"], "CLI rules command failed")
}
