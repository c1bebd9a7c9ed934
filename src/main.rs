use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomata::cli::args::{Cli, Commands};
use tomata::cli::commands;
use tomata::config::Config;
use tomata::error::TomataError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomataError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            tomata::tui::run(&config)?;
            String::new()
        }
        Commands::Log(args) => commands::log(&config, &args, format)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
