use clap::Parser;
use colored::*;
use euclid_cli::cli::{run_cli, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        eprintln!("{} {}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
