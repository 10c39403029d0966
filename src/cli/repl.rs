use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::commands::CommandExecutor;
use crate::common::Config;

pub fn run_repl(config: Config) -> Result<()> {
    println!("{}", "🧮 euclid-cli interactive shell".bright_green().bold());
    println!("Enter two positive integers per line, 'help' for commands, 'exit' to quit\n");

    let history_enabled = config.repl.history;
    let prompt = config.repl.prompt.clone();
    let executor = CommandExecutor::new(config);

    let mut rl: DefaultEditor = DefaultEditor::new()?;

    // Load history if available
    let history_file = if history_enabled {
        dirs::home_dir().map(|h| h.join(".euclid-cli-history"))
    } else {
        None
    };

    if let Some(ref path) = history_file {
        let _ = rl.load_history(path);
    }

    loop {
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if line == "exit" || line == "quit" {
                    break;
                }

                if let Err(e) = handle_command(&executor, line) {
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_file {
        let _ = rl.save_history(path);
    }

    println!("{}", "Goodbye! 👋".bright_green());
    Ok(())
}

fn handle_command(executor: &CommandExecutor, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        ["help"] => executor.show_help(),
        [m, n] => executor.compute_pretty(m, n)?,
        _ => {
            eprintln!("Unknown command: {}", line);
            eprintln!("Enter two positive integers separated by whitespace, or 'help'");
        }
    }

    Ok(())
}
