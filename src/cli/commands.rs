use std::io;
use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::common::types::{Operand, OutputFormat};
use crate::common::Config;
use crate::input;
use crate::session::{self, Session};

pub struct CommandExecutor {
    config: Config,
}

impl CommandExecutor {
    pub fn new(config: Config) -> Self {
        CommandExecutor { config }
    }

    /// Run the default session: two operand lines from stdin, two result
    /// lines to stdout.
    pub fn run_session(&self, json: bool) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();

        let mut session = Session::new(stdin.lock(), stdout.lock(), self.output_format(json));
        session.run()?;

        Ok(())
    }

    /// Compute directly from command-line operands
    pub fn compute(&self, m_raw: &str, n_raw: &str, json: bool) -> Result<()> {
        let m = input::parse_positive(m_raw, Operand::M)?;
        let n = input::parse_positive(n_raw, Operand::N)?;
        let computation = session::evaluate(m, n);

        match self.output_format(json) {
            OutputFormat::Plain(notation) => {
                println!("{}", computation.gcd);
                println!("{}", notation.render(computation.lcm));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&computation)?);
            }
        }

        Ok(())
    }

    /// Compute and pretty-print a pair for the interactive shell
    pub fn compute_pretty(&self, m_raw: &str, n_raw: &str) -> Result<()> {
        let m = input::parse_positive(m_raw, Operand::M)?;
        let n = input::parse_positive(n_raw, Operand::N)?;
        let computation = session::evaluate(m, n);

        let notation = self.config.output.notation;
        println!("{}", format!("🧮 {} and {}", m, n).bold());
        println!("   GCD: {}", computation.gcd.to_string().bright_cyan());
        println!(
            "   LCM: {}",
            notation.render(computation.lcm).bright_cyan()
        );

        Ok(())
    }

    pub fn config_show(&self) {
        println!("{}", "⚙️  Configuration".bold());
        println!(
            "   Notation: {}",
            self.config.output.notation.to_string().bright_green()
        );
        println!("   REPL prompt: {}", self.config.repl.prompt);
        println!("   REPL history: {}", self.config.repl.history);
    }

    pub fn config_init(&self, path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Refusing to overwrite existing config at {:?}", path);
        }

        Config::default().save(path)?;

        println!("{}", "✅ Default configuration written".green());
        println!("   Path: {}", path.display());

        Ok(())
    }

    pub fn show_help(&self) {
        println!("{}", "Available Commands:".bold().underline());
        println!();
        println!(
            "  {}  {}",
            "<m> <n>".cyan(),
            "Compute the GCD and LCM of two positive integers"
        );
        println!("  {}  {}", "help".cyan(), "Show this help message");
        println!("  {}  {}", "exit/quit".cyan(), "Exit the shell");
    }

    fn output_format(&self, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain(self.config.output.notation)
        }
    }
}
