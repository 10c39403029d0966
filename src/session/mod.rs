//! One computation pass over a pair of line-oriented streams.

use std::io::{BufRead, Write};
use std::num::NonZeroU64;

use crate::common::error::Result;
use crate::common::types::{Computation, Operand, OutputFormat};
use crate::input;
use crate::math;

/// Compute the GCD/LCM record for two validated operands.
pub fn evaluate(m: NonZeroU64, n: NonZeroU64) -> Computation {
    let gcd = math::gcd(m.get(), n.get());
    let lcm = math::lcm(m.get(), n.get(), gcd);

    Computation {
        m: m.get(),
        n: n.get(),
        gcd,
        lcm,
    }
}

/// A single read-validate-compute-print pass.
///
/// The operands are read in order and the first invalid one aborts the run:
/// when `m` is rejected the second line is never read. Nothing is written
/// until both operands are valid.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, format: OutputFormat) -> Self {
        Session {
            reader,
            writer,
            format,
        }
    }

    /// Run the session to completion, returning the computation on success.
    pub fn run(&mut self) -> Result<Computation> {
        let m = input::read_operand(&mut self.reader, Operand::M)?;
        let n = input::read_operand(&mut self.reader, Operand::N)?;

        let computation = evaluate(m, n);
        self.write_result(&computation)?;

        Ok(computation)
    }

    fn write_result(&mut self, computation: &Computation) -> Result<()> {
        match self.format {
            OutputFormat::Plain(notation) => {
                writeln!(self.writer, "{}", computation.gcd)?;
                writeln!(self.writer, "{}", notation.render(computation.lcm))?;
            }
            OutputFormat::Json => {
                let encoded = serde_json::to_string(computation)?;
                writeln!(self.writer, "{}", encoded)?;
            }
        }

        Ok(())
    }
}
