//! Line-oriented reading and validation of the two operands.

use std::io::BufRead;
use std::num::NonZeroU64;

use crate::common::error::{EuclidError, Result};
use crate::common::types::Operand;

/// Parse one input line as a strictly positive integer.
///
/// Surrounding whitespace (the trailing newline included) is ignored. Every
/// rejected value reports the same way: values that do not parse as an
/// integer, zero, negatives, and values beyond `u64::MAX`.
pub fn parse_positive(raw: &str, operand: Operand) -> Result<NonZeroU64> {
    raw.trim()
        .parse::<NonZeroU64>()
        .map_err(|_| EuclidError::InvalidInput(operand))
}

/// Read the next line from `reader` and validate it as `operand`.
///
/// A stream that ends before yielding a line is reported as unexpected EOF
/// rather than as an invalid value.
pub fn read_operand<R: BufRead>(reader: &mut R, operand: Operand) -> Result<NonZeroU64> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)?;
    if bytes == 0 {
        return Err(EuclidError::UnexpectedEof(operand));
    }

    parse_positive(&line, operand)
}
