//! Reads the element count and the value list, then writes the list back
//! last-read first.

use crate::error::{Error, Expected, Result};
use crate::scanner::Scanner;
use log::debug;
use std::io::{BufRead, Write};

/// Largest element count accepted on input.
pub const MAX_COUNT: usize = 1 << 20;

/// Reads the leading count and checks it against `max`.
pub fn read_count<R: BufRead>(scan: &mut Scanner<R>, max: usize) -> Result<usize> {
    let count: i64 = scan
        .tok()?
        .ok_or(Error::UnexpectedEndOfInput(Expected::Count))?;
    match usize::try_from(count) {
        Ok(n) if n <= max => Ok(n),
        _ => Err(Error::InvalidCount { count, max }),
    }
}

/// Reads exactly `count` integers in input order.
pub fn read_values<R: BufRead>(scan: &mut Scanner<R>, count: usize) -> Result<Vec<i32>> {
    (0..count)
        .map(|index| {
            scan.tok()?
                .ok_or(Error::UnexpectedEndOfInput(Expected::Value { index, count }))
        })
        .collect()
}

/// Copy of `values` in reverse order.
pub fn reversed<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().rev().cloned().collect()
}

/// Writes every value followed by a comma, then a newline.
pub fn write_terminated<W: Write>(out: &mut W, values: &[i32]) -> Result<()> {
    for value in values {
        write!(out, "{value},")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn solve<R: BufRead, W: Write>(scan: &mut Scanner<R>, out: &mut W) -> Result<()> {
    solve_with_max(scan, out, MAX_COUNT)
}

/// Nothing reaches `out` unless the count and all values were read.
pub fn solve_with_max<R: BufRead, W: Write>(
    scan: &mut Scanner<R>,
    out: &mut W,
    max: usize,
) -> Result<()> {
    let count = read_count(scan, max)?;
    debug!("reading {count} values");
    let values = read_values(scan, count)?;
    debug!(
        "read {} values from {} tokens",
        values.len(),
        scan.position()
    );
    write_terminated(out, &reversed(&values))?;
    out.flush()?;
    Ok(())
}
