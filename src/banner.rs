use crate::error::Error;
use std::io::{self, Write};

static DEFAULT_COL: usize = 80;

/// Width of the terminal behind stderr, or 80 columns when there is none.
pub fn terminal_width() -> usize {
    term_size::dimensions_stderr()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_COL)
}

/// Writes `mid` centred in a `---> mid <---` line of `col` columns.
pub fn write_banner<W: Write>(mid: &str, col: usize, out: &mut W) -> io::Result<()> {
    let occupied = 4 + mid.len();
    let n1 = if occupied >= col {
        0
    } else {
        (col - occupied) / 2
    };
    let occupied = occupied + n1;
    let n2 = if occupied >= col { 0 } else { col - occupied };
    writeln!(out, "{}> {} <{}", "-".repeat(n1), mid, "-".repeat(n2))
}

pub fn report<W: Write>(err: &Error, out: &mut W) -> io::Result<()> {
    write_banner("error", terminal_width(), out)?;
    writeln!(out, "{err}")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Expected;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn banner(mid: &str, col: usize) -> String {
        let mut out = Vec::new();
        write_banner(mid, col, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn centred() {
        assert_eq!(banner("error", 20), "-----> error <------\n");
        assert_eq!(banner("ab", 10), "--> ab <--\n");
    }

    #[test]
    fn narrower_than_text() {
        assert_eq!(banner("error", 5), "> error <\n");
    }

    #[test]
    fn report_ends_with_message() {
        let mut out = Vec::new();
        report(&Error::UnexpectedEndOfInput(Expected::Count), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().contains("> error <"));
        assert_eq!(
            lines.next(),
            Some("unexpected end of input while reading the element count")
        );
        assert_eq!(lines.next(), None);
    }
}
