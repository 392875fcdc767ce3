use std::io::BufRead;

use eyre::{ensure, Result, WrapErr};
use treesim_core_rs::{Symbol, SymbolTable};

/// Feed every non-empty line of the reader into `f` together with its 1-based line number.
/// The line terminator (`\n` or `\r\n`) is removed, lines consisting only of whitespace are
/// skipped.
pub(crate) fn for_each(
    mut reader: impl BufRead,
    mut f: impl FnMut(usize, &str) -> Result<()>,
) -> Result<()> {
    let mut buffer = String::new();
    let mut lineno = 0;
    loop {
        buffer.clear();
        lineno += 1;
        let read = reader
            .read_line(&mut buffer)
            .wrap_err_with(|| format!("Failed to read line {lineno}"))?;
        if read == 0 {
            return Ok(());
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        f(lineno, line).wrap_err_with(|| format!("Malformed line {lineno}: {line:?}"))?;
    }
}

/// Comma separated tokens of the line. Surrounding whitespace is trimmed, consecutive
/// separators are collapsed.
pub(crate) fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim).filter(|x| !x.is_empty())
}

/// Intern the token as a symbol. The gap placeholder is reserved for alignment tracks.
pub(crate) fn symbol(table: &mut SymbolTable, token: &str) -> Result<Symbol> {
    ensure!(
        token != Symbol::GAP,
        "{:?} is reserved for alignment gaps and cannot be used as a symbol",
        Symbol::GAP
    );
    Ok(table.intern(token))
}
