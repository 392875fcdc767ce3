use std::io::BufRead;

use eyre::Result;
use treesim_core_rs::{Symbol, SymbolTable};

use crate::lines;

/// One sequence of comma separated symbols per non-empty line.
pub fn read_sequences(reader: impl BufRead, table: &mut SymbolTable) -> Result<Vec<Vec<Symbol>>> {
    let mut sequences = Vec::new();
    lines::for_each(reader, |lineno, line| {
        let sequence = lines::tokens(line)
            .map(|x| lines::symbol(table, x))
            .collect::<Result<Vec<_>>>()?;
        if sequence.is_empty() {
            log::warn!("Line {lineno} contains only separators and yields an empty sequence");
        }
        sequences.push(sequence);
        Ok(())
    })?;

    log::debug!(
        "Read {} sequences ({} symbols in total)",
        sequences.len(),
        sequences.iter().map(Vec::len).sum::<usize>()
    );
    Ok(sequences)
}
