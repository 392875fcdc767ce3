use std::io::BufRead;

use ahash::{HashMap, HashMapExt};
use eyre::{ensure, Result, WrapErr};
use treesim_core_rs::{Symbol, SymbolTable};

use crate::lines;

/// Levels of the Euler tour entries: one non-negative integer per line.
pub fn read_levels(reader: impl BufRead) -> Result<Vec<u32>> {
    let mut levels = Vec::new();
    lines::for_each(reader, |_, line| {
        let line = line.trim();
        let level = line
            .parse::<u32>()
            .wrap_err_with(|| format!("Expected a non-negative integer level, got {line:?}"))?;
        levels.push(level);
        Ok(())
    })?;
    log::debug!("Read {} Euler tour levels", levels.len());
    Ok(levels)
}

/// Position of each symbol in the Euler tour, `symbol,index` per line. Every symbol may be listed
/// only once.
pub fn read_positions(
    reader: impl BufRead,
    table: &mut SymbolTable,
) -> Result<HashMap<Symbol, usize>> {
    let mut positions = HashMap::new();
    lines::for_each(reader, |_, line| {
        let tokens: Vec<&str> = lines::tokens(line).collect();
        ensure!(
            tokens.len() == 2,
            "Each line of the Euler positions must contain exactly two tokens: <symbol>,<index>"
        );

        let index = tokens[1]
            .parse::<usize>()
            .wrap_err_with(|| format!("Invalid Euler position: {:?}", tokens[1]))?;
        let symbol = lines::symbol(table, tokens[0])?;
        ensure!(
            !positions.contains_key(&symbol),
            "The Euler positions cannot contain duplicates: {symbol}"
        );
        positions.insert(symbol, index);
        Ok(())
    })?;
    log::debug!("Read {} Euler tour positions", positions.len());
    Ok(positions)
}

/// Lowest common ancestors of symbol pairs, `a,b,lca` per line.
pub fn read_lcas(
    reader: impl BufRead,
    table: &mut SymbolTable,
) -> Result<Vec<((Symbol, Symbol), Symbol)>> {
    let mut lcas = Vec::new();
    lines::for_each(reader, |_, line| {
        let tokens: Vec<&str> = lines::tokens(line).collect();
        ensure!(
            tokens.len() == 3,
            "The LCA requires three tokens (<a>,<b>,<lca>), got: {}",
            tokens.len()
        );
        lcas.push((
            (
                lines::symbol(table, tokens[0])?,
                lines::symbol(table, tokens[1])?,
            ),
            lines::symbol(table, tokens[2])?,
        ));
        Ok(())
    })?;
    log::debug!("Read {} LCA entries", lcas.len());
    Ok(lcas)
}
