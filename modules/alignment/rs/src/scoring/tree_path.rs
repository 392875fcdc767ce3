use ahash::{HashMap, HashMapExt, HashSet};
use eyre::{ensure, eyre, Result};
use treesim_core_rs::Symbol;

use super::Scheme;

/// Tree-path similarity of category symbols.
///
/// Symbols are vertices of a rooted tree given by its Euler tour: the `levels` of the tour
/// entries, the `positions` of every vertex in the tour, and the precomputed lowest common
/// ancestors of vertex pairs. Identical symbols score `1`, pairs without a known common ancestor
/// score `-1`, and everything else scores
/// `(1 + level(lca)) / (1 + level(lca) + depth(a) + depth(b))` with depths measured from the LCA.
#[derive(Debug, Clone)]
pub struct TreePath {
    gap: f64,
    levels: Vec<u32>,
    positions: HashMap<Symbol, usize>,
    // (min position, max position) -> (LCA, level of the LCA)
    lcas: HashMap<(usize, usize), (Symbol, u32)>,
    incomparable: Symbol,
}

impl TreePath {
    /// Score of pairs that have no common ancestor in the LCA table.
    pub const INCOMPARABLE: f64 = -1.0;

    pub fn new(
        gap: f64,
        levels: Vec<u32>,
        positions: HashMap<Symbol, usize>,
        lcas: impl IntoIterator<Item = ((Symbol, Symbol), Symbol)>,
    ) -> Result<Self> {
        ensure!(
            gap.is_finite() && gap >= 0.0,
            "Gap penalty must be a finite non-negative number, got {gap}"
        );

        let mut occupied = HashMap::with_capacity(positions.len());
        for (symbol, &pos) in positions.iter() {
            ensure!(
                pos < levels.len(),
                "Position {pos} of symbol {symbol} is outside of the levels table (N={})",
                levels.len()
            );
            if let Some(other) = occupied.insert(pos, symbol) {
                return Err(eyre!(
                    "Symbols {other} and {symbol} share the same position {pos}"
                ));
            }
        }

        let mut table: HashMap<(usize, usize), (Symbol, u32)> = HashMap::new();
        let mut skipped = 0;
        for ((a, b), lca) in lcas {
            let (Some(&posa), Some(&posb)) = (positions.get(&a), positions.get(&b)) else {
                skipped += 1;
                continue;
            };
            let &poslca = positions.get(&lca).ok_or_else(|| {
                eyre!("LCA {lca} of the pair ({a}, {b}) is missing in the positions table")
            })?;

            let level = levels[poslca];
            ensure!(
                level <= levels[posa] && level <= levels[posb],
                "LCA {lca} (level {level}) is deeper than one of the symbols ({a}, {b})"
            );

            let key = (posa.min(posb), posa.max(posb));
            match table.get(&key) {
                Some((existing, _)) if *existing != lca => {
                    return Err(eyre!(
                        "Conflicting LCAs for the pair ({a}, {b}): {existing} and {lca}"
                    ));
                }
                Some(_) => {}
                None => {
                    table.insert(key, (lca, level));
                }
            }
        }
        if skipped > 0 {
            log::warn!("Ignored {skipped} LCA entries referring to symbols without a position");
        }

        Ok(Self {
            gap,
            levels,
            positions,
            lcas: table,
            incomparable: Symbol::new(""),
        })
    }

    /// Symbols (deduplicated, in the order of appearance) that are absent in the positions
    /// table and therefore can only be scored as incomparable.
    pub fn unknown<'a>(&self, symbols: impl IntoIterator<Item = &'a Symbol>) -> Vec<Symbol> {
        let mut seen = HashSet::default();
        symbols
            .into_iter()
            .filter(|s| !self.knows(s) && seen.insert(*s))
            .cloned()
            .collect()
    }

    /// Symbol emitted as the consensus of incomparable pairs.
    pub fn incomparable(&self) -> &Symbol {
        &self.incomparable
    }

    #[inline(always)]
    fn lca(&self, a: &Symbol, b: &Symbol) -> Option<(usize, usize, &(Symbol, u32))> {
        let posa = *self.positions.get(a)?;
        let posb = *self.positions.get(b)?;
        self.lcas
            .get(&(posa.min(posb), posa.max(posb)))
            .map(|lca| (posa, posb, lca))
    }
}

impl Scheme for TreePath {
    type Symbol = Symbol;

    fn distance(&self, a: &Symbol, b: &Symbol) -> f64 {
        if a == b {
            return 1.0;
        }

        match self.lca(a, b) {
            None => Self::INCOMPARABLE,
            Some((posa, posb, (_, level))) => {
                let level = *level as f64;
                let deptha = self.levels[posa] as f64 - level;
                let depthb = self.levels[posb] as f64 - level;
                (1.0 + level) / (1.0 + level + deptha + depthb)
            }
        }
    }

    #[inline(always)]
    fn gap_penalty(&self) -> f64 {
        self.gap
    }

    fn knows(&self, symbol: &Symbol) -> bool {
        self.positions.contains_key(symbol)
    }

    fn consensus(&self, a: &Symbol, b: &Symbol) -> Symbol {
        if a == b {
            return a.clone();
        }
        match self.lca(a, b) {
            Some((_, _, (lca, _))) => lca.clone(),
            None => self.incomparable.clone(),
        }
    }
}
