use std::marker::PhantomData;

use super::Scheme;

/// Flat match/mismatch scheme. The consensus of two symbols is always the first one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Identity<Symbol> {
    pub equal: f64,
    pub different: f64,
    pub gap: f64,
    _phantom: PhantomData<fn() -> Symbol>,
}

impl<Symbol> Identity<Symbol> {
    pub fn new(equal: f64, different: f64, gap: f64) -> Self {
        Self {
            equal,
            different,
            gap,
            _phantom: PhantomData,
        }
    }
}

impl<Symbol: PartialEq + Clone> Scheme for Identity<Symbol> {
    type Symbol = Symbol;

    #[inline(always)]
    fn distance(&self, a: &Self::Symbol, b: &Self::Symbol) -> f64 {
        if a == b {
            self.equal
        } else {
            self.different
        }
    }

    #[inline(always)]
    fn gap_penalty(&self) -> f64 {
        self.gap
    }

    #[inline(always)]
    fn consensus(&self, a: &Self::Symbol, _: &Self::Symbol) -> Self::Symbol {
        a.clone()
    }
}
