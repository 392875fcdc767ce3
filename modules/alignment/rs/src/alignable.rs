use treesim_core_rs::Symbol;

/// Random-access sequence of symbols that can be aligned.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    /// Returns the symbol at the given (zero-based) position.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T> Alignable for [T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

/// Symbols that have a dedicated placeholder for gaps in alignment tracks.
pub trait Gap: Clone {
    fn gap() -> Self;
}

impl Gap for Symbol {
    #[inline(always)]
    fn gap() -> Self {
        Symbol::gap()
    }
}

impl Gap for u8 {
    #[inline(always)]
    fn gap() -> Self {
        b'-'
    }
}

impl Gap for char {
    #[inline(always)]
    fn gap() -> Self {
        '-'
    }
}

impl Gap for String {
    fn gap() -> Self {
        Symbol::GAP.to_owned()
    }
}
