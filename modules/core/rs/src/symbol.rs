use std::borrow::Borrow;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use ahash::HashSet;

static GAP: LazyLock<Symbol> = LazyLock::new(|| Symbol(Arc::from(Symbol::GAP)));

/// An immutable, cheaply clonable sequence token (e.g. a category label).
///
/// Symbols produced by the same [`SymbolTable`] share their backing storage, so the equality check
/// usually resolves on the pointer comparison. Symbols from different tables (or created directly
/// with [`Symbol::new`]) still compare by value.
#[derive(Clone, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Textual representation of the gap placeholder in alignment tracks.
    pub const GAP: &'static str = "-";

    /// Create a standalone (non-interned) symbol.
    pub fn new(token: &str) -> Self {
        Self(Arc::from(token))
    }

    /// The shared gap placeholder.
    pub fn gap() -> Self {
        GAP.clone()
    }

    pub fn is_gap(&self) -> bool {
        &*self.0 == Self::GAP
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &*self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Deduplicating storage for symbols. All tables and sequences of a single run should be read
/// through one table to make symbol comparisons pointer-cheap.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: HashSet<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared symbol for the given token, creating it on first use.
    pub fn intern(&mut self, token: &str) -> Symbol {
        if let Some(existing) = self.symbols.get(token) {
            return existing.clone();
        }
        let symbol = Symbol::new(token);
        self.symbols.insert(symbol.clone());
        symbol
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
