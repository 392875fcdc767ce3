pub use identity::Identity;
pub use tree_path::TreePath;

use impl_tools::autoimpl;

mod identity;
mod tree_path;

/// Scoring scheme for the linear-gap alignment algorithms.
///
/// Implementations are shared read-only between all workers of a batch, hence the methods take
/// `&self` and the schemes are expected to be `Sync` when used in parallel.
#[autoimpl(for<T: trait + ?Sized> &T, Box<T>)]
pub trait Scheme {
    type Symbol;

    /// Similarity of two symbols, higher is more similar. Negative values are regular (low)
    /// scores, e.g. for incomparable symbols.
    fn distance(&self, a: &Self::Symbol, b: &Self::Symbol) -> f64;

    /// Non-negative cost of aligning a single symbol against a gap.
    fn gap_penalty(&self) -> f64;

    /// Symbol emitted into the alignment tracks when `a` and `b` are aligned to each other.
    fn consensus(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::Symbol;

    /// Whether the scheme has any information about the symbol. Unknown symbols are still scored,
    /// but only as incomparable to everything except themselves.
    fn knows(&self, _symbol: &Self::Symbol) -> bool {
        true
    }
}
