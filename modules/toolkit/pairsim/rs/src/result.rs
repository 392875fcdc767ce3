use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Statistics of a finished batch.
#[derive(Clone, PartialEq, Debug, Default, Constructor, Dissolve, Getters)]
pub struct Summary {
    /// Number of processed sequences from the first set
    rows: usize,
    /// Number of aligned pairs (= emitted scores)
    pairs: usize,
    /// Wall time in seconds
    elapsed_s: f64,
}
