use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

/// Outcome of a single pairwise alignment: the optimal score and, unless only scores were
/// requested, two equally long tracks with gaps marked by the [`Gap`](crate::Gap) placeholder.
#[derive(Clone, PartialEq, Debug, Default, Constructor, Dissolve, Getters)]
pub struct AlignmentResult<Symbol> {
    score: f64,
    alignment: (Vec<Symbol>, Vec<Symbol>),
}

impl<Symbol> AlignmentResult<Symbol> {
    /// Result without alignment tracks.
    pub fn scores_only(score: f64) -> Self {
        Self {
            score,
            alignment: (Vec::new(), Vec::new()),
        }
    }

    /// Number of alignment columns (0 if the traceback was skipped).
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.alignment.0.len(), self.alignment.1.len());
        self.alignment.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
