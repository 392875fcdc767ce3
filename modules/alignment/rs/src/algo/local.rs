use derive_more::Constructor;

use super::{traceback, Algorithm};
use crate::scoring::Scheme;
use crate::{Alignable, AlignmentResult, Gap, ScratchMemory};

/// Smith-Waterman-style local alignment: cells are floored at zero and the score is the maximum
/// over the whole matrix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor)]
pub struct Local {
    scores_only: bool,
}

impl Local {
    /// Whether the traceback is skipped and only the score is reported.
    pub fn scores_only(&self) -> bool {
        self.scores_only
    }
}

impl Algorithm for Local {
    fn align<S, Seq1, Seq2>(
        &self,
        seq1: &Seq1,
        seq2: &Seq2,
        scheme: &S,
        scratch: &mut ScratchMemory,
    ) -> AlignmentResult<S::Symbol>
    where
        S: Scheme + ?Sized,
        S::Symbol: Gap,
        Seq1: Alignable<Symbol = S::Symbol> + ?Sized,
        Seq2: Alignable<Symbol = S::Symbol> + ?Sized,
    {
        let (rows, cols) = (seq1.len(), seq2.len());
        if rows == 0 || cols == 0 {
            return AlignmentResult::scores_only(0.0);
        }

        let gap = scheme.gap_penalty();
        // First row & column stay zero, their predecessors are never followed
        scratch.reset(rows + 1, cols + 1);

        let (mut best_row, mut best_col, mut best) = (0, 0, 0.0);
        for i in 1..=rows {
            let s1 = seq1.at(i - 1);
            for j in 1..=cols {
                let diag = scratch.score(i - 1, j - 1) + scheme.distance(s1, seq2.at(j - 1));
                let up = scratch.score(i - 1, j) - gap;
                let left = scratch.score(i, j - 1) - gap;

                // Ties: diagonal > up > left > new local alignment
                let (score, from) = if diag >= up && diag >= left && diag >= 0.0 {
                    (diag, (i - 1, j - 1))
                } else if up >= left && up >= 0.0 {
                    (up, (i - 1, j))
                } else if left >= 0.0 {
                    (left, (i, j - 1))
                } else {
                    (0.0, (i, j))
                };
                scratch.record(i, j, score, from);

                if score > best {
                    (best_row, best_col, best) = (i, j, score);
                }
            }
        }
        debug_assert!(best.is_finite(), "Non-finite local alignment score: {best}");

        if self.scores_only {
            return AlignmentResult::scores_only(best);
        }

        // Stop at the origin of the local alignment (self-referencing cell) or at the boundary
        let alignment = traceback::trace(
            scratch,
            scheme,
            seq1,
            seq2,
            (best_row, best_col),
            |cur, next| cur != next && cur.0 > 0 && cur.1 > 0,
        );
        AlignmentResult::new(best, alignment)
    }
}
