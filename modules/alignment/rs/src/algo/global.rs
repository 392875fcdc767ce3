use derive_more::Constructor;

use super::{traceback, Algorithm};
use crate::scoring::Scheme;
use crate::{Alignable, AlignmentResult, Gap, ScratchMemory};

/// Needleman-Wunsch-style global alignment: both sequences are aligned end-to-end and the score
/// is read from the bottom-right cell of the matrix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Constructor)]
pub struct Global {
    scores_only: bool,
}

impl Global {
    /// Whether the traceback is skipped and only the score is reported.
    pub fn scores_only(&self) -> bool {
        self.scores_only
    }
}

impl Algorithm for Global {
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
        let gap = scheme.gap_penalty();

        // Everything is aligned against gaps
        if rows == 0 || cols == 0 {
            return AlignmentResult::scores_only(0.0 - (rows + cols) as f64 * gap);
        }

        scratch.reset(rows + 1, cols + 1);
        for i in 1..=rows {
            scratch.record(i, 0, -(i as f64) * gap, (i - 1, 0));
        }
        for j in 1..=cols {
            scratch.record(0, j, -(j as f64) * gap, (0, j - 1));
        }

        for i in 1..=rows {
            let s1 = seq1.at(i - 1);
            for j in 1..=cols {
                let diag = scratch.score(i - 1, j - 1) + scheme.distance(s1, seq2.at(j - 1));
                let up = scratch.score(i - 1, j) - gap;
                let left = scratch.score(i, j - 1) - gap;

                // Ties: diagonal > up > left
                let (score, from) = if diag >= up && diag >= left {
                    (diag, (i - 1, j - 1))
                } else if up >= left {
                    (up, (i - 1, j))
                } else {
                    (left, (i, j - 1))
                };
                scratch.record(i, j, score, from);
            }
        }

        let score = scratch.score(rows, cols);
        debug_assert!(score.is_finite(), "Non-finite global alignment score: {score}");

        if self.scores_only {
            return AlignmentResult::scores_only(score);
        }

        let alignment = traceback::trace(scratch, scheme, seq1, seq2, (rows, cols), |cur, _| {
            cur != (0, 0)
        });
        AlignmentResult::new(score, alignment)
    }
}
