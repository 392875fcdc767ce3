use treesim_alignment_rs::algo::{Aligner, Algorithm};
use treesim_alignment_rs::scoring::Scheme;
use treesim_alignment_rs::ScratchMemory;
use treesim_core_rs::Symbol;

/// Normalise the raw alignment score by the length of the shorter sequence:
/// `raw² / min(len1, len2)²`. Pairs with an empty sequence score 0.
#[inline(always)]
pub fn normalize(raw: f64, len1: usize, len2: usize) -> f64 {
    let shortest = len1.min(len2);
    if shortest == 0 {
        return 0.0;
    }
    let shortest = shortest as f64;
    (raw * raw) / (shortest * shortest)
}

/// Per-thread state of the batch: the private scratch memory and the buffer with scores of the
/// currently processed chunk.
#[derive(Debug, Default)]
pub struct Worker {
    scratch: ScratchMemory,
    scores: Vec<f64>,
    aligned: usize,
}

impl Worker {
    /// Align `query` against every target and return the normalised scores in the targets order.
    pub fn process<S>(
        &mut self,
        aligner: &Aligner,
        query: &[Symbol],
        targets: &[Vec<Symbol>],
        scheme: &S,
    ) -> &[f64]
    where
        S: Scheme<Symbol = Symbol> + ?Sized,
    {
        self.scores.clear();
        for target in targets {
            let result = aligner.align(query, target.as_slice(), scheme, &mut self.scratch);
            if log::log_enabled!(log::Level::Trace) {
                let (track1, track2) = result.alignment();
                log::trace!(
                    "Score {}: {:?} | {:?}",
                    result.score(),
                    track1,
                    track2
                );
            }
            self.scores
                .push(normalize(*result.score(), query.len(), target.len()));
        }
        self.aligned += targets.len();
        &self.scores
    }

    /// Number of pairs aligned since the last call.
    pub fn take_aligned(&mut self) -> usize {
        std::mem::take(&mut self.aligned)
    }
}
