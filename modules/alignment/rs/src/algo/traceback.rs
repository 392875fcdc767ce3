use crate::scoring::Scheme;
use crate::{Alignable, Gap, ScratchMemory};

/// Symbol emitted for a step that leaves the cell (row, col). Cells on the matrix boundary have
/// no counterpart in the other sequence, the consumed symbol itself is emitted for them.
#[inline(always)]
fn emit<S, Seq1, Seq2>(scheme: &S, seq1: &Seq1, seq2: &Seq2, row: usize, col: usize) -> S::Symbol
where
    S: Scheme + ?Sized,
    S::Symbol: Gap,
    Seq1: Alignable<Symbol = S::Symbol> + ?Sized,
    Seq2: Alignable<Symbol = S::Symbol> + ?Sized,
{
    match (row, col) {
        (0, col) => seq2.at(col - 1).clone(),
        (row, 0) => seq1.at(row - 1).clone(),
        (row, col) => scheme.consensus(seq1.at(row - 1), seq2.at(col - 1)),
    }
}

/// Follow the recorded predecessors from `start` for as long as `proceed(current, predecessor)`
/// holds and return the alignment tracks in the left-to-right order.
///
/// A step that keeps the row unchanged is a gap in the first track, a step that keeps the column
/// unchanged is a gap in the second one.
pub(super) fn trace<S, Seq1, Seq2>(
    scratch: &ScratchMemory,
    scheme: &S,
    seq1: &Seq1,
    seq2: &Seq2,
    start: (usize, usize),
    proceed: impl Fn((usize, usize), (usize, usize)) -> bool,
) -> (Vec<S::Symbol>, Vec<S::Symbol>)
where
    S: Scheme + ?Sized,
    S::Symbol: Gap,
    Seq1: Alignable<Symbol = S::Symbol> + ?Sized,
    Seq2: Alignable<Symbol = S::Symbol> + ?Sized,
{
    let capacity = seq1.len() + seq2.len();
    let (mut track1, mut track2) = (Vec::with_capacity(capacity), Vec::with_capacity(capacity));

    let mut current = start;
    let mut next = scratch.predecessor(current.0, current.1);
    while proceed(current, next) {
        let (row, col) = current;
        match (next.0 == row, next.1 == col) {
            (true, true) => {
                track1.push(S::Symbol::gap());
                track2.push(S::Symbol::gap());
            }
            (true, false) => {
                track1.push(S::Symbol::gap());
                track2.push(emit(scheme, seq1, seq2, row, col));
            }
            (false, true) => {
                track1.push(emit(scheme, seq1, seq2, row, col));
                track2.push(S::Symbol::gap());
            }
            (false, false) => {
                let symbol = emit(scheme, seq1, seq2, row, col);
                track1.push(symbol.clone());
                track2.push(symbol);
            }
        }

        current = next;
        next = scratch.predecessor(current.0, current.1);
    }

    track1.reverse();
    track2.reverse();
    (track1, track2)
}
