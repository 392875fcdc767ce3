use treesim_alignment_rs::algo::{Algorithm, Global};
use treesim_alignment_rs::scoring::Identity;
use treesim_alignment_rs::ScratchMemory;
use treesim_core_rs::Symbol;

use super::{identity, star, symbols};

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: f64,
    alignment: (&'a [u8], &'a [u8]),
}

fn ensure(scheme: &Identity<u8>, workload: &[Workload<'_>]) {
    let aligner = Global::new(false);
    let mut scratch = ScratchMemory::new();

    for w in workload {
        let result = aligner.align(w.seq1, w.seq2, scheme, &mut scratch);
        assert_eq!(*result.score(), w.score, "{:?} vs {:?}", w.seq1, w.seq2);
        assert_eq!(
            result.alignment(),
            &(w.alignment.0.to_vec(), w.alignment.1.to_vec()),
            "{:?} vs {:?}",
            w.seq1,
            w.seq2
        );
    }
}

#[test]
fn test_identical_sequences() {
    let scheme: Identity<Symbol> = Identity::new(1.0, 0.0, 1.0);
    let seq = symbols(&["x", "y", "z"]);

    let result = Global::new(false).align(&seq, &seq, &scheme, &mut ScratchMemory::new());
    assert_eq!(*result.score(), 3.0);
    assert_eq!(result.alignment(), &(seq.clone(), seq.clone()));
}

#[test]
fn test_single_mismatch() {
    let scheme = identity(-1.0, 1.0);
    let result = Global::new(false).align(&b"x"[..], &b"y"[..], &scheme, &mut ScratchMemory::new());

    // max(-1, -1 - 1, -1 - 1)
    assert_eq!(*result.score(), -1.0);
    assert_eq!(result.alignment(), &(b"x".to_vec(), b"x".to_vec()));
}

#[test]
fn test_gaps() {
    ensure(
        &identity(0.0, 1.0),
        &[
            Workload {
                seq1: b"xyz",
                seq2: b"xz",
                score: 1.0,
                alignment: (b"xyz", b"x-z"),
            },
            Workload {
                seq1: b"xz",
                seq2: b"xyz",
                score: 1.0,
                // Gap columns still carry the consensus of the two cells
                alignment: (b"x-z", b"xxz"),
            },
            // Diagonal wins the tie against the left move
            Workload {
                seq1: b"x",
                seq2: b"xx",
                score: 0.0,
                alignment: (b"-x", b"xx"),
            },
        ],
    );
}

#[test]
fn test_leading_gaps_reach_the_origin() {
    ensure(
        &identity(-5.0, 1.0),
        &[Workload {
            seq1: b"ab",
            seq2: b"cdab",
            score: 0.0,
            alignment: (b"--ab", b"cdab"),
        }],
    );
}

#[test]
fn test_up_wins_tie_with_left() {
    // The last cell is reached from above and from the left with the same score of -1
    ensure(
        &identity(-5.0, 1.0),
        &[Workload {
            seq1: b"ab",
            seq2: b"ba",
            score: -1.0,
            alignment: (b"-ab", b"ba-"),
        }],
    );
}

#[test]
fn test_empty_sequences() {
    let aligner = Global::new(false);
    let scheme = identity(0.0, 1.5);
    let mut scratch = ScratchMemory::new();

    for (seq1, seq2, score) in [
        (&b""[..], &b"xyz"[..], -4.5),
        (&b"xy"[..], &b""[..], -3.0),
        (&b""[..], &b""[..], 0.0),
    ] {
        let result = aligner.align(seq1, seq2, &scheme, &mut scratch);
        assert_eq!(*result.score(), score);
        assert!(result.is_empty());
    }
}

#[test]
fn test_scores_only() {
    let scheme = identity(0.0, 1.0);
    let mut scratch = ScratchMemory::new();

    let full = Global::new(false).align(&b"xyz"[..], &b"xz"[..], &scheme, &mut scratch);
    let fast = Global::new(true).align(&b"xyz"[..], &b"xz"[..], &scheme, &mut scratch);
    assert_eq!(full.score(), fast.score());
    assert!(!full.is_empty());
    assert!(fast.is_empty());
}

#[test]
fn test_tree_path_consensus() {
    let scheme = star();
    let (seq1, seq2) = (symbols(&["x", "y", "z"]), symbols(&["x", "z"]));

    let result = Global::new(false).align(&seq1, &seq2, &scheme, &mut ScratchMemory::new());
    assert_eq!(*result.score(), 1.0);
    assert_eq!(
        result.alignment(),
        &(symbols(&["x", "root", "z"]), symbols(&["x", "-", "z"]))
    );
}

#[test]
fn test_swapped_sequences_mirror_each_other() {
    let scheme = star();
    let (seq1, seq2) = (symbols(&["x", "y", "z"]), symbols(&["x", "z"]));
    let mut scratch = ScratchMemory::new();

    let forward = Global::new(false).align(&seq1, &seq2, &scheme, &mut scratch);
    let backward = Global::new(false).align(&seq2, &seq1, &scheme, &mut scratch);

    assert_eq!(forward.score(), backward.score());
    let (_, (f1, f2)) = forward.dissolve();
    let (_, (b1, b2)) = backward.dissolve();
    assert_eq!((f1, f2), (b2, b1));
}
