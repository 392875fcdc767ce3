use treesim_alignment_rs::algo::{Algorithm, Local};
use treesim_alignment_rs::ScratchMemory;

use super::{identity, star, symbols};

#[test]
fn test_shared_core() {
    let scheme = identity(-1.0, 1.0);
    let result = Local::new(false).align(
        &b"aaxyzbb"[..],
        &b"ccxyzdd"[..],
        &scheme,
        &mut ScratchMemory::new(),
    );

    assert_eq!(*result.score(), 3.0);
    assert_eq!(result.alignment(), &(b"xyz".to_vec(), b"xyz".to_vec()));
}

#[test]
fn test_gap_inside_local_alignment() {
    let scheme = identity(-1.0, 0.5);
    let mut scratch = ScratchMemory::new();

    let result = Local::new(false).align(&b"xyz"[..], &b"xz"[..], &scheme, &mut scratch);
    assert_eq!(*result.score(), 1.5);
    assert_eq!(result.alignment(), &(b"xyz".to_vec(), b"x-z".to_vec()));

    let result = Local::new(true).align(&b"xyz"[..], &b"xz"[..], &scheme, &mut scratch);
    assert_eq!(*result.score(), 1.5);
    assert!(result.is_empty());
}

#[test]
fn test_first_maximum_wins() {
    // Both `x` and `y` reach the score of 1, the earliest cell in the row-major order is kept
    let scheme = identity(-1.0, 1.0);
    let result = Local::new(false).align(&b"xay"[..], &b"xby"[..], &scheme, &mut ScratchMemory::new());

    assert_eq!(*result.score(), 1.0);
    assert_eq!(result.alignment(), &(b"x".to_vec(), b"x".to_vec()));
}

#[test]
fn test_zero_diagonal_extends_alignment() {
    // y/q scores 1 - 1 = 0 through the diagonal, which is preferred over restarting at zero
    let scheme = identity(-1.0, 2.0);
    let result = Local::new(false).align(
        &b"xyzw"[..],
        &b"xqzw"[..],
        &scheme,
        &mut ScratchMemory::new(),
    );

    assert_eq!(*result.score(), 2.0);
    assert_eq!(result.alignment(), &(b"xyzw".to_vec(), b"xyzw".to_vec()));
}

#[test]
fn test_nothing_in_common() {
    let scheme = identity(-1.0, 1.0);
    let mut scratch = ScratchMemory::new();

    for (seq1, seq2) in [
        (&b"x"[..], &b"y"[..]),
        (&b"xxxx"[..], &b"yy"[..]),
        (&b""[..], &b"yy"[..]),
        (&b"x"[..], &b""[..]),
    ] {
        let result = Local::new(false).align(seq1, seq2, &scheme, &mut scratch);
        assert_eq!(*result.score(), 0.0);
        assert!(result.is_empty(), "{:?}", result);
    }
}

#[test]
fn test_tree_path() {
    let scheme = star();
    let seq = symbols(&["x", "y", "z"]);
    let mut scratch = ScratchMemory::new();

    let result = Local::new(false).align(&seq, &seq, &scheme, &mut scratch);
    assert_eq!(*result.score(), 3.0);
    assert_eq!(result.alignment(), &(seq.clone(), seq.clone()));

    // Siblings are similar but never as similar as the identical symbols
    let result = Local::new(false).align(
        &symbols(&["x"]),
        &symbols(&["y"]),
        &scheme,
        &mut scratch,
    );
    assert!((result.score() - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(
        result.alignment(),
        &(symbols(&["root"]), symbols(&["root"]))
    );
}
