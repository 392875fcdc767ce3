use treesim_alignment_rs::algo::{Aligner, Algorithm, Kind};
use treesim_alignment_rs::ScratchMemory;

use super::identity;

const CORPUS: &[&[u8]] = &[
    b"",
    b"a",
    b"ab",
    b"cab",
    b"acgt",
    b"tttt",
    b"gattaca",
    b"ggcattacg",
    b"abcabcabc",
    b"cgtacgtacgttgca",
];

fn pairs() -> impl Iterator<Item = (&'static [u8], &'static [u8])> {
    CORPUS
        .iter()
        .flat_map(|a| CORPUS.iter().map(move |b| (*a, *b)))
}

fn gaps(track: &[u8]) -> usize {
    track.iter().filter(|x| **x == b'-').count()
}

#[test]
fn test_score_symmetry() {
    let scheme = identity(-1.0, 1.33);
    let mut scratch = ScratchMemory::new();

    for kind in [Kind::Local, Kind::Global] {
        let aligner = Aligner::new(kind, true);
        for (a, b) in pairs() {
            let forward = aligner.align(a, b, &scheme, &mut scratch);
            let backward = aligner.align(b, a, &scheme, &mut scratch);
            assert_eq!(forward.score(), backward.score(), "{kind}: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn test_local_is_never_negative() {
    let scheme = identity(-2.0, 3.0);
    let mut scratch = ScratchMemory::new();
    let (local, global) = (
        Aligner::new(Kind::Local, false),
        Aligner::new(Kind::Global, true),
    );

    let mut negative = 0;
    for (a, b) in pairs() {
        let score = *local.align(a, b, &scheme, &mut scratch).score();
        assert!(score >= 0.0, "{a:?} vs {b:?}");

        if *global.align(a, b, &scheme, &mut scratch).score() < 0.0 {
            negative += 1;
        }
    }
    // Global scores are not floored
    assert!(negative > 0);
}

#[test]
fn test_global_tracks_consume_both_sequences() {
    let scheme = identity(0.0, 0.5);
    let aligner = Aligner::new(Kind::Global, false);
    let mut scratch = ScratchMemory::new();

    for (a, b) in pairs().filter(|(a, b)| !a.is_empty() && !b.is_empty()) {
        let result = aligner.align(a, b, &scheme, &mut scratch);
        let (track1, track2) = result.alignment();

        assert_eq!(track1.len(), track2.len());
        assert_eq!(track1.len() - gaps(track1), a.len(), "{a:?} vs {b:?}");
        assert_eq!(track2.len() - gaps(track2), b.len(), "{a:?} vs {b:?}");
        assert!(track1
            .iter()
            .zip(track2)
            .all(|(x, y)| *x != b'-' || *y != b'-'));
    }
}

#[test]
fn test_local_track_is_a_substring() {
    let scheme = identity(-1.0, 0.5);
    let aligner = Aligner::new(Kind::Local, false);
    let mut scratch = ScratchMemory::new();

    for (a, b) in pairs() {
        let result = aligner.align(a, b, &scheme, &mut scratch);
        let core: Vec<u8> = result
            .alignment()
            .0
            .iter()
            .copied()
            .filter(|x| *x != b'-')
            .collect();

        if core.is_empty() {
            continue;
        }
        assert!(
            a.windows(core.len()).any(|w| w == core.as_slice()),
            "{:?} is not a part of {:?}",
            core,
            a
        );
    }
}

#[test]
fn test_scratch_reuse_is_transparent() {
    let scheme = identity(-1.0, 1.0);
    let mut shared = ScratchMemory::new();

    for kind in [Kind::Local, Kind::Global] {
        let aligner = Aligner::new(kind, false);
        // Largest pairs first to leave stale data behind for the smaller ones
        for (a, b) in pairs().collect::<Vec<_>>().into_iter().rev() {
            let reused = aligner.align(a, b, &scheme, &mut shared);
            let fresh = aligner.align(a, b, &scheme, &mut ScratchMemory::new());
            assert_eq!(reused, fresh, "{kind}: {a:?} vs {b:?}");
        }
    }
}
