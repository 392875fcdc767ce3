pub use global::Global;
pub use local::Local;

use std::fmt::Display;
use std::str::FromStr;

use eyre::{eyre, Report};

use crate::scoring::Scheme;
use crate::{Alignable, AlignmentResult, Gap, ScratchMemory};

mod global;
mod local;
mod traceback;

/// Dynamic programming alignment of two sequences with a linear gap model.
///
/// Every call fully overwrites the active region of the given scratch memory, so the same
/// instance can be reused for any number of subsequent calls on the same thread.
pub trait Algorithm {
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
        Seq2: Alignable<Symbol = S::Symbol> + ?Sized;
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Kind {
    /// Smith-Waterman-style local alignment
    #[default]
    Local,
    /// Needleman-Wunsch-style global alignment
    Global,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Local => write!(f, "local"),
            Kind::Global => write!(f, "global"),
        }
    }
}

impl FromStr for Kind {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "sw" | "1" => Ok(Kind::Local),
            "global" | "nw" | "2" => Ok(Kind::Global),
            _ => Err(eyre!("Unknown alignment algorithm: {s}")),
        }
    }
}

/// Run-time selected alignment algorithm.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Aligner {
    Global(Global),
    Local(Local),
}

impl Aligner {
    pub fn new(kind: Kind, scores_only: bool) -> Self {
        match kind {
            Kind::Global => Aligner::Global(Global::new(scores_only)),
            Kind::Local => Aligner::Local(Local::new(scores_only)),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Aligner::Global(_) => Kind::Global,
            Aligner::Local(_) => Kind::Local,
        }
    }
}

impl Algorithm for Aligner {
    #[inline(always)]
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
        match self {
            Aligner::Global(x) => x.align(seq1, seq2, scheme, scratch),
            Aligner::Local(x) => x.align(seq1, seq2, scheme, scratch),
        }
    }
}
