pub use alignable::{Alignable, Gap};
pub use result::AlignmentResult;
pub use scratch::{Grid, ScratchMemory};

pub mod algo;
mod alignable;
mod result;
mod scratch;
pub mod scoring;
