pub use compression::{open, DecompressedStream};
pub use scores::ScoreWriter;
pub use sequences::read_sequences;
pub use tables::{read_lcas, read_levels, read_positions};

mod compression;
mod lines;
mod scores;
mod sequences;
mod tables;
