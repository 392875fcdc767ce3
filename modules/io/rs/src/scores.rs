use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use derive_getters::Dissolve;
use eyre::{Result, WrapErr};

/// Writes similarity scores, one per line.
#[derive(Debug, Dissolve)]
pub struct ScoreWriter<W> {
    writer: W,
    written: usize,
}

impl ScoreWriter<BufWriter<File>> {
    /// Name of the scores file inside the results directory.
    pub const FILE_NAME: &'static str = "similarity-scores.dat";

    /// Create the results directory (if needed) and open the scores file inside it. An existing
    /// file is truncated.
    pub fn create(results: impl AsRef<Path>) -> Result<Self> {
        let results = results.as_ref();
        std::fs::create_dir_all(results).wrap_err_with(|| {
            format!("Could not create results directory: {}", results.display())
        })?;

        let path = Self::path(results);
        let file = File::create(&path)
            .wrap_err_with(|| format!("Could not create file: {}", path.display()))?;
        log::info!("Writing similarity scores to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }

    pub fn path(results: impl AsRef<Path>) -> PathBuf {
        results.as_ref().join(Self::FILE_NAME)
    }
}

impl<W: Write> ScoreWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write_score(&mut self, score: f64) -> Result<()> {
        writeln!(self.writer, "{score}")?;
        self.written += 1;
        Ok(())
    }

    pub fn write_scores(&mut self, scores: &[f64]) -> Result<()> {
        for score in scores {
            self.write_score(*score)?;
        }
        Ok(())
    }

    /// Number of scores written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
