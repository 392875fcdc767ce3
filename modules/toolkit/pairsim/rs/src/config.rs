use std::thread;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result, WrapErr};
use treesim_alignment_rs::algo::Kind;

/// Parameters of a batch run.
#[derive(Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Config {
    algorithm: Kind,
    scores_only: bool,
    gap_penalty: f64,
    threads: usize,
    ordered: bool,
}

impl Config {
    pub const DEFAULT_GAP_PENALTY: f64 = 1.33;

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    algorithm: Kind,
    scores_only: bool,
    gap_penalty: f64,
    threads: isize,
    ordered: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            algorithm: Kind::Local,
            scores_only: false,
            gap_penalty: Config::DEFAULT_GAP_PENALTY,
            threads: -1,
            ordered: true,
        }
    }
}

impl ConfigBuilder {
    pub fn set_algorithm(mut self, algorithm: Kind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Skip the traceback and compute only the alignment scores.
    pub fn set_scores_only(mut self, scores_only: bool) -> Self {
        self.scores_only = scores_only;
        self
    }

    pub fn set_gap_penalty(mut self, gap_penalty: f64) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    /// Requested number of worker threads: `0` runs a single thread, a positive value is capped
    /// by the number of cores and `-N` uses all cores but `N - 1`.
    pub fn set_threads(mut self, threads: isize) -> Self {
        self.threads = threads;
        self
    }

    /// Emit the scores of each row in the order of the second set (true) or in the order the
    /// chunks were finished (false).
    pub fn set_ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    pub fn build(self) -> Result<Config> {
        let gap = self.gap_penalty;
        ensure!(
            gap.is_finite() && gap >= 0.0,
            "Gap penalty must be a finite non-negative number, got {gap}"
        );

        let cores = thread::available_parallelism()
            .wrap_err("Failed to query the number of available cores")?
            .get();

        Ok(Config {
            algorithm: self.algorithm,
            scores_only: self.scores_only,
            gap_penalty: gap,
            threads: resolve_threads(self.threads, cores)?,
            ordered: self.ordered,
        })
    }
}

fn resolve_threads(requested: isize, cores: usize) -> Result<usize> {
    let magnitude = requested.unsigned_abs();
    if requested >= 0 {
        return Ok(magnitude.clamp(1, cores.max(1)));
    }

    let idle = magnitude - 1;
    ensure!(
        idle < cores,
        "Cannot leave {idle} of {cores} core(s) idle, requested threads: {requested}"
    );
    Ok(cores - idle)
}
