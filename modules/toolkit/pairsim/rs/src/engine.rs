use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use ahash::HashSet;
use eyre::{bail, eyre, Result};
use itertools::Itertools;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thread_local::ThreadLocal;
use treesim_alignment_rs::algo::Aligner;
use treesim_alignment_rs::scoring::Scheme;
use treesim_core_rs::Symbol;

use crate::worker::Worker;
use crate::{Config, Summary};

/// Aligns every sequence of the first set against every sequence of the second one.
///
/// Sequences of the first set are processed one at a time. For each of them the second set is
/// split into contiguous chunks, one per thread of the pool, and every chunk is aligned by the
/// worker (and its scratch memory) owned by the executing thread.
///
/// Scores of a chunk are appended to the row with a single lock acquisition once the chunk is
/// finished. A thread may execute several chunks of the same row, so unordered rows are grouped
/// by chunk (in the completion order) rather than by thread.
pub struct Engine {
    config: Config,
    thread_pool: Option<ThreadPool>,
    workers: ThreadLocal<RefCell<Worker>>,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            thread_pool: None,
            workers: ThreadLocal::new(),
        }
    }

    /// Use the given pool instead of the one created from the configured number of threads.
    pub fn set_thread_pool(mut self, pool: ThreadPool) -> Self {
        self.thread_pool = Some(pool);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the batch and pass the normalised scores of every processed row into the `sink`:
    /// `sink(i, scores)` where `scores[j]` (or the j-th finished score for unordered runs)
    /// belongs to the pair (`set1[i]`, `set2[j]`).
    ///
    /// The input is validated before any alignment is made. Symbols unknown to the scoring
    /// scheme are rejected.
    pub fn run<S>(
        &mut self,
        set1: &[Vec<Symbol>],
        set2: &[Vec<Symbol>],
        scheme: &S,
        mut sink: impl FnMut(usize, &[f64]) -> Result<()> + Send,
    ) -> Result<Summary>
    where
        S: Scheme<Symbol = Symbol> + Sync + ?Sized,
    {
        Self::validate(set1, set2, scheme)?;

        let pool = match self.thread_pool.take() {
            Some(pool) => pool,
            None => ThreadPoolBuilder::new()
                .num_threads(*self.config.threads())
                .build()?,
        };
        let result = pool.install(|| self._run(set1, set2, scheme, &mut sink));
        self.thread_pool = Some(pool);
        result
    }

    fn validate<S>(set1: &[Vec<Symbol>], set2: &[Vec<Symbol>], scheme: &S) -> Result<()>
    where
        S: Scheme<Symbol = Symbol> + ?Sized,
    {
        let mut unknown = HashSet::default();
        for symbol in set1.iter().chain(set2).flatten() {
            if !scheme.knows(symbol) {
                unknown.insert(symbol);
            }
        }
        if !unknown.is_empty() {
            bail!(
                "Sequences contain symbols unknown to the scoring scheme (N={}): {}",
                unknown.len(),
                unknown.into_iter().sorted().take(10).join(", ")
            );
        }

        let empty = set1.iter().chain(set2).filter(|x| x.is_empty()).count();
        if empty > 0 {
            log::warn!("{empty} empty sequence(s) found, their similarity scores are set to 0");
        }
        if set1.is_empty() || set2.is_empty() {
            log::warn!("One of the sequence sets is empty, there is nothing to align");
        }
        Ok(())
    }

    fn _run<S>(
        &mut self,
        set1: &[Vec<Symbol>],
        set2: &[Vec<Symbol>],
        scheme: &S,
        sink: &mut (impl FnMut(usize, &[f64]) -> Result<()> + Send),
    ) -> Result<Summary>
    where
        S: Scheme<Symbol = Symbol> + Sync + ?Sized,
    {
        let started = Instant::now();
        let aligner = Aligner::new(*self.config.algorithm(), *self.config.scores_only());
        let ordered = *self.config.ordered();

        let threads = rayon::current_num_threads();
        let chunk = set2.len().div_ceil(threads).max(1);
        log::info!(
            "Aligning {} x {} sequences ({} alignment, {} thread(s), chunks of {})",
            set1.len(),
            set2.len(),
            aligner.kind(),
            threads,
            chunk
        );

        let mut buffer = Vec::with_capacity(set2.len());
        let mut pairs = 0;
        for (i, query) in set1.iter().enumerate() {
            buffer.clear();
            if ordered {
                buffer.resize(set2.len(), 0.0);
            }

            let row = Mutex::new(buffer);
            let has_failed = AtomicBool::new(false);
            let (workers, aligner, shared, failed) = (&self.workers, &aligner, &row, &has_failed);
            rayon::scope(|s| {
                for (ind, targets) in set2.chunks(chunk).enumerate() {
                    s.spawn(move |_| {
                        let mut worker = workers.get_or_default().borrow_mut();
                        let scores = worker.process(aligner, query, targets, scheme);

                        // Single bulk append per chunk
                        match shared.lock() {
                            Ok(mut row) if ordered => {
                                let start = ind * chunk;
                                row[start..start + scores.len()].copy_from_slice(scores);
                            }
                            Ok(mut row) => row.extend_from_slice(scores),
                            Err(err) => {
                                failed.store(true, Ordering::Relaxed);
                                log::error!("Failed to store scores of the row {i}: {err}");
                            }
                        }
                    });
                }
            });

            if has_failed.into_inner() {
                return Err(eyre!("Batch alignment failed. See log for details."));
            }
            buffer = row
                .into_inner()
                .map_err(|_| eyre!("Scores of the row {i} are poisoned"))?;
            debug_assert_eq!(buffer.len(), set2.len());

            sink(i, &buffer)?;
            pairs += buffer.len();
            log::debug!("Row {}/{} done ({} pairs so far)", i + 1, set1.len(), pairs);
        }

        for (ind, worker) in self.workers.iter_mut().enumerate() {
            log::debug!("Worker {ind} aligned {} pairs", worker.get_mut().take_aligned());
        }

        let elapsed = started.elapsed().as_secs_f64();
        log::info!("Aligned {pairs} pairs in {elapsed:.2}s");
        Ok(Summary::new(set1.len(), pairs, elapsed))
    }
}
