/// Wipe coordinator - bounded worker pool over the tree walk
///
/// The walk runs on the calling thread and feeds discovered files into a
/// bounded channel; a fixed pool of worker threads consumes them. The
/// bounded send blocks when workers fall behind, which caps in-flight file
/// handles and buffers at the pool size instead of one thread per file.
/// Every dispatched task yields exactly one reported outcome, and run()
/// returns only after every worker has been joined.
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::report::Reporter;
use crate::walker::tree::walk_tree;
use crate::wipe::{wipe_file, FileTask};

/// Result of a completed run
#[derive(Debug)]
pub struct WipeSummary {
    /// Files discovered and dispatched
    pub files: u64,
    /// Files wiped and renamed
    pub wiped: u64,
    /// Files that failed at some stage
    pub failed: u64,
    /// Subtrees skipped because they could not be listed
    pub skipped_dirs: u64,
    /// Wall time for the whole run
    pub duration: Duration,
}

pub struct WipeCoordinator {
    worker_count: usize,
    reporter: Arc<Reporter>,
}

impl WipeCoordinator {
    pub fn new(reporter: Arc<Reporter>) -> Self {
        WipeCoordinator {
            worker_count: default_worker_count(),
            reporter,
        }
    }

    /// Override the pool size (tests, constrained environments)
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    /// Walk `root` and wipe every file under it
    pub fn run(&self, root: &Path) -> WipeSummary {
        let start = Instant::now();

        // Capacity 2x pool size: enough to keep workers fed, small
        // enough that the walker backpressures instead of buffering
        // the whole tree
        let (task_tx, task_rx) = bounded::<FileTask>(self.worker_count * 2);

        let mut workers = Vec::with_capacity(self.worker_count);
        for _ in 0..self.worker_count {
            let task_rx = task_rx.clone();
            let reporter = Arc::clone(&self.reporter);

            workers.push(thread::spawn(move || {
                // Each worker owns its generator, seeded from OS entropy
                // at spawn. Never shared, never wall-clock seeded.
                let mut rng = StdRng::from_os_rng();
                let mut wiped = 0u64;
                let mut failed = 0u64;

                while let Ok(task) = task_rx.recv() {
                    let outcome = wipe_file(&task, &mut rng);
                    if outcome.succeeded() {
                        wiped += 1;
                    } else {
                        failed += 1;
                    }
                    reporter.outcome(&outcome);
                }

                (wiped, failed)
            }));
        }
        drop(task_rx);

        let stats = walk_tree(root, &self.reporter, &mut |task| {
            // Only fails if every worker is gone, which means nothing
            // is left to process tasks anyway
            let _ = task_tx.send(task);
        });

        // Closing the channel lets workers drain and exit their loops
        drop(task_tx);

        let mut wiped = 0u64;
        let mut failed = 0u64;
        for worker in workers {
            if let Ok((w, f)) = worker.join() {
                wiped += w;
                failed += f;
            }
        }

        WipeSummary {
            files: stats.files,
            wiped,
            failed,
            skipped_dirs: stats.skipped_dirs,
            duration: start.elapsed(),
        }
    }
}

fn default_worker_count() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
}
