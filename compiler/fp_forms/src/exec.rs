//! Execution strategy: sequential or fork-join over a shared worker pool.
//!
//! The policy is a plain value captured by each form when it is built; there
//! is no process-wide switch. A `WorkerPool` is a cloneable handle to a rayon
//! thread pool, either one built from a [`PoolConfig`] or rayon's global pool.
//!
//! Fan-out used by the forms:
//! - [`WorkerPool::map_indexed`]: order-preserving parallel map over `0..n`
//! - [`WorkerPool::map_ranges`]: one task per contiguous chunk
//! - [`WorkerPool::spawn`]: fire-and-drop task whose result may be awaited
//!   later through a [`Pending`] handle

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, TryRecvError};
use rayon::prelude::*;
use thiserror::Error;

/// Selects how forms with independent sub-work evaluate it.
#[derive(Clone, Debug, Default)]
pub enum ExecPolicy {
    /// Plain left-to-right evaluation on the calling thread.
    #[default]
    Sequential,
    /// Fork-join on the given pool; the caller blocks until the join.
    Parallel(WorkerPool),
}

impl ExecPolicy {
    /// Parallel on rayon's global pool.
    pub fn parallel() -> Self {
        ExecPolicy::Parallel(WorkerPool::global())
    }

    #[inline]
    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecPolicy::Parallel(_))
    }

    #[inline]
    pub fn pool(&self) -> Option<&WorkerPool> {
        match self {
            ExecPolicy::Sequential => None,
            ExecPolicy::Parallel(pool) => Some(pool),
        }
    }
}

/// Worker pool configuration.
#[derive(Clone, Debug)]
pub struct PoolConfig {
    /// Number of worker threads (0 = rayon's default, which honours
    /// `RAYON_NUM_THREADS` and otherwise uses the number of CPUs).
    pub num_threads: usize,
    /// Stack size per worker. Deep programs also grow the stack on demand,
    /// this only sets the starting size.
    pub stack_size: Option<usize>,
    /// Worker threads are named `{prefix}-{index}`.
    pub thread_name_prefix: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig {
            num_threads: 0,
            stack_size: Some(8 * 1024 * 1024),
            thread_name_prefix: "fp-worker".to_string(),
        }
    }
}

impl PoolConfig {
    /// Default configuration with a fixed worker count.
    pub fn with_threads(num_threads: usize) -> Self {
        PoolConfig {
            num_threads,
            ..Self::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to build worker pool: {0}")]
    Build(#[from] rayon::ThreadPoolBuildError),
}

/// Cloneable handle to a rayon thread pool.
#[derive(Clone)]
pub struct WorkerPool {
    /// `None` targets rayon's global pool.
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl WorkerPool {
    /// Handle to rayon's global pool.
    ///
    /// Work is run in whichever rayon pool the caller already executes in,
    /// and in the global pool otherwise.
    pub fn global() -> Self {
        WorkerPool { pool: None }
    }

    pub fn new(config: &PoolConfig) -> Result<Self, PoolError> {
        let prefix = config.thread_name_prefix.clone();
        let mut builder = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .thread_name(move |i| format!("{prefix}-{i}"));
        if let Some(size) = config.stack_size {
            builder = builder.stack_size(size);
        }
        let pool = builder.build()?;
        tracing::debug!(workers = pool.current_num_threads(), "worker pool started");
        Ok(WorkerPool {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Number of workers `W` used to partition reductions.
    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Run `op` inside the pool, blocking the caller until it returns.
    pub fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// `[f(0), ..., f(n - 1)]` computed in parallel, in index order.
    pub fn map_indexed<R, F>(&self, n: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Send + Sync,
        R: Send,
    {
        self.install(|| (0..n).into_par_iter().map(f).collect())
    }

    /// One task per range, results in range order.
    pub fn map_ranges<R, F>(&self, ranges: Vec<Range<usize>>, f: F) -> Vec<R>
    where
        F: Fn(Range<usize>) -> R + Send + Sync,
        R: Send,
    {
        self.install(|| ranges.into_par_iter().map(f).collect())
    }

    /// Start `op` on the pool without waiting for it.
    ///
    /// The result can be collected with [`Pending::wait`]; dropping the
    /// `Pending` discards it. The task always runs to completion.
    pub fn spawn<R, OP>(&self, op: OP) -> Pending<R>
    where
        OP: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = channel::bounded(1);
        let job = move || {
            // The receiver is gone when the result was discarded.
            let _ = tx.send(op());
        };
        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }
        Pending { rx }
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("global", &self.pool.is_none())
            .field("workers", &self.workers())
            .finish()
    }
}

/// Result of a task started with [`WorkerPool::spawn`].
pub struct Pending<R> {
    rx: Receiver<R>,
}

/// Poll interval while a pool thread waits on a task running elsewhere.
const IDLE_WAIT: Duration = Duration::from_micros(50);

impl<R> Pending<R> {
    /// Block until the task finishes. `None` if it panicked.
    ///
    /// A pool thread keeps executing queued pool work while it waits, so a
    /// task queued behind the waiter still gets to run on a one-worker pool.
    pub fn wait(self) -> Option<R> {
        loop {
            match self.rx.try_recv() {
                Ok(value) => return Some(value),
                Err(TryRecvError::Disconnected) => return None,
                Err(TryRecvError::Empty) => {}
            }
            match rayon::yield_now() {
                Some(rayon::Yield::Executed) => {}
                Some(rayon::Yield::Idle) => match self.rx.recv_timeout(IDLE_WAIT) {
                    Ok(value) => return Some(value),
                    Err(RecvTimeoutError::Disconnected) => return None,
                    Err(RecvTimeoutError::Timeout) => {}
                },
                None => return self.rx.recv().ok(),
            }
        }
    }
}

/// Split `0..len` into `parts` contiguous ranges whose sizes differ by at
/// most one. The boundaries depend only on `len` and `parts`.
pub(crate) fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let base = len / parts;
    let extra = len % parts;
    let mut start = 0;
    (0..parts)
        .map(|i| {
            let size = base + usize::from(i < extra);
            let range = start..start + size;
            start += size;
            range
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
