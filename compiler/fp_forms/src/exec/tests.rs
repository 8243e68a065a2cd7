use std::sync::mpsc;

use pretty_assertions::assert_eq;

use super::*;

fn pool(n: usize) -> WorkerPool {
    WorkerPool::new(&PoolConfig::with_threads(n)).unwrap()
}

#[test]
fn partition_is_contiguous_and_near_equal() {
    let ranges = partition(10, 4);
    assert_eq!(ranges, vec![0..3, 3..6, 6..8, 8..10]);

    for (len, parts) in [(0, 3), (1, 4), (7, 7), (100, 8), (5, 1)] {
        let ranges = partition(len, parts);
        assert_eq!(ranges.len(), parts);
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(len));
        for w in ranges.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        let sizes: Vec<usize> = ranges.iter().map(ExactSizeIterator::len).collect();
        let max = sizes.iter().max().copied().unwrap_or(0);
        let min = sizes.iter().min().copied().unwrap_or(0);
        assert!(max - min <= 1, "{len}/{parts}: {sizes:?}");
    }
}

#[test]
fn partition_treats_zero_parts_as_one() {
    assert_eq!(partition(4, 0), vec![0..4]);
}

#[test]
fn configured_worker_count() {
    assert_eq!(pool(3).workers(), 3);
    assert!(WorkerPool::global().workers() >= 1);
}

#[test]
fn map_indexed_preserves_order() {
    let out = pool(4).map_indexed(1_000, |i| i * 2);
    assert_eq!(out, (0..1_000).map(|i| i * 2).collect::<Vec<_>>());
}

#[test]
fn map_ranges_preserves_range_order() {
    let out = pool(2).map_ranges(partition(9, 3), |r| r.sum::<usize>());
    assert_eq!(out, vec![3, 12, 21]);
}

#[test]
fn spawn_then_wait_returns_result() {
    let p = pool(2);
    assert_eq!(p.spawn(|| 6 * 7).wait(), Some(42));
    assert_eq!(WorkerPool::global().spawn(|| "done").wait(), Some("done"));
}

#[test]
fn waiting_inside_single_worker_pool_does_not_deadlock() {
    let p = pool(1);
    let inner = p.clone();
    let result = p.install(move || {
        let a = inner.spawn(|| 1);
        let b = inner.spawn(|| 2);
        a.wait().unwrap_or(0) + b.wait().unwrap_or(0)
    });
    assert_eq!(result, 3);
}

#[test]
fn dropped_pending_still_runs_to_completion() {
    let (tx, rx) = mpsc::channel();
    let p = pool(2);
    let pending = p.spawn(move || {
        let _ = tx.send("ran");
        0
    });
    drop(pending);
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok("ran"));
}

#[test]
fn policy_accessors() {
    assert!(!ExecPolicy::Sequential.is_parallel());
    assert!(ExecPolicy::Sequential.pool().is_none());
    let par = ExecPolicy::Parallel(pool(2));
    assert!(par.is_parallel());
    assert_eq!(par.pool().map(WorkerPool::workers), Some(2));
    assert!(!ExecPolicy::default().is_parallel());
}

#[test]
fn worker_threads_are_named() {
    let config = PoolConfig {
        num_threads: 1,
        stack_size: None,
        thread_name_prefix: "fp-test".to_string(),
    };
    let p = WorkerPool::new(&config).unwrap();
    let name = p.install(|| std::thread::current().name().map(str::to_owned));
    assert_eq!(name.as_deref(), Some("fp-test-0"));
}
