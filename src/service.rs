//! Bounded fill service.
//!
//! A full-size grid is a couple of hundred megabytes, so fills are not run
//! on the caller's thread. They are queued on a fixed pool of worker
//! threads, which caps the number of grids alive inside the service at the
//! pool size. Callers block until their fill has run.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::basics::Vertex;
use crate::config::FillConfig;
use crate::deadline::Deadline;
use crate::dispatch::{Algorithm, FillResult, Filler, Seed};
use crate::error::{RasterError, Result};
use crate::grid::GridDiff;

/// Outcome of running two algorithms on the same polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct FillComparison {
    pub algorithms: [Algorithm; 2],
    pub elapsed: [Duration; 2],
    pub diff: GridDiff,
}

pub struct FillService {
    pool: ThreadPool,
    filler: Filler,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FillService {
    /// Validate `config` and start its worker pool.
    pub fn new(config: &FillConfig) -> Result<Self> {
        config.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.max_concurrent_fills)
            .thread_name(|i| format!("fill-worker-{}", i))
            .build()
            .map_err(RasterError::from)?;
        debug!(
            "fill service: {} workers, {}x{} grid",
            config.max_concurrent_fills, config.rows, config.cols
        );
        Ok(Self {
            pool,
            filler: Filler::from_config(config),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        })
    }

    /// Number of fills that may run at once.
    pub fn max_concurrent(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn filler(&self) -> &Filler {
        &self.filler
    }

    /// Queue a fill and wait for it. The configured timeout starts when a
    /// worker picks the fill up.
    pub fn fill(
        &self,
        vertices: &[Vertex],
        algorithm: Algorithm,
        seed: Option<Seed>,
    ) -> Result<FillResult> {
        self.pool.install(|| {
            let _slot = InFlight::enter(&self.in_flight, &self.peak_in_flight);
            self.filler.fill(vertices, algorithm, seed)
        })
    }

    /// Queue a fill by algorithm name and wait for it.
    pub fn fill_named(
        &self,
        vertices: &[Vertex],
        algorithm: &str,
        seed: Option<Seed>,
    ) -> Result<FillResult> {
        let algorithm = algorithm.parse()?;
        self.fill(vertices, algorithm, seed)
    }

    /// Queue a fill bounded by `deadline` instead of the configured timeout.
    pub fn fill_with_deadline(
        &self,
        vertices: &[Vertex],
        algorithm: Algorithm,
        seed: Option<Seed>,
        deadline: &Deadline,
    ) -> Result<FillResult> {
        self.pool.install(|| {
            let _slot = InFlight::enter(&self.in_flight, &self.peak_in_flight);
            self.filler.fill_with_deadline(vertices, algorithm, seed, deadline)
        })
    }

    /// Run `a` then `b` on one worker slot and diff the grids.
    ///
    /// Both grids live only on the worker and are dropped before this
    /// returns, so a comparison occupies the same slot as a single fill.
    pub fn compare(
        &self,
        vertices: &[Vertex],
        a: Algorithm,
        b: Algorithm,
        seed: Option<Seed>,
    ) -> Result<FillComparison> {
        self.pool.install(|| {
            let _slot = InFlight::enter(&self.in_flight, &self.peak_in_flight);
            let first = self.filler.fill(vertices, a, seed)?;
            let second = self.filler.fill(vertices, b, seed)?;
            Ok(FillComparison {
                algorithms: [a, b],
                elapsed: [first.elapsed, second.elapsed],
                diff: first.grid.diff_same_shape(&second.grid),
            })
        })
    }

    /// Highest number of fills observed running at the same time.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::Relaxed)
    }
}

/// Occupancy of one worker slot, released on every exit path.
struct InFlight<'a> {
    count: &'a AtomicUsize,
}

impl<'a> InFlight<'a> {
    fn enter(count: &'a AtomicUsize, peak: &AtomicUsize) -> Self {
        let now = count.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        Self { count }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FillError;
    use std::sync::Arc;
    use std::thread;

    fn config(workers: usize) -> FillConfig {
        FillConfig {
            rows: 64,
            cols: 64,
            max_concurrent_fills: workers,
            timeout_secs: Some(30.0),
        }
    }

    const TRI: [Vertex; 3] = [(2, 2), (40, 50), (40, 2)];

    #[test]
    fn test_pool_size_follows_config() {
        let service = FillService::new(&config(3)).unwrap();
        assert_eq!(service.max_concurrent(), 3);
        assert_eq!(service.filler().dimensions(), (64, 64));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let res = FillService::new(&config(0));
        assert!(matches!(res, Err(FillError::Config(_))));
    }

    #[test_log::test]
    fn test_single_worker_serialises_fills() {
        let service = Arc::new(FillService::new(&config(1)).unwrap());
        let handles: Vec<_> = (0..6)
            .map(|i| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    let algorithm = Algorithm::ALL[i % 3];
                    service.fill(&TRI, algorithm, Some((30, 10))).unwrap()
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.len(), 6);
        assert_eq!(service.peak_in_flight(), 1);
        assert!(results.iter().all(|r| r.grid.count_filled() > 0));
    }

    #[test]
    fn test_named_fill_validates_algorithm() {
        let service = FillService::new(&config(1)).unwrap();
        let err = service.fill_named(&TRI, "slow", None).unwrap_err();
        assert!(matches!(err, FillError::InvalidAlgorithm(_)));
    }

    #[test]
    fn test_cancelled_fill_reports_timeout() {
        let service = FillService::new(&config(2)).unwrap();
        let deadline = Deadline::unbounded();
        deadline.cancel();
        let res = service.fill_with_deadline(&TRI, Algorithm::Rourke, None, &deadline);
        assert!(matches!(res, Err(FillError::TimedOut { .. })));
    }

    #[test]
    fn test_compare_holds_one_slot() {
        let service = FillService::new(&config(2)).unwrap();
        let same = service.compare(&TRI, Algorithm::Fast, Algorithm::Rourke, None).unwrap();
        assert_eq!(same.algorithms, [Algorithm::Fast, Algorithm::Rourke]);
        assert!(same.diff.identical);
        assert_eq!(same.diff.total_cells, 64 * 64);

        // Default seed lands on the boundary, leaving the outline only.
        let outline = service.compare(&TRI, Algorithm::Fast, Algorithm::Flood, None).unwrap();
        assert!(!outline.diff.identical);
        assert!(outline.diff.different_cells > 0);
        assert_eq!(service.peak_in_flight(), 1);
    }
}
