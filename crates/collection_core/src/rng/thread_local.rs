//! Per-thread fallback random source.
//!
//! Shuffles that receive no source draw from a generator owned by the
//! calling thread. Each OS thread lazily creates its own [`CollectionRng`]
//! on first use, so concurrent callers never contend on, or corrupt, a
//! shared generator and need no external synchronisation.
//!
//! # Seeding
//!
//! A thread's generator is seeded from a monotonic clock reading combined
//! with a hash of the thread id (`clock * 31 + thread_hash`), so two threads
//! initialising at the same instant still start from different seeds.
//!
//! # Async Runtimes
//!
//! Storage is keyed by OS thread, not by task. Tasks multiplexed onto one
//! worker thread share that thread's generator and observe one interleaved
//! stream. Callers that need per-task isolation should pass their own
//! source to the `*_with` operations.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use rand::RngCore;
use tracing::trace;

use super::CollectionRng;

thread_local! {
    static THREAD_RNG: RefCell<Option<CollectionRng>> = const { RefCell::new(None) };
}

/// Handle to the calling thread's random generator.
///
/// This is a zero-sized type; the generator lives in thread-local storage
/// and is never handed out. The handle implements [`RngCore`], and therefore
/// [`RandomSource`](super::RandomSource), by drawing from whichever thread
/// it is used on.
///
/// # Examples
///
/// ```rust
/// use collection_core::rng::{RandomSource, ThreadLocalRng};
///
/// let mut rng = ThreadLocalRng::new();
/// assert!(rng.next_in_range(0, 10) < 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Creates a new handle.
    ///
    /// This is a zero-cost operation; the generator is created on first draw.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs `f` with the calling thread's generator, creating it if needed.
    ///
    /// `f` must not re-enter this function.
    pub(crate) fn with_rng<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CollectionRng) -> R,
    {
        THREAD_RNG.with(|cell| {
            let mut slot = cell.borrow_mut();
            let rng = slot.get_or_insert_with(|| {
                let seed = thread_seed();
                trace!(seed, "initialising thread-local random source");
                CollectionRng::from_seed(seed)
            });
            f(rng)
        })
    }

    /// Returns the seed of the calling thread's generator.
    #[cfg(test)]
    pub(crate) fn seed(&self) -> u64 {
        self.with_rng(|rng| rng.seed())
    }
}

impl RngCore for ThreadLocalRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.with_rng(|rng| rng.next_u32())
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.with_rng(|rng| rng.next_u64())
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(dest))
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with_rng(|rng| rng.try_fill_bytes(dest))
    }
}

/// Seed for a freshly created thread generator.
fn thread_seed() -> u64 {
    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    clock_ticks()
        .wrapping_mul(31)
        .wrapping_add(hasher.finish())
}

/// Nanoseconds on a monotonic clock anchored at the wall-clock time of the
/// first call in this process.
fn clock_ticks() -> u64 {
    static ANCHOR: OnceLock<(Instant, u64)> = OnceLock::new();

    let (start, wall_nanos) = ANCHOR.get_or_init(|| {
        let wall_nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        (Instant::now(), wall_nanos)
    });
    wall_nanos.wrapping_add(start.elapsed().as_nanos() as u64)
}
