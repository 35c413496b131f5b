use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

/// Side length a fresh engine starts with.
pub const DEFAULT_SIDE_LENGTH: f64 = 20.0;

/// Step delay (milliseconds) a fresh engine starts with.
pub const DEFAULT_STEP_DELAY_MS: f64 = 30.0;

/// `f64` stored as its bit pattern in an [`AtomicU64`].
#[derive(Debug)]
pub(crate) struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub(crate) fn new(v: f64) -> Self {
        Self(AtomicU64::new(v.to_bits()))
    }

    pub(crate) fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn store(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Relaxed);
    }
}

/// Live engine parameters shared between the control side and the worker.
///
/// Each field is an independent atomic scalar; readers see eventually-consistent values.
#[derive(Debug)]
pub(crate) struct EngineParams {
    pub(crate) side_length: AtomicF64,
    pub(crate) step_delay_ms: AtomicF64,
    /// Externally settable offset. Recorded only; passes start from `scan_offset`.
    pub(crate) offset: AtomicF64,
    /// Vertical start of the current pass. Written by the engine only.
    pub(crate) scan_offset: AtomicF64,
    pub(crate) running: AtomicBool,
    /// A loop (background worker or synchronous run) currently owns the surface.
    pub(crate) loop_active: AtomicBool,
    /// The active loop is [`crate::Engine::run_passes`] on a caller's thread.
    pub(crate) sync_run: AtomicBool,
    /// Next pass must start from offset 0.
    pub(crate) restart: AtomicBool,
}

impl EngineParams {
    pub(crate) fn new(side_length: f64, step_delay_ms: f64) -> Self {
        Self {
            side_length: AtomicF64::new(side_length),
            step_delay_ms: AtomicF64::new(step_delay_ms),
            offset: AtomicF64::new(0.0),
            scan_offset: AtomicF64::new(0.0),
            running: AtomicBool::new(false),
            loop_active: AtomicBool::new(false),
            sync_run: AtomicBool::new(false),
            restart: AtomicBool::new(false),
        }
    }

    /// Current step delay. Negative or non-finite delays pace as zero.
    pub(crate) fn step_delay(&self) -> Duration {
        step_delay_from_ms(self.step_delay_ms.load())
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE_LENGTH, DEFAULT_STEP_DELAY_MS)
    }
}

pub(crate) fn step_delay_from_ms(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_nanos((ms * 1_000_000.0).round() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/state.rs"]
mod tests;
