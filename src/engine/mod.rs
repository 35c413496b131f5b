pub(crate) mod pacer;
pub(crate) mod scan;
pub(crate) mod state;

use std::sync::atomic::Ordering;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use crate::config::EngineConfig;
use crate::foundation::core::Point;
use crate::foundation::error::{CrosstileError, CrosstileResult};
use crate::shape::cross::Cross;
use crate::shape::palette::Palette;
use crate::surface::Surface;
use pacer::{Pacer, ThreadPacer};
use scan::{PassReport, ScanHost, next_scan_offset, run_pass};
use state::{DEFAULT_SIDE_LENGTH, DEFAULT_STEP_DELAY_MS, EngineParams};

/// Drives the scrolling cross animation on a surface.
///
/// The engine has two states. Stopped (initial) and running. [`Engine::start`] moves it to
/// running and launches the scan loop on a background worker; [`Engine::stop`] asks the loop
/// to finish. Stopping is pass-granular: the pass in flight always sweeps to the bottom of
/// the surface, only the next pass is skipped.
///
/// Parameter setters may be called from any thread while the loop runs. They take effect at
/// the next step of the loop and are never validated.
pub struct Engine<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    surface: Mutex<S>,
    palette: Mutex<Palette>,
    pacer: Box<dyn Pacer>,
    params: EngineParams,
    /// Worker handle. The lock also serializes loop ownership changes: start, synchronous
    /// runs, and the worker's own decision to continue or exit at a pass boundary.
    worker: Mutex<Option<JoinHandle<()>>>,
    /// Signalled under `worker` whenever a loop gives up the surface.
    idle: Condvar,
}

/// Builder for [`Engine`].
pub struct EngineBuilder<S> {
    surface: S,
    side_length: f64,
    step_delay_ms: f64,
    seed: Option<u64>,
    pacer: Box<dyn Pacer>,
}

impl<S: Surface + Send + 'static> EngineBuilder<S> {
    /// Start building an engine that draws onto `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            side_length: DEFAULT_SIDE_LENGTH,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            seed: None,
            pacer: Box::new(ThreadPacer),
        }
    }

    /// Initial side length of each square.
    pub fn side_length(mut self, side_length: f64) -> Self {
        self.side_length = side_length;
        self
    }

    /// Initial delay between steps, in milliseconds.
    pub fn step_delay_ms(mut self, step_delay_ms: f64) -> Self {
        self.step_delay_ms = step_delay_ms;
        self
    }

    /// Seed the color picker for a reproducible color sequence.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the default [`ThreadPacer`].
    pub fn pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Apply side length, step delay and seed from `config`.
    pub fn config(mut self, config: &EngineConfig) -> Self {
        self.side_length = config.side_length;
        self.step_delay_ms = config.step_delay_ms;
        self.seed = config.seed;
        self
    }

    /// Finish building. The engine starts stopped.
    pub fn build(self) -> Engine<S> {
        Engine {
            inner: Arc::new(Inner {
                surface: Mutex::new(self.surface),
                palette: Mutex::new(Palette::from_seed_opt(self.seed)),
                pacer: self.pacer,
                params: EngineParams::new(self.side_length, self.step_delay_ms),
                worker: Mutex::new(None),
                idle: Condvar::new(),
            }),
        }
    }
}

impl<S: Surface + Send + 'static> Engine<S> {
    /// Engine with default parameters, a sleeping pacer and random colors.
    pub fn new(surface: S) -> Self {
        EngineBuilder::new(surface).build()
    }

    /// Start configuring an engine for `surface`.
    pub fn builder(surface: S) -> EngineBuilder<S> {
        EngineBuilder::new(surface)
    }

    /// Begin the animation on a background worker and return immediately.
    ///
    /// No-op while already running. Otherwise the first pass starts at offset 0. When the
    /// previous worker is still finishing its last pass after a [`Engine::stop`], that worker
    /// is reused instead of spawning a second loop.
    pub fn start(&self) -> CrosstileResult<()> {
        let mut worker = lock(&self.inner.worker);
        let params = &self.inner.params;

        if params.running.load(Ordering::SeqCst) {
            tracing::trace!("start ignored, engine already running");
            return Ok(());
        }
        if params.sync_run.load(Ordering::SeqCst) {
            return Err(CrosstileError::engine(
                "cannot start while a synchronous run owns the surface",
            ));
        }

        params.running.store(true, Ordering::SeqCst);
        params.restart.store(true, Ordering::SeqCst);

        if params.loop_active.load(Ordering::SeqCst) {
            tracing::debug!("engine restarted, draining worker picks up the next pass");
            return Ok(());
        }

        if let Some(prev) = worker.take() {
            // Marked inactive under this lock, so it is already on its way out.
            let _ = prev.join();
        }

        params.loop_active.store(true, Ordering::SeqCst);
        let inner = Arc::clone(&self.inner);
        let spawned = std::thread::Builder::new()
            .name("crosstile-engine".to_string())
            .spawn(move || worker_loop(&inner));

        match spawned {
            Ok(handle) => {
                *worker = Some(handle);
                tracing::debug!("engine started");
                Ok(())
            }
            Err(err) => {
                params.loop_active.store(false, Ordering::SeqCst);
                self.inner.idle.notify_all();
                params.running.store(false, Ordering::SeqCst);
                Err(CrosstileError::engine(format!(
                    "failed to spawn engine worker: {err}"
                )))
            }
        }
    }

    /// Ask the loop to stop after the pass in flight. Never blocks.
    pub fn stop(&self) {
        if self.inner.params.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("engine stop requested");
        }
    }

    /// Stop when running, start otherwise. Returns the new running state.
    pub fn toggle(&self) -> CrosstileResult<bool> {
        if self.is_running() {
            self.stop();
            Ok(false)
        } else {
            self.start()?;
            Ok(true)
        }
    }

    /// Whether the engine is in the running state.
    ///
    /// Turns false as soon as [`Engine::stop`] is called, even though the pass in flight keeps
    /// drawing. See [`Engine::is_idle`].
    pub fn is_running(&self) -> bool {
        self.inner.params.running.load(Ordering::SeqCst)
    }

    /// Whether no loop is drawing right now.
    pub fn is_idle(&self) -> bool {
        !self.inner.params.loop_active.load(Ordering::SeqCst)
    }

    /// Block until no loop is drawing and the background worker has exited.
    ///
    /// Returns immediately when the engine is idle. Blocks for as long as the engine keeps
    /// running, so call [`Engine::stop`] first.
    pub fn wait_idle(&self) -> CrosstileResult<()> {
        let handle = {
            let mut worker = lock(&self.inner.worker);
            while self.inner.params.loop_active.load(Ordering::SeqCst) {
                worker = self
                    .inner
                    .idle
                    .wait(worker)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            worker.take()
        };
        match handle {
            Some(handle) => handle
                .join()
                .map_err(|_| CrosstileError::engine("engine worker panicked")),
            None => Ok(()),
        }
    }

    /// Set the side length of each square. Applies from the next step.
    pub fn set_side_length(&self, side_length: f64) {
        self.inner.params.side_length.store(side_length);
    }

    /// Set the delay between steps, in milliseconds. Applies from the next pause.
    pub fn set_speed(&self, step_delay_ms: f64) {
        self.inner.params.step_delay_ms.store(step_delay_ms);
    }

    /// Record an offset value.
    ///
    /// Passes always start from the engine's own scan offset, which only the loop advances;
    /// this value is kept for callers to read back and does not move the animation.
    pub fn set_offset(&self, offset: f64) {
        self.inner.params.offset.store(offset);
    }

    /// Current side length.
    pub fn side_length(&self) -> f64 {
        self.inner.params.side_length.load()
    }

    /// Current step delay in milliseconds.
    pub fn step_delay_ms(&self) -> f64 {
        self.inner.params.step_delay_ms.load()
    }

    /// Last value given to [`Engine::set_offset`].
    pub fn offset(&self) -> f64 {
        self.inner.params.offset.load()
    }

    /// Vertical offset of the pass in flight, or of the next pass when idle.
    pub fn scan_offset(&self) -> f64 {
        self.inner.params.scan_offset.load()
    }

    /// Clear the whole surface.
    pub fn clear(&self) {
        let mut surface = lock(&self.inner.surface);
        let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
        surface.clear_region(0.0, 0.0, w, h);
    }

    /// Resize the surface. A running pass sees the new bounds from its next step.
    pub fn resize(&self, width: u32, height: u32) -> CrosstileResult<()> {
        lock(&self.inner.surface).resize(width, height)?;
        tracing::debug!(width, height, "surface resized");
        Ok(())
    }

    /// Run with exclusive access to the surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut lock(&self.inner.surface))
    }

    /// Run `passes` full passes on the calling thread, starting at offset 0.
    ///
    /// Pacing and offset advance follow the background loop, but the run flag is ignored.
    /// Fails while the background loop is active.
    #[tracing::instrument(skip(self))]
    pub fn run_passes(&self, passes: usize) -> CrosstileResult<Vec<PassReport>> {
        {
            let _worker = lock(&self.inner.worker);
            if self.inner.params.loop_active.load(Ordering::SeqCst) {
                return Err(CrosstileError::engine(
                    "cannot run passes while the engine loop is active",
                ));
            }
            self.inner.params.loop_active.store(true, Ordering::SeqCst);
            self.inner.params.sync_run.store(true, Ordering::SeqCst);
        }

        let params = &self.inner.params;
        params.scan_offset.store(0.0);
        let mut reports = Vec::with_capacity(passes);
        for _ in 0..passes {
            reports.push(self.inner.pass_and_advance());
        }

        let _worker = lock(&self.inner.worker);
        params.sync_run.store(false, Ordering::SeqCst);
        params.loop_active.store(false, Ordering::SeqCst);
        self.inner.idle.notify_all();
        Ok(reports)
    }
}

impl<S> Drop for Engine<S> {
    fn drop(&mut self) {
        // The worker owns its own handle to the state and winds down after its pass.
        self.inner.params.running.store(false, Ordering::SeqCst);
    }
}

impl<S> std::fmt::Debug for Engine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = &self.inner.params;
        f.debug_struct("Engine")
            .field("running", &p.running.load(Ordering::SeqCst))
            .field("loop_active", &p.loop_active.load(Ordering::SeqCst))
            .field("side_length", &p.side_length.load())
            .field("step_delay_ms", &p.step_delay_ms.load())
            .field("scan_offset", &p.scan_offset.load())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Inner<S> {
    /// One pass from the current scan offset, then advance the offset.
    fn pass_and_advance(&self) -> PassReport {
        let offset = self.params.scan_offset.load();
        let report = run_pass(&mut LiveHost { inner: self }, offset);

        let height = f64::from(lock(&self.surface).height());
        let next = next_scan_offset(offset, self.params.side_length.load(), height);
        self.params.scan_offset.store(next);
        tracing::debug!(
            start_offset = offset,
            crosses = report.crosses,
            next_offset = next,
            "pass complete"
        );
        report
    }
}

fn worker_loop<S: Surface>(inner: &Inner<S>) {
    loop {
        {
            let _worker = lock(&inner.worker);
            if !inner.params.running.load(Ordering::SeqCst) {
                inner.params.loop_active.store(false, Ordering::SeqCst);
                inner.idle.notify_all();
                break;
            }
            if inner.params.restart.swap(false, Ordering::SeqCst) {
                inner.params.scan_offset.store(0.0);
            }
        }
        inner.pass_and_advance();
    }
    tracing::debug!("engine idle");
}

/// The engine's live state seen as a [`ScanHost`].
struct LiveHost<'a, S> {
    inner: &'a Inner<S>,
}

impl<S: Surface> ScanHost for LiveHost<'_, S> {
    fn width(&mut self) -> f64 {
        f64::from(lock(&self.inner.surface).width())
    }

    fn height(&mut self) -> f64 {
        f64::from(lock(&self.inner.surface).height())
    }

    fn side_length(&mut self) -> f64 {
        self.inner.params.side_length.load()
    }

    fn draw_cross(&mut self, origin: Point, side_length: f64) {
        let color = lock(&self.inner.palette).pick();
        let cross = Cross::new(origin, side_length, color);
        cross.draw(&mut *lock(&self.inner.surface));
    }

    fn pause(&mut self) {
        self.inner.pacer.pause(self.inner.params.step_delay());
    }
}

/// Lock `m`, recovering the data of a poisoned lock.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/engine.rs"]
mod tests;
