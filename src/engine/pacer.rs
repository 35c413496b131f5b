use std::time::Duration;

/// Suspends the engine loop between steps.
///
/// The pause is the loop's only yield point. Implementations decide how time passes: real
/// sleeping in production, nothing at all for offline rendering, scripted stepping in tests.
pub trait Pacer: Send + Sync {
    /// Block the calling loop for (about) `delay`.
    fn pause(&self, delay: Duration);
}

/// Sleeps the worker thread for the requested delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Never waits. Passes run as fast as the surface can draw.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&self, _delay: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for std::sync::Arc<P> {
    fn pause(&self, delay: Duration) {
        (**self).pause(delay);
    }
}
