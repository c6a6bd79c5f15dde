//! Millisecond clock for step timings.
//!
//! wasm32 has no monotonic `Instant`, so the browser clock is read through
//! `Date.now()`. Natively the clock counts from the first reading.

#[cfg(target_arch = "wasm32")]
#[inline]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// A started stopwatch.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started_at: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { started_at: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.started_at).max(0.0)
    }
}

/// Run `f` and store its duration in `slot`.
#[inline]
pub(crate) fn timed<T>(slot: &mut f64, f: impl FnOnce() -> T) -> T {
    let timer = PerfTimer::start();
    let out = f();
    *slot = timer.elapsed_ms();
    out
}
