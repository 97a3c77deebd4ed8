use std::time::Instant;

/// Logs the wall-clock time between construction and drop.
pub struct ScopedTimer {
    label: String,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        log::info!("[TIMING] {} completed in {:.4} s", self.label, self.elapsed_secs());
    }
}

/// Run `f` inside a [`ScopedTimer`].
pub fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let _timer = ScopedTimer::new(label);
    f()
}
