//! Timers and a monotonic clock for animations.

pub use api::timing::sleep_ms;

/// Interval between animation frames when no native frame callback is used.
pub const FRAME_MS: u64 = 16;

/// Milliseconds on a monotonic clock. Only differences are meaningful.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1_000.0
}

/// Yield until roughly the next frame.
pub async fn next_frame() {
    sleep_ms(FRAME_MS).await;
}
