//! Cancellable tweens for counters, bars and progress rings.
//!
//! A [`Tween`] is pure: `value_at(elapsed)` maps time onto the eased value.
//! [`run_tween`] drives one against a [`FrameClock`] until it finishes or its
//! [`CancelToken`] fires. Staggered effects (bars filling one after another)
//! are a single tween over `n` units; views map it with [`stagger`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;

use crate::core::timing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutCubic,
    EaseOutExpo,
}

impl Easing {
    /// Map progress `t` in 0..=1 onto eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let progress = self.easing.apply(elapsed_ms.max(0.0) / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }
}

/// Shared flag checked by a running tween on every frame.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

pub trait FrameClock {
    fn now_ms(&self) -> f64;
    fn next_frame(&self) -> LocalBoxFuture<'_, ()>;
}

/// The platform clock: monotonic time plus a frame-sized sleep.
pub struct HostClock;

impl FrameClock for HostClock {
    fn now_ms(&self) -> f64 {
        timing::now_ms()
    }

    fn next_frame(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(timing::next_frame())
    }
}

/// Emit eased values until the tween ends (returns `true`, last value is
/// exactly `tween.to`) or `token` is cancelled (returns `false`).
pub async fn run_tween(
    tween: Tween,
    clock: &dyn FrameClock,
    token: &CancelToken,
    mut on_value: impl FnMut(f64),
) -> bool {
    let start = clock.now_ms();
    loop {
        if token.is_cancelled() {
            return false;
        }
        let elapsed = clock.now_ms() - start;
        if elapsed >= tween.duration_ms {
            on_value(tween.to);
            return true;
        }
        on_value(tween.value_at(elapsed));
        clock.next_frame().await;
    }
}

/// Fill level (0..=1) of item `index` when `progress` runs over `0..=count`.
pub fn stagger(progress: f64, index: usize) -> f64 {
    (progress - index as f64).clamp(0.0, 1.0)
}

/// A value that animates towards `target` whenever `target` changes.
///
/// The previous run is cancelled on retarget and on unmount.
pub fn use_tween(target: f64, duration_ms: f64, easing: Easing) -> Signal<f64> {
    let value = use_signal(|| 0.0_f64);
    let running: Rc<RefCell<Option<CancelToken>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = running.clone();
    use_effect(use_reactive((&target,), move |(target,)| {
        let token = CancelToken::new();
        if let Some(previous) = slot.borrow_mut().replace(token.clone()) {
            previous.cancel();
        }
        let mut value = value;
        let tween = Tween::new(*value.peek(), target, duration_ms, easing);
        spawn(async move {
            run_tween(tween, &HostClock, &token, |v| value.set(v)).await;
        });
    }));

    use_drop(move || {
        if let Some(token) = running.borrow_mut().take() {
            token.cancel();
        }
    });

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    /// Advances a fixed step on every frame.
    struct StepClock {
        now: Cell<f64>,
        step: f64,
    }

    impl FrameClock for StepClock {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }

        fn next_frame(&self) -> LocalBoxFuture<'_, ()> {
            self.now.set(self.now.get() + self.step);
            Box::pin(async {})
        }
    }

    fn clock(step: f64) -> StepClock {
        StepClock {
            now: Cell::new(1_000.0),
            step,
        }
    }

    #[test]
    fn easings_hit_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutCubic,
            Easing::EaseOutExpo,
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
        assert!(Easing::EaseInQuad.apply(0.5) < 0.5);
    }

    #[test]
    fn tween_ends_on_exact_target() {
        let mut seen = Vec::new();
        let finished = block_on(run_tween(
            Tween::new(0.0, 93.0, 100.0, Easing::EaseOutCubic),
            &clock(16.0),
            &CancelToken::new(),
            |v| seen.push(v),
        ));
        assert!(finished);
        assert_eq!(seen.last().copied(), Some(93.0));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn cancelled_tween_stops_emitting() {
        let token = CancelToken::new();
        let mut seen = Vec::new();
        let finished = block_on(run_tween(
            Tween::new(0.0, 10.0, 1_000.0, Easing::Linear),
            &clock(100.0),
            &token,
            |v| {
                seen.push(v);
                if seen.len() == 3 {
                    token.cancel();
                }
            },
        ));
        assert!(!finished);
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|v| *v < 10.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(5.0, 1.0, 0.0, Easing::Linear);
        assert_eq!(tween.value_at(0.0), 1.0);
    }

    #[test]
    fn stagger_fills_items_in_order() {
        assert_eq!(stagger(0.0, 0), 0.0);
        assert_eq!(stagger(1.5, 0), 1.0);
        assert_eq!(stagger(1.5, 1), 0.5);
        assert_eq!(stagger(1.5, 2), 0.0);
    }
}
