//! Scroll-reveal controller: a one-shot visibility latch per section.
//!
//! Every section on the page registers exactly one viewport intersection
//! watch. The first time the section's intersection ratio reaches its
//! threshold, the latch fires, the `visible` signal flips true, and the
//! watch is deregistered. The latch never reverses; a section that never
//! scrolls into view simply stays hidden.

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// One-shot latch tracking whether a region has become sufficiently visible.
///
/// Pure state machine, separate from the DOM wiring so the firing rules are
/// testable without a browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: LatchState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LatchState {
    Armed,
    Fired,
    Cancelled,
}

impl RevealLatch {
    /// `threshold` is the fraction of the region's area that must be within
    /// the viewport, in `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            state: LatchState::Armed,
        }
    }

    /// Feed one observed intersection ratio. Returns `true` exactly once:
    /// on the first observation where `ratio` reaches the threshold. Every
    /// later observation (and any observation after `cancel`) returns
    /// `false`.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state != LatchState::Armed {
            return false;
        }
        if ratio.clamp(0.0, 1.0) >= self.threshold {
            self.state = LatchState::Fired;
            true
        } else {
            false
        }
    }

    /// Tear down the latch. An armed latch that never fired stays unfired
    /// forever; callbacks delivered late are ignored.
    pub fn cancel(&mut self) {
        if self.state == LatchState::Armed {
            self.state = LatchState::Cancelled;
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == LatchState::Fired
    }
}

/// Registers a one-shot viewport watch for a section and returns the node
/// ref to attach plus the `visible` signal driving its entrance transition.
///
/// The watch is deregistered as soon as the latch fires, and torn down with
/// the owning component either way. If the node ref never attaches, no
/// watch is registered and the section just never reveals.
pub fn use_reveal(threshold: f64) -> (NodeRef<html::Section>, Signal<bool>) {
    let threshold = threshold.clamp(0.0, 1.0);
    let target = NodeRef::<html::Section>::new();
    let (visible, set_visible) = signal(false);

    let latch = StoredValue::new(RevealLatch::new(threshold));
    let stop_watch = StoredValue::new_local(None::<Box<dyn Fn()>>);

    let handle = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            // Records arrive batched in chronological order; feed them all
            // so a qualifying ratio later in the batch still fires.
            let fired = latch
                .try_update_value(|l| {
                    entries
                        .iter()
                        .any(|entry| l.observe(entry.intersection_ratio()))
                })
                .unwrap_or(false);
            if fired {
                set_visible.set(true);
                stop_watch.with_value(|stop| {
                    if let Some(stop) = stop {
                        stop();
                    }
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );
    stop_watch.set_value(Some(Box::new(handle.stop)));

    on_cleanup(move || {
        latch.try_update_value(|l| l.cancel());
    });

    (target, visible.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_when_ratio_reaches_threshold() {
        let mut latch = RevealLatch::new(0.3);
        assert!(!latch.observe(0.1));
        assert!(!latch.has_fired());
        assert!(latch.observe(0.3));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut latch = RevealLatch::new(0.2);
        assert!(latch.observe(0.9));
        assert!(!latch.observe(1.0));
        assert!(!latch.observe(0.2));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_never_fires_below_threshold() {
        let mut latch = RevealLatch::new(0.3);
        for ratio in [0.0, 0.05, 0.1, 0.2, 0.29] {
            assert!(!latch.observe(ratio));
        }
        assert!(!latch.has_fired());
    }

    #[test]
    fn test_latch_never_reverses() {
        let mut latch = RevealLatch::new(0.25);
        assert!(latch.observe(0.5));
        // scrolling back out of view must not un-reveal
        assert!(!latch.observe(0.0));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_cancel_before_fire_stays_unfired() {
        let mut latch = RevealLatch::new(0.2);
        latch.cancel();
        assert!(!latch.observe(1.0));
        assert!(!latch.has_fired());
    }

    #[test]
    fn test_cancel_after_fire_keeps_fired() {
        let mut latch = RevealLatch::new(0.2);
        assert!(latch.observe(0.5));
        latch.cancel();
        assert!(latch.has_fired());
    }

    #[test]
    fn test_batched_observations_fire_on_any_qualifying_ratio() {
        // A registration record at ratio 0 and a crossing record can land
        // in the same delivery; the crossing must still fire.
        let mut latch = RevealLatch::new(0.3);
        let batch = [0.0, 0.35];
        assert!(batch.iter().any(|&ratio| latch.observe(ratio)));
        assert!(latch.has_fired());
    }

    #[test]
    fn test_out_of_range_threshold_is_clamped() {
        let mut latch = RevealLatch::new(1.7);
        assert!(!latch.observe(0.99));
        assert!(latch.observe(1.0));
    }

    #[test]
    fn test_out_of_range_ratios_are_clamped() {
        let mut latch = RevealLatch::new(1.0);
        assert!(!latch.observe(-0.5));
        assert!(latch.observe(1.2));
    }
}
