//! View-side state: toasts and the animated progress gauge

use crate::submission::{Notification, Notifier};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Toasts kept at once; older ones are dropped first
const TOAST_LIMIT: usize = 3;

/// A notification waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub received_at: DateTime<Local>,
}

/// Shared queue the orchestrator pushes notifications into
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Oldest toast still shown
    pub fn front(&self) -> Option<Toast> {
        self.lock().front().cloned()
    }

    /// Dismiss the oldest toast
    pub fn dismiss(&self) -> Option<Toast> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!(severity = %notification.severity, title = %notification.title, "toast");
        let mut queue = self.lock();
        queue.push_back(Toast {
            notification,
            received_at: Local::now(),
        });
        while queue.len() > TOAST_LIMIT {
            queue.pop_front();
        }
    }
}

/// Displayed progress that eases toward the latest reported value
#[derive(Debug, Clone)]
pub struct ProgressGauge {
    from: f32,
    target: f32,
    current: f32,
    started: Instant,
}

impl ProgressGauge {
    /// Duration of the move between two reported values
    const ANIMATION_DURATION: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self {
            from: 0.0,
            target: 0.0,
            current: 0.0,
            started: Instant::now(),
        }
    }

    /// Start easing toward `percent`
    pub fn set_target(&mut self, percent: u8) {
        let percent = f32::from(percent.min(100));
        if (percent - self.target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.current;
        self.target = percent;
        self.started = Instant::now();
    }

    /// Jump straight to `percent` without animating
    pub fn snap(&mut self, percent: u8) {
        let percent = f32::from(percent.min(100));
        self.from = percent;
        self.target = percent;
        self.current = percent;
    }

    /// Update the displayed value based on elapsed time
    pub fn update(&mut self) {
        let elapsed = self.started.elapsed();
        if elapsed >= Self::ANIMATION_DURATION {
            self.current = self.target;
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.current = self.from + (self.target - self.from) * eased;
    }

    pub fn is_animating(&self) -> bool {
        (self.current - self.target).abs() >= f32::EPSILON
    }

    /// Displayed value as a 0.0..=1.0 ratio
    pub fn ratio(&self) -> f64 {
        f64::from(self.current / 100.0).clamp(0.0, 1.0)
    }

    pub fn percent(&self) -> u16 {
        self.current.round() as u16
    }
}

impl Default for ProgressGauge {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application state outside the form itself
#[derive(Debug, Default)]
pub struct AppState {
    pub toasts: ToastQueue,
    pub gauge: ProgressGauge,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::Severity;

    fn notification(title: &str) -> Notification {
        Notification::new(title, "", Severity::Info)
    }

    mod toast_queue {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let queue = ToastQueue::default();
            assert!(queue.is_empty());
            assert!(queue.front().is_none());
        }

        #[test]
        fn test_notify_and_dismiss_in_order() {
            let queue = ToastQueue::default();
            queue.notify(notification("first"));
            queue.notify(notification("second"));

            assert_eq!(queue.len(), 2);
            assert_eq!(queue.front().unwrap().notification.title, "first");
            assert_eq!(queue.dismiss().unwrap().notification.title, "first");
            assert_eq!(queue.front().unwrap().notification.title, "second");
        }

        #[test]
        fn test_limit_drops_oldest() {
            let queue = ToastQueue::default();
            for i in 0..5 {
                queue.notify(notification(&format!("toast {i}")));
            }
            assert_eq!(queue.len(), TOAST_LIMIT);
            assert_eq!(queue.front().unwrap().notification.title, "toast 2");
        }

        #[test]
        fn test_clones_share_queue() {
            let queue = ToastQueue::default();
            let handle = queue.clone();
            handle.notify(notification("shared"));
            assert_eq!(queue.len(), 1);
        }

        #[test]
        fn test_dismiss_on_empty() {
            let queue = ToastQueue::default();
            assert!(queue.dismiss().is_none());
        }
    }

    mod progress_gauge {
        use super::*;

        #[test]
        fn test_new_starts_at_zero() {
            let gauge = ProgressGauge::new();
            assert_eq!(gauge.percent(), 0);
            assert_eq!(gauge.ratio(), 0.0);
            assert!(!gauge.is_animating());
        }

        #[test]
        fn test_snap_is_immediate() {
            let mut gauge = ProgressGauge::new();
            gauge.snap(12);
            assert_eq!(gauge.percent(), 12);
            assert!(!gauge.is_animating());
        }

        #[test]
        fn test_set_target_animates() {
            let mut gauge = ProgressGauge::new();
            gauge.set_target(56);
            assert!(gauge.is_animating());
            gauge.update();
            assert!(gauge.percent() <= 56);
        }

        #[test]
        fn test_update_reaches_target_after_duration() {
            let mut gauge = ProgressGauge::new();
            gauge.set_target(100);
            gauge.started = Instant::now() - ProgressGauge::ANIMATION_DURATION;
            gauge.update();
            assert_eq!(gauge.percent(), 100);
            assert_eq!(gauge.ratio(), 1.0);
            assert!(!gauge.is_animating());
        }

        #[test]
        fn test_target_is_clamped() {
            let mut gauge = ProgressGauge::new();
            gauge.snap(250);
            assert_eq!(gauge.percent(), 100);
        }
    }

    mod app_state {
        use super::*;

        #[test]
        fn test_dismiss_toast() {
            let mut state = AppState::default();
            state.toasts.notify(notification("hello"));
            assert!(state.has_toasts());
            state.dismiss_toast();
            assert!(!state.has_toasts());
        }
    }
}
