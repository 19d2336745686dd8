//! Scripted progress for the submission step
//!
//! Stands in for server work: a fixed set of progress values is emitted at
//! absolute offsets from the moment a run starts. Only one run is active at a
//! time and cancelling is safe at any point.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Progress shown as soon as a submission starts
pub const INITIAL_PROGRESS: u8 = 12;

/// One scheduled update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub percent: u8,
    /// Offset from the start of the run, not from the previous step
    pub at: Duration,
}

impl ProgressStep {
    const fn new(percent: u8, at_ms: u64) -> Self {
        Self {
            percent,
            at: Duration::from_millis(at_ms),
        }
    }
}

pub const PROGRESS_SCHEDULE: [ProgressStep; 5] = [
    ProgressStep::new(28, 240),
    ProgressStep::new(56, 520),
    ProgressStep::new(78, 820),
    ProgressStep::new(93, 1130),
    ProgressStep::new(100, 1420),
];

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationOutcome {
    Completed,
    Cancelled,
}

type DoneSlot = Arc<Mutex<Option<oneshot::Sender<SimulationOutcome>>>>;

fn lock(slot: &DoneSlot) -> MutexGuard<'_, Option<oneshot::Sender<SimulationOutcome>>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resolves once the final update has fired, or right away on cancel
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<SimulationOutcome>,
}

impl Future for Completion {
    type Output = SimulationOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.unwrap_or(SimulationOutcome::Cancelled))
    }
}

struct ActiveRun {
    task: JoinHandle<()>,
    // Taken by whoever finishes the run first: the last step or cancel()
    done: DoneSlot,
}

impl ActiveRun {
    fn cancel(self) {
        if let Some(tx) = lock(&self.done).take() {
            let _ = tx.send(SimulationOutcome::Cancelled);
        }
        self.task.abort();
    }
}

/// Timer-driven fake submission work
pub struct ProgressSimulator {
    schedule: Vec<ProgressStep>,
    active: Option<ActiveRun>,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self::with_schedule(PROGRESS_SCHEDULE.to_vec())
    }

    pub fn with_schedule(schedule: Vec<ProgressStep>) -> Self {
        Self {
            schedule,
            active: None,
        }
    }

    #[cfg(test)]
    pub fn schedule(&self) -> &[ProgressStep] {
        &self.schedule
    }

    /// Whether a run is still waiting on scheduled updates
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| lock(&run.done).is_some())
    }

    /// Start a run, cancelling any previous one.
    ///
    /// `on_progress` receives each scheduled value in order. It is never called
    /// once [`cancel`](Self::cancel) has returned.
    pub fn start<F>(&mut self, mut on_progress: F) -> Completion
    where
        F: FnMut(u8) + Send + 'static,
    {
        self.cancel();

        let (tx, rx) = oneshot::channel();
        let done: DoneSlot = Arc::new(Mutex::new(Some(tx)));
        let slot = Arc::clone(&done);
        let schedule = self.schedule.clone();
        let started = Instant::now();

        let task = tokio::spawn(async move {
            for step in schedule {
                tokio::time::sleep_until(started + step.at).await;
                let guard = lock(&slot);
                if guard.is_none() {
                    return;
                }
                on_progress(step.percent);
            }
            if let Some(tx) = lock(&slot).take() {
                let _ = tx.send(SimulationOutcome::Completed);
            }
        });

        self.active = Some(ActiveRun { task, done });
        Completion { rx }
    }

    /// Stop the active run. Safe to call any number of times.
    pub fn cancel(&mut self) {
        if let Some(run) = self.active.take() {
            tracing::debug!("progress simulation cancelled");
            run.cancel();
        }
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;
    use tokio_test::{assert_pending, assert_ready_eq};

    fn recorder() -> (Arc<Mutex<Vec<u8>>>, impl FnMut(u8) + Send + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |p| sink.lock().unwrap().push(p))
    }

    fn values(seen: &Arc<Mutex<Vec<u8>>>) -> Vec<u8> {
        seen.lock().unwrap().clone()
    }

    mod schedule {
        use super::*;

        #[test]
        fn test_default_schedule() {
            let sim = ProgressSimulator::new();
            let pairs: Vec<_> = sim
                .schedule()
                .iter()
                .map(|s| (s.percent, s.at.as_millis()))
                .collect();
            assert_eq!(
                pairs,
                vec![(28, 240), (56, 520), (78, 820), (93, 1130), (100, 1420)]
            );
        }

        #[test]
        fn test_schedule_is_increasing_and_ends_at_100() {
            let pairs = PROGRESS_SCHEDULE;
            assert!(pairs.windows(2).all(|w| w[0].percent < w[1].percent));
            assert!(pairs.windows(2).all(|w| w[0].at < w[1].at));
            assert_eq!(pairs.last().map(|s| s.percent), Some(100));
            assert!(INITIAL_PROGRESS < pairs[0].percent);
        }
    }

    mod run {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_emits_every_value_in_order() {
            let mut sim = ProgressSimulator::new();
            let (seen, sink) = recorder();

            let outcome = sim.start(sink).await;

            assert_eq!(outcome, SimulationOutcome::Completed);
            let seen = values(&seen);
            assert_eq!(seen, vec![28, 56, 78, 93, 100]);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]));
            assert!(seen.iter().all(|p| *p <= 100));
            assert_eq!(seen.last(), Some(&100));
        }

        #[tokio::test(start_paused = true)]
        async fn test_offsets_are_absolute() {
            let mut sim = ProgressSimulator::new();
            let (seen, sink) = recorder();
            let _completion = sim.start(sink);

            sleep(Duration::from_millis(239)).await;
            assert!(values(&seen).is_empty());

            sleep(Duration::from_millis(2)).await;
            assert_eq!(values(&seen), vec![28]);

            sleep(Duration::from_millis(280)).await; // t = 521
            assert_eq!(values(&seen), vec![28, 56]);

            sleep(Duration::from_millis(610)).await; // t = 1131
            assert_eq!(values(&seen), vec![28, 56, 78, 93]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_completion_resolves_after_final_update() {
            let mut sim = ProgressSimulator::new();
            let (_seen, sink) = recorder();
            let mut completion = tokio_test::task::spawn(sim.start(sink));

            sleep(Duration::from_millis(1419)).await;
            assert_pending!(completion.poll());
            assert!(sim.is_running());

            sleep(Duration::from_millis(2)).await;
            assert_ready_eq!(completion.poll(), SimulationOutcome::Completed);
            assert!(!sim.is_running());
        }

        #[tokio::test(start_paused = true)]
        async fn test_empty_schedule_completes() {
            let mut sim = ProgressSimulator::with_schedule(Vec::new());
            let (seen, sink) = recorder();
            assert_eq!(sim.start(sink).await, SimulationOutcome::Completed);
            assert!(values(&seen).is_empty());
        }
    }

    mod cancel {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn test_cancel_resolves_immediately() {
            let mut sim = ProgressSimulator::new();
            let (seen, sink) = recorder();
            let completion = sim.start(sink);

            sleep(Duration::from_millis(600)).await;
            let before = Instant::now();
            sim.cancel();

            assert_eq!(completion.await, SimulationOutcome::Cancelled);
            assert_eq!(Instant::now(), before);
            assert_eq!(values(&seen), vec![28, 56]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_no_updates_after_cancel() {
            let mut sim = ProgressSimulator::new();
            let (seen, sink) = recorder();
            let _completion = sim.start(sink);

            sleep(Duration::from_millis(300)).await;
            sim.cancel();
            sleep(Duration::from_secs(5)).await;

            assert_eq!(values(&seen), vec![28]);
            assert!(!sim.is_running());
        }

        #[tokio::test(start_paused = true)]
        async fn test_cancel_is_idempotent() {
            let mut sim = ProgressSimulator::new();
            sim.cancel();

            let (_seen, sink) = recorder();
            let completion = sim.start(sink);
            sim.cancel();
            sim.cancel();
            sim.cancel();

            assert_eq!(completion.await, SimulationOutcome::Cancelled);
        }

        #[tokio::test(start_paused = true)]
        async fn test_start_cancels_previous_run() {
            let mut sim = ProgressSimulator::new();
            let (first_seen, first_sink) = recorder();
            let first = sim.start(first_sink);

            sleep(Duration::from_millis(300)).await;
            let (second_seen, second_sink) = recorder();
            let second = sim.start(second_sink);

            assert_eq!(first.await, SimulationOutcome::Cancelled);
            assert_eq!(second.await, SimulationOutcome::Completed);
            assert_eq!(values(&first_seen), vec![28]);
            assert_eq!(values(&second_seen), vec![28, 56, 78, 93, 100]);
        }

        #[tokio::test(start_paused = true)]
        async fn test_drop_cancels() {
            let (seen, sink) = recorder();
            let completion = {
                let mut sim = ProgressSimulator::new();
                sim.start(sink)
            };

            assert_eq!(completion.await, SimulationOutcome::Cancelled);
            sleep(Duration::from_secs(2)).await;
            assert!(values(&seen).is_empty());
        }
    }
}
