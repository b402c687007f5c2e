//! Timed, strictly ordered stage sequences.
//!
//! A [`Timeline`] is a list of stages, each finishing either after a fixed
//! duration or when the host signals an external event (such as the access
//! gate opening). One scheduler loop walks the list; one
//! [`CancellationToken`] owned by the [`TimelineHandle`] tears it down.
//!
//! ```text
//! Entered(verify) ──unlock──▶ Entered(syncing) ──2.5s──▶ ... ──▶ Finished
//! ```
//!
//! Dropping the handle cancels the loop. Once cancelled, the handle never
//! yields another event, even if one was already queued.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How a stage completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Completes when the host calls [`Unlocker::unlock`]
    Event,
    /// Completes after a fixed delay
    After(Duration),
}

/// One stage of a timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<S> {
    pub stage: S,
    pub trigger: Trigger,
}

/// Progress reported by a running timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent<S> {
    /// A stage started
    Entered(S),
    /// The last stage completed
    Finished,
}

/// An ordered list of stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline<S> {
    steps: Vec<Step<S>>,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Timeline<S>
where
    S: Clone + Send + std::fmt::Debug + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage that lasts `duration`.
    pub fn after(mut self, stage: S, duration: Duration) -> Self {
        self.steps.push(Step {
            stage,
            trigger: Trigger::After(duration),
        });
        self
    }

    /// Append a stage that waits for an unlock signal.
    pub fn until_unlocked(mut self, stage: S) -> Self {
        self.steps.push(Step {
            stage,
            trigger: Trigger::Event,
        });
        self
    }

    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    /// Sum of all fixed durations (event-driven stages count as zero).
    pub fn timed_duration(&self) -> Duration {
        self.steps
            .iter()
            .filter_map(|step| match step.trigger {
                Trigger::After(d) => Some(d),
                Trigger::Event => None,
            })
            .sum()
    }

    /// Run the scheduler loop to completion or cancellation.
    ///
    /// At most one timer is pending at any moment, and stages are entered
    /// strictly in list order.
    pub async fn run(
        self,
        sink: mpsc::UnboundedSender<TimelineEvent<S>>,
        unlock: Arc<Notify>,
        cancel: CancellationToken,
    ) {
        for step in self.steps {
            if cancel.is_cancelled() {
                return;
            }
            tracing::debug!(stage = ?step.stage, "Entering timeline stage");
            if sink.send(TimelineEvent::Entered(step.stage)).is_err() {
                return;
            }

            match step.trigger {
                Trigger::After(duration) => {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return,
                        _ = tokio::time::sleep(duration) => {}
                    }
                }
                Trigger::Event => {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => return,
                        _ = unlock.notified() => {}
                    }
                }
            }
        }

        if !cancel.is_cancelled() {
            let _ = sink.send(TimelineEvent::Finished);
        }
    }

    /// Spawn the scheduler loop on the current tokio runtime.
    pub fn spawn(self) -> TimelineHandle<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let unlock = Arc::new(Notify::new());
        let cancel = CancellationToken::new();

        let task = tokio::spawn(self.run(tx, unlock.clone(), cancel.clone()));

        TimelineHandle {
            cancel,
            unlock: Unlocker(unlock),
            events: rx,
            task,
        }
    }
}

/// Completes the current event-driven stage.
///
/// An unlock sent before the timeline reaches its event stage is kept and
/// consumed when that stage begins.
#[derive(Debug, Clone)]
pub struct Unlocker(Arc<Notify>);

impl Unlocker {
    pub fn unlock(&self) {
        self.0.notify_one();
    }
}

/// Owner of a running timeline.
#[derive(Debug)]
pub struct TimelineHandle<S> {
    cancel: CancellationToken,
    unlock: Unlocker,
    events: mpsc::UnboundedReceiver<TimelineEvent<S>>,
    task: JoinHandle<()>,
}

impl<S> TimelineHandle<S> {
    /// Next event, or `None` once finished or cancelled.
    pub async fn next(&mut self) -> Option<TimelineEvent<S>> {
        if self.cancel.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => None,
            event = self.events.recv() => event,
        }
    }

    pub fn unlocker(&self) -> Unlocker {
        self.unlock.clone()
    }

    pub fn unlock(&self) {
        self.unlock.unlock();
    }

    /// Stop the timeline; no further events are delivered.
    pub fn cancel(&self) {
        self.cancel.cancel();
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<S> Drop for TimelineHandle<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Stage {
        One,
        Two,
        Gate,
    }

    #[tokio::test(start_paused = true)]
    async fn test_stages_in_order() {
        let mut handle = Timeline::new()
            .after(Stage::One, Duration::from_millis(100))
            .after(Stage::Two, Duration::from_millis(200))
            .spawn();

        let start = tokio::time::Instant::now();
        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::One)));
        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::Two)));
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(handle.next().await, Some(TimelineEvent::Finished));
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert_eq!(handle.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_stage_waits_for_unlock() {
        let mut handle = Timeline::new()
            .until_unlocked(Stage::Gate)
            .after(Stage::One, Duration::from_millis(10))
            .spawn();

        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::Gate)));

        let waited = tokio::time::timeout(Duration::from_secs(3600), handle.next()).await;
        assert!(waited.is_err(), "gate stage must not complete on its own");

        handle.unlock();
        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::One)));
        assert_eq!(handle.next().await, Some(TimelineEvent::Finished));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_events() {
        let mut handle = Timeline::new()
            .after(Stage::One, Duration::from_millis(100))
            .after(Stage::Two, Duration::from_millis(100))
            .spawn();

        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::One)));
        handle.cancel();
        tokio::time::advance(Duration::from_secs(10)).await;
        assert_eq!(handle.next().await, None);
        assert!(handle.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_tears_down_scheduler() {
        let metrics = tokio::runtime::Handle::current().metrics();
        let idle = metrics.num_alive_tasks();

        let mut handle = Timeline::new()
            .after(Stage::One, Duration::from_millis(100))
            .after(Stage::Two, Duration::from_millis(100))
            .spawn();
        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::One)));
        assert_eq!(metrics.num_alive_tasks(), idle + 1);

        // Mid-stage, the way an unmounting page drops its handle.
        drop(handle);
        tokio::time::advance(Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert_eq!(metrics.num_alive_tasks(), idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_before_unlock_never_advances() {
        let mut handle = Timeline::new()
            .until_unlocked(Stage::Gate)
            .after(Stage::One, Duration::from_millis(10))
            .spawn();
        assert_eq!(handle.next().await, Some(TimelineEvent::Entered(Stage::Gate)));

        let unlocker = handle.unlocker();
        drop(handle);
        unlocker.unlock();
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            tokio::runtime::Handle::current().metrics().num_alive_tasks(),
            0
        );
    }

    #[test]
    fn test_timed_duration_ignores_event_stages() {
        let timeline = Timeline::new()
            .until_unlocked(Stage::Gate)
            .after(Stage::One, Duration::from_millis(250))
            .after(Stage::Two, Duration::from_millis(750));
        assert_eq!(timeline.timed_duration(), Duration::from_secs(1));
        assert_eq!(timeline.steps().len(), 3);
    }
}
