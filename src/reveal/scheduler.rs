use std::time::Duration;

/// Identifies a task handed to a [`ReplayScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once after a delay, with cancellation. Tasks never run inside
/// `schedule` itself.
///
/// In the browser this is `setTimeout`; tests drive a virtual clock instead.
pub trait ReplayScheduler: Send + Sync {
    /// Returns `None` when the task could not be scheduled; it is dropped unrun.
    fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId>;

    /// Cancelling a task that already ran or was never scheduled is a no-op.
    fn cancel(&self, id: TaskId);
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    };

    use super::*;

    struct Pending {
        id: TaskId,
        due: Duration,
        task: Task,
    }

    /// Virtual-time scheduler: nothing runs until [`ManualScheduler::advance`].
    #[derive(Default)]
    pub(crate) struct ManualScheduler {
        next_id: AtomicU64,
        now: Mutex<Duration>,
        pending: Mutex<Vec<Pending>>,
    }

    impl ManualScheduler {
        pub(crate) fn pending(&self) -> usize {
            self.pending.lock().unwrap().len()
        }

        /// Moves the clock forward and runs every task that came due, in order.
        pub(crate) fn advance(&self, by: Duration) -> usize {
            let now = {
                let mut now = self.now.lock().unwrap();
                *now += by;
                *now
            };
            let mut ran = 0;
            loop {
                // run outside the lock so a task can schedule or cancel
                let next = {
                    let mut pending = self.pending.lock().unwrap();
                    pending.sort_by_key(|p| p.due);
                    if pending.first().is_some_and(|p| p.due <= now) {
                        Some(pending.remove(0))
                    } else {
                        None
                    }
                };
                match next {
                    Some(p) => {
                        (p.task)();
                        ran += 1;
                    }
                    None => return ran,
                }
            }
        }
    }

    impl ReplayScheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId> {
            let id = TaskId(self.next_id.fetch_add(1, Ordering::SeqCst));
            let due = *self.now.lock().unwrap() + delay;
            self.pending.lock().unwrap().push(Pending { id, due, task });
            Some(id)
        }

        fn cancel(&self, id: TaskId) {
            self.pending.lock().unwrap().retain(|p| p.id != id);
        }
    }
}
