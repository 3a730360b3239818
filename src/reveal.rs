//! Scroll and hash driven replay of entrance animations.
//!
//! A [`Coordinator`] watches one element: the host feeds it intersection
//! notifications, the [`HashBus`] feeds it fragment changes for its section,
//! and it answers with an [`Epoch`] that only ever grows. Hosts key their
//! animated subtree on the epoch so that a new value re-mounts it and the
//! entrance animation plays again.

mod coordinator;
mod hash_bus;
mod options;
mod scheduler;
mod state;

pub use coordinator::{Coordinator, RevealSnapshot};
pub use hash_bus::{Fragment, HashBus, Subscription};
pub use options::{MarginParseError, ReplayPolicy, RevealOptions, RootMargin, DEFAULT_REPLAY_DELAY};
pub use scheduler::{ReplayScheduler, Task, TaskId};
pub use state::{Epoch, RevealState, Transition};

#[cfg(test)]
pub(crate) use scheduler::ManualScheduler;
