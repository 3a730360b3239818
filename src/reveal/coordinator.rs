use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, Weak},
};

use super::{
    hash_bus::{Fragment, HashBus, Subscription},
    options::RevealOptions,
    scheduler::{ReplayScheduler, TaskId},
    state::{Epoch, RevealState, Transition},
};

/// What a host renders from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealSnapshot {
    pub visible: bool,
    pub armed: bool,
    pub epoch: Epoch,
}

impl From<&RevealState> for RevealSnapshot {
    fn from(state: &RevealState) -> Self {
        Self {
            visible: state.visible(),
            armed: state.armed(),
            epoch: state.epoch(),
        }
    }
}

type ChangeListener = Arc<dyn Fn(RevealSnapshot) + Send + Sync>;

struct Shared {
    state: RevealState,
    attached: bool,
    next_ticket: u64,
    pending: HashMap<u64, TaskId>,
    listener: Option<ChangeListener>,
}

struct Core {
    section: Option<String>,
    options: RevealOptions,
    scheduler: Arc<dyn ReplayScheduler>,
    shared: Mutex<Shared>,
}

impl Core {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn notify(listener: Option<ChangeListener>, snapshot: RevealSnapshot) {
        if let Some(listener) = listener {
            listener(snapshot);
        }
    }

    fn label(&self) -> &str {
        self.section.as_deref().unwrap_or("<detached section>")
    }

    fn observe(&self, visible: bool) -> Transition {
        let (transition, snapshot, listener) = {
            let mut shared = self.lock();
            if !shared.attached {
                return Transition::Unchanged;
            }
            let transition = shared.state.observe(visible);
            if transition == Transition::Unchanged {
                return transition;
            }
            (
                transition,
                RevealSnapshot::from(&shared.state),
                shared.listener.clone(),
            )
        };
        log::trace!(
            "reveal {}: visible={visible} {transition:?} epoch={}",
            self.label(),
            snapshot.epoch
        );
        Self::notify(listener, snapshot);
        transition
    }

    fn navigate(self: &Arc<Self>, fragment: &Fragment) -> bool {
        match &self.section {
            Some(section) if fragment.targets(section) => self.schedule_replay(),
            _ => false,
        }
    }

    fn schedule_replay(self: &Arc<Self>) -> bool {
        let mut shared = self.lock();
        if !shared.attached {
            return false;
        }
        let ticket = shared.next_ticket;
        shared.next_ticket += 1;

        let core = Arc::downgrade(self);
        let task = Box::new(move || {
            if let Some(core) = Weak::upgrade(&core) {
                core.fire(ticket);
            }
        });
        match self.scheduler.schedule(self.options.replay_delay, task) {
            Some(id) => {
                shared.pending.insert(ticket, id);
                log::debug!(
                    "reveal {}: replay scheduled in {:?}",
                    self.label(),
                    self.options.replay_delay
                );
                true
            }
            None => {
                log::warn!("reveal {}: couldn't schedule replay", self.label());
                false
            }
        }
    }

    fn fire(&self, ticket: u64) {
        let (snapshot, listener) = {
            let mut shared = self.lock();
            if shared.pending.remove(&ticket).is_none() || !shared.attached {
                return;
            }
            shared.state.replay();
            (RevealSnapshot::from(&shared.state), shared.listener.clone())
        };
        log::debug!("reveal {}: replay, epoch={}", self.label(), snapshot.epoch);
        Self::notify(listener, snapshot);
    }
}

/// One element's replay logic, from mount to unmount.
///
/// Every registration made by [`Coordinator::attach`] is released exactly once
/// by [`Coordinator::detach`], which also runs on drop.
pub struct Coordinator {
    core: Arc<Core>,
    subscription: Mutex<Option<Subscription>>,
}

impl fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinator")
            .field("section", &self.core.section)
            .field("options", &self.core.options)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

impl Coordinator {
    /// Without a section or a bus the coordinator still tracks visibility but
    /// never hears about navigation.
    pub fn attach(
        section: Option<&str>,
        options: RevealOptions,
        bus: Option<&HashBus>,
        scheduler: Arc<dyn ReplayScheduler>,
    ) -> Self {
        let core = Arc::new(Core {
            section: section.map(str::to_string),
            shared: Mutex::new(Shared {
                state: RevealState::new(options.policy),
                attached: true,
                next_ticket: 0,
                pending: HashMap::new(),
                listener: None,
            }),
            options,
            scheduler,
        });

        let subscription = match (section, bus) {
            (Some(section), Some(bus)) => {
                let weak = Arc::downgrade(&core);
                Some(bus.subscribe(section, move |fragment| {
                    if let Some(core) = weak.upgrade() {
                        core.navigate(fragment);
                    }
                }))
            }
            _ => None,
        };
        log::debug!(
            "reveal {}: attached (hash subscription: {})",
            core.label(),
            subscription.is_some()
        );

        Self {
            core,
            subscription: Mutex::new(subscription),
        }
    }

    /// Called with every changed snapshot; replaces any earlier listener.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(RevealSnapshot) + Send + Sync + 'static,
    {
        let mut shared = self.core.lock();
        if shared.attached {
            shared.listener = Some(Arc::new(listener));
        }
    }

    /// Feeds an intersection notification, already reduced to a boolean.
    pub fn observe(&self, visible: bool) -> Transition {
        self.core.observe(visible)
    }

    /// Schedules a replay if `fragment` names this coordinator's section.
    pub fn navigate(&self, fragment: &Fragment) -> bool {
        self.core.navigate(fragment)
    }

    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot::from(&self.core.lock().state)
    }

    pub fn pending_replays(&self) -> usize {
        self.core.lock().pending.len()
    }

    /// Cancels pending replays, leaves the bus and drops the listener.
    /// Returns false when already detached.
    pub fn detach(&self) -> bool {
        let pending = {
            let mut shared = self.core.lock();
            if !std::mem::take(&mut shared.attached) {
                return false;
            }
            shared.listener = None;
            shared.pending.drain().map(|(_, id)| id).collect::<Vec<_>>()
        };
        for id in pending {
            self.core.scheduler.cancel(id);
        }
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(mut subscription) = subscription {
            subscription.cancel();
        }
        log::debug!("reveal {}: detached", self.core.label());
        true
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::atomic::AtomicUsize, sync::atomic::Ordering, time::Duration};

    use super::*;
    use crate::reveal::{ManualScheduler, DEFAULT_REPLAY_DELAY};

    fn setup(section: &str) -> (HashBus, Arc<ManualScheduler>, Coordinator) {
        let bus = HashBus::new();
        let scheduler = Arc::new(ManualScheduler::default());
        let coordinator = Coordinator::attach(
            Some(section),
            RevealOptions::card(),
            Some(&bus),
            scheduler.clone(),
        );
        (bus, scheduler, coordinator)
    }

    fn epoch(c: &Coordinator) -> u64 {
        c.snapshot().epoch.get()
    }

    #[test]
    fn test_education_scenario() {
        let (bus, scheduler, c) = setup("education");
        assert_eq!(c.snapshot(), RevealSnapshot::default());

        c.observe(true);
        assert_eq!(epoch(&c), 0);
        assert!(!c.snapshot().armed);

        c.observe(false);
        assert_eq!(epoch(&c), 1);
        assert!(c.snapshot().armed);

        c.observe(true);
        assert_eq!(epoch(&c), 1);
        assert!(!c.snapshot().armed);

        bus.publish(&"#education".into());
        // nothing happens before the delay
        assert_eq!(epoch(&c), 1);
        scheduler.advance(DEFAULT_REPLAY_DELAY);
        assert_eq!(epoch(&c), 2);
        assert!(!c.snapshot().armed);

        bus.publish(&"#projects".into());
        scheduler.advance(DEFAULT_REPLAY_DELAY);
        assert_eq!(epoch(&c), 2);
    }

    #[test]
    fn test_navigation_replays_once_per_event() {
        let (bus, scheduler, c) = setup("projects");
        c.observe(true);

        // two matching events close together are both honoured
        bus.publish(&"projects".into());
        scheduler.advance(Duration::from_millis(30));
        bus.publish(&"projects".into());
        assert_eq!(c.pending_replays(), 2);

        scheduler.advance(Duration::from_millis(70));
        assert_eq!(epoch(&c), 1);
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(epoch(&c), 2);
        assert_eq!(c.pending_replays(), 0);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(epoch(&c), 2);
    }

    #[test]
    fn test_navigation_clears_arm_while_hidden() {
        let (bus, scheduler, c) = setup("skills");
        c.observe(true);
        c.observe(false);
        assert!(c.snapshot().armed);

        bus.publish(&"skills".into());
        scheduler.advance(DEFAULT_REPLAY_DELAY);
        let snap = c.snapshot();
        assert_eq!(snap.epoch.get(), 2);
        assert!(!snap.armed);
        assert!(!snap.visible);

        // disarmed while hidden: the next exit after re-entry bumps again
        c.observe(true);
        c.observe(false);
        assert_eq!(epoch(&c), 3);
    }

    #[test]
    fn test_teardown_stops_everything() {
        let (bus, scheduler, c) = setup("experience");
        let changes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&changes);
        c.on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        c.observe(true);
        bus.publish(&"experience".into());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(bus.subscriber_count("experience"), 1);

        assert!(c.detach());
        assert!(!c.detach());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(bus.subscriber_count("experience"), 0);

        let before = epoch(&c);
        c.observe(false);
        c.observe(true);
        assert_eq!(bus.publish(&"experience".into()), 0);
        assert!(!c.navigate(&"experience".into()));
        scheduler.advance(Duration::from_secs(1));
        assert_eq!(epoch(&c), before);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_registrations() {
        let bus = HashBus::new();
        let scheduler = Arc::new(ManualScheduler::default());
        {
            let c = Coordinator::attach(
                Some("bento"),
                RevealOptions::header(),
                Some(&bus),
                scheduler.clone(),
            );
            c.navigate(&"bento".into());
            assert_eq!(scheduler.pending(), 1);
        }
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(bus.subscriber_count("bento"), 0);
        assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_missing_section_is_inert_for_navigation() {
        let bus = HashBus::new();
        let scheduler = Arc::new(ManualScheduler::default());
        let c = Coordinator::attach(None, RevealOptions::card(), Some(&bus), scheduler.clone());

        assert!(!c.navigate(&"".into()));
        assert!(!c.navigate(&"home".into()));
        assert_eq!(scheduler.pending(), 0);

        // visibility is still tracked
        c.observe(true);
        c.observe(false);
        assert_eq!(epoch(&c), 1);
    }

    #[test]
    fn test_listener_sees_each_change() {
        let (_bus, scheduler, c) = setup("home");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        c.on_change(move |snap| sink.lock().unwrap().push(snap.epoch.get()));

        c.observe(true);
        c.observe(true);
        c.observe(false);
        c.navigate(&"home".into());
        scheduler.advance(DEFAULT_REPLAY_DELAY);

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_custom_delay_and_policy() {
        let bus = HashBus::new();
        let scheduler = Arc::new(ManualScheduler::default());
        let options = RevealOptions::section().with_replay_delay(Duration::from_millis(400));
        let c = Coordinator::attach(Some("home"), options, Some(&bus), scheduler.clone());

        c.observe(true);
        assert_eq!(epoch(&c), 1);

        bus.publish(&"home".into());
        scheduler.advance(DEFAULT_REPLAY_DELAY);
        assert_eq!(epoch(&c), 1);
        scheduler.advance(Duration::from_millis(300));
        assert_eq!(epoch(&c), 2);
    }

    struct RefusingScheduler;

    impl ReplayScheduler for RefusingScheduler {
        fn schedule(&self, _: Duration, _: crate::reveal::Task) -> Option<TaskId> {
            None
        }

        fn cancel(&self, _: TaskId) {}
    }

    #[test]
    fn test_unschedulable_replay_is_skipped() {
        let bus = HashBus::new();
        let c = Coordinator::attach(
            Some("education"),
            RevealOptions::card(),
            Some(&bus),
            Arc::new(RefusingScheduler),
        );
        assert!(!c.navigate(&"education".into()));
        assert_eq!(c.pending_replays(), 0);
        assert_eq!(epoch(&c), 0);
    }
}
