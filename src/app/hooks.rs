use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener, use_intersection_observer_with_options, use_window,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use crate::{
    config::SITE_CONFIG,
    reveal::{
        Coordinator, Epoch, Fragment, HashBus, ReplayScheduler, RevealOptions, RootMargin, Task,
        TaskId,
    },
};

/// Identifier of the enclosing `PageSection`, provided as context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionScope(pub &'static str);

/// Section most recently scrolled into view or picked from the nav bar.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    active: RwSignal<Option<&'static str>>,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    pub fn mark(&self, section: &'static str) {
        if self.active.get_untracked() != Some(section) {
            self.active.set(Some(section));
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active.get()
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// `setTimeout` behind the [`ReplayScheduler`] seam.
#[derive(Default)]
pub struct BrowserScheduler {
    next_id: AtomicU64,
    handles: Arc<Mutex<HashMap<TaskId, TimeoutHandle>>>,
}

impl ReplayScheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Option<TaskId> {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let handles = Arc::clone(&self.handles);
        let handle = set_timeout_with_handle(
            move || {
                handles
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .remove(&id);
                task();
            },
            delay,
        )
        .map_err(|e| log::warn!("setTimeout failed: {e:?}"))
        .ok()?;
        self.handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, handle);
        Some(id)
    }

    fn cancel(&self, id: TaskId) {
        let handle = self
            .handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

pub fn current_fragment() -> Option<Fragment> {
    let hash = window().location().hash().ok()?;
    Some(Fragment::from_hash(&hash))
}

/// The single `hashchange` listener of the page. Every coordinator hears about
/// navigation through the bus instead of installing its own listener.
pub fn use_hash_relay(bus: HashBus) {
    let _ = use_event_listener(use_window(), ev::hashchange, move |_| {
        if let Some(fragment) = current_fragment() {
            bus.publish(&fragment);
        }
    });
}

#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    /// Drives the entrance animation. Follows the entrance observer when the
    /// options ask for one, otherwise the coordinator's own visibility.
    pub visible: Signal<bool>,
    pub epoch: Signal<Epoch>,
}

/// Attaches a [`Coordinator`] to `target` for the lifetime of the calling
/// component. Hosts re-create their animated subtree whenever `epoch` changes.
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> Reveal {
    let options = SITE_CONFIG.reveal_options(options);
    let section = use_context::<SectionScope>().map(|s| s.0);
    let bus = use_context::<HashBus>();
    let scheduler = use_context::<Arc<dyn ReplayScheduler>>()
        .unwrap_or_else(|| Arc::new(BrowserScheduler::default()));

    let visible = RwSignal::new(false);
    let epoch = RwSignal::new(Epoch::default());

    let threshold = options.threshold;
    let root_margin = options.root_margin.to_string();
    let replay_on_initial_hash = options.replay_on_initial_hash;
    let visibility_rule = options.clone();
    let entrance_rule = options.clone();
    let separate_entrance = options.separate_entrance();
    let entrance_margin = options.entrance_margin().to_string();

    let coordinator = Arc::new(Coordinator::attach(
        section,
        options,
        bus.as_ref(),
        scheduler,
    ));
    coordinator.on_change(move |snapshot| {
        if !separate_entrance {
            _ = visible.try_set(snapshot.visible);
        }
        _ = epoch.try_set(snapshot.epoch);
    });

    let observed = Arc::clone(&coordinator);
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                observed.observe(
                    visibility_rule
                        .counts_as_visible(entry.is_intersecting(), entry.intersection_ratio()),
                );
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold])
            .root_margin(root_margin),
    );

    let stop_entrance = separate_entrance.then(|| {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            target,
            move |entries, _| {
                for entry in entries {
                    _ = visible.try_set(
                        entrance_rule
                            .counts_as_visible(entry.is_intersecting(), entry.intersection_ratio()),
                    );
                }
            },
            UseIntersectionObserverOptions::default()
                .thresholds(vec![threshold])
                .root_margin(entrance_margin),
        );
        stop
    });

    if replay_on_initial_hash {
        let initial = Arc::clone(&coordinator);
        Effect::new(move |_| {
            if let Some(fragment) = current_fragment() {
                initial.navigate(&fragment);
            }
        });
    }

    on_cleanup(move || {
        stop();
        if let Some(stop_entrance) = &stop_entrance {
            stop_entrance();
        }
        coordinator.detach();
    });

    Reveal {
        visible: visible.into(),
        epoch: epoch.into(),
    }
}

/// Latches to true the first time `target` is seen, then stops observing.
pub fn use_first_sight(
    target: NodeRef<html::Div>,
    threshold: f64,
    root_margin: RootMargin,
) -> Signal<bool> {
    let seen = RwSignal::new(false);
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if entries.iter().any(|e| e.is_intersecting()) {
                _ = seen.try_set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold])
            .root_margin(root_margin.to_string()),
    );
    seen.into()
}
