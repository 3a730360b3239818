use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, Weak},
};

/// A URL fragment without its leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Accepts either `location.hash` (`"#projects"`) or a bare identifier.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        Self(hash.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn targets(&self, section: &str) -> bool {
        !self.is_empty() && self.0 == section
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Self::from_hash(value)
    }
}

type Listener = Arc<dyn Fn(&Fragment) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    current: Option<Fragment>,
    subscribers: HashMap<String, Vec<(u64, Listener)>>,
}

impl BusInner {
    fn remove(&mut self, section: &str, id: u64) -> bool {
        let Some(list) = self.subscribers.get_mut(section) else {
            return false;
        };
        let before = list.len();
        list.retain(|(sid, _)| *sid != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.subscribers.remove(section);
        }
        removed
    }
}

/// Broadcasts fragment changes to subscribers filtered by section identifier.
///
/// One relay publishes every `hashchange`; each coordinator subscribes once for
/// its own section and hears nothing else.
#[derive(Clone, Default)]
pub struct HashBus {
    inner: Arc<Mutex<BusInner>>,
}

impl fmt::Debug for HashBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("HashBus")
            .field("current", &inner.current)
            .field("sections", &inner.subscribers.len())
            .finish()
    }
}

impl HashBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        // a listener that panicked leaves the map itself intact
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn subscribe<F>(&self, section: &str, listener: F) -> Subscription
    where
        F: Fn(&Fragment) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .subscribers
            .entry(section.to_string())
            .or_default()
            .push((id, Arc::new(listener)));
        log::trace!("hash bus: subscribed #{id} to {section}");
        Subscription {
            bus: Arc::downgrade(&self.inner),
            section: section.to_string(),
            id,
            active: true,
        }
    }

    /// Records the fragment and notifies the subscribers of that section.
    /// Returns the number of listeners called.
    pub fn publish(&self, fragment: &Fragment) -> usize {
        let listeners = {
            let mut inner = self.lock();
            inner.current = Some(fragment.clone());
            if fragment.is_empty() {
                return 0;
            }
            inner
                .subscribers
                .get(fragment.as_str())
                .map(|list| list.iter().map(|(_, l)| Arc::clone(l)).collect::<Vec<_>>())
                .unwrap_or_default()
        };
        log::debug!(
            "hash bus: {fragment} -> {} subscriber(s)",
            listeners.len()
        );
        for listener in &listeners {
            listener(fragment);
        }
        listeners.len()
    }

    pub fn current(&self) -> Option<Fragment> {
        self.lock().current.clone()
    }

    pub fn subscriber_count(&self, section: &str) -> usize {
        self.lock().subscribers.get(section).map_or(0, Vec::len)
    }
}

/// Handle to one bus registration. Unsubscribes on [`Subscription::cancel`] or
/// drop, whichever comes first.
pub struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    section: String,
    id: u64,
    active: bool,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("section", &self.section)
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true only for the call that actually removed the listener.
    pub fn cancel(&mut self) -> bool {
        if !std::mem::take(&mut self.active) {
            return false;
        }
        let Some(bus) = self.bus.upgrade() else {
            return false;
        };
        let mut inner = bus.lock().unwrap_or_else(|e| e.into_inner());
        let removed = inner.remove(&self.section, self.id);
        log::trace!("hash bus: unsubscribed #{} from {}", self.id, self.section);
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
