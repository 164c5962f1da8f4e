use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::debug;

/// Page areas a pointer can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRegion {
    NavTrigger,
    NavMenu,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    Scroll { scroll_y: f64 },
    Resize { width: f64, height: f64 },
    PointerDown { region: PointerRegion },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Scroll,
    Resize,
    PointerDown,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Scroll { .. } => EventKind::Scroll,
            UiEvent::Resize { .. } => EventKind::Resize,
            UiEvent::PointerDown { .. } => EventKind::PointerDown,
        }
    }
}

type Listener = Arc<dyn Fn(&UiEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, (EventKind, Listener)>,
}

/// Global listener registry, the stand-in for window/document listeners.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Arc<Mutex<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the guard removes the listener"]
    pub fn add_listener<F>(&self, kind: EventKind, listener: F) -> ListenerGuard
    where
        F: Fn(&UiEvent) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, (kind, Arc::new(listener)));

        ListenerGuard {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Calls every listener of the event's kind in registration order.
    /// Listeners may add or remove listeners while being called.
    pub fn dispatch(&self, event: UiEvent) {
        let kind = event.kind();
        let matching: Vec<Listener> = lock(&self.registry)
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Arc::clone(l))
            .collect();

        for listener in matching {
            listener(&event);
        }
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        lock(&self.registry)
            .listeners
            .values()
            .filter(|(k, _)| *k == kind)
            .count()
    }
}

#[must_use = "dropping the guard removes the listener"]
pub struct ListenerGuard {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.remove(&self.id);
            debug!(listener = self.id, "Listener removed");
        }
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
