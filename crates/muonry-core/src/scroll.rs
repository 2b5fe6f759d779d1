//! Host scroll signal.
//!
//! [`ScrollBus`] stands between the hosting environment (the browser window,
//! or a test) and the components that react to scrolling. Subscribing returns
//! a [`ScrollListener`] guard; the callback stays attached exactly as long as
//! the guard is alive.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
};

type Callback = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl Listeners {
    fn is_attached(&self, id: u64) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }
}

/// Fan-out of vertical scroll offsets to attached listeners.
///
/// Cloning the bus yields another handle to the same listener set.
#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Arc<Mutex<Listeners>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `callback`. It receives every dispatched offset until the
    /// returned guard is dropped.
    #[must_use = "dropping the listener detaches it immediately"]
    pub fn listen(&self, callback: impl Fn(f64) + Send + Sync + 'static) -> ScrollListener {
        let mut listeners = lock(&self.inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(callback)));
        tracing::trace!(id, attached = listeners.entries.len(), "scroll listener attached");

        ScrollListener {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver `offset` to every attached listener in attach order. Returns
    /// how many listeners were called.
    pub fn dispatch(&self, offset: f64) -> usize {
        let snapshot: Vec<(u64, Callback)> = lock(&self.inner)
            .entries
            .iter()
            .map(|(id, callback)| (*id, Arc::clone(callback)))
            .collect();

        let mut delivered = 0;
        for (id, callback) in snapshot {
            // A callback may detach a later listener; skip it if so.
            if !lock(&self.inner).is_attached(id) {
                continue;
            }
            callback(offset);
            delivered += 1;
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).entries.len()
    }
}

impl fmt::Debug for ScrollBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Attachment of one callback to a [`ScrollBus`]. Detaches on drop.
#[derive(Debug)]
pub struct ScrollListener {
    id: u64,
    bus: Weak<Mutex<Listeners>>,
}

impl ScrollListener {
    /// Detach now. Equivalent to dropping the guard.
    pub fn detach(self) {}
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let Some(inner) = self.bus.upgrade() else {
            return;
        };
        let mut listeners = lock(&inner);
        listeners.entries.retain(|(id, _)| *id != self.id);
        tracing::trace!(
            id = self.id,
            attached = listeners.entries.len(),
            "scroll listener detached"
        );
    }
}

fn lock(inner: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
