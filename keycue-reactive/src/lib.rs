//! Reactive text cells for keycue.
//!
//! Localized strings arrive from the host as *settable sources* and the
//! engine hands back *derived* values with an explicit dependency list.
//! Everything is synchronous: a dependency change recomputes the derived
//! string immediately and notifies observers before `set` returns. There is
//! no scheduler and no suspension point.
//!
//! Observers are detached by dropping the [`Subscription`] guard returned
//! from [`TextHandle::observe`]. Consumers own that guard for as long as the
//! consuming UI element lives; leaking it grows the observer list for the
//! lifetime of the cell.

mod pattern;

pub use pattern::fill_pattern;

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::{Arc, Weak};

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

struct Derived {
    compute: Box<dyn Fn() -> String + Send + Sync>,
    cache: RwLock<Option<String>>,
    /// Dependencies are held here so they outlive this cell even if the
    /// compute closure captures nothing.
    _deps: Vec<TextHandle>,
    /// Subscriptions on every dependency; dropped with the cell.
    _watches: Vec<Subscription>,
}

enum Kind {
    Source(RwLock<String>),
    Derived(Derived),
}

struct Inner {
    kind: Kind,
    observers: Mutex<Observers>,
}

impl Inner {
    /// Invoke every observer with the new value. Callbacks run outside the
    /// observer-list lock so they may observe or detach freely.
    fn notify(&self, value: &str) {
        let callbacks: Vec<Callback> = {
            let observers = self.observers.lock();
            observers.entries.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for cb in callbacks {
            cb(value);
        }
    }

    /// Recompute a derived cell and propagate downstream if the string
    /// actually changed. No-op for sources.
    fn refresh(cell: &Arc<Self>) {
        let Kind::Derived(derived) = &cell.kind else {
            return;
        };
        let fresh = (derived.compute)();
        let changed = {
            let mut cache = derived.cache.write();
            if cache.as_deref() == Some(fresh.as_str()) {
                false
            } else {
                *cache = Some(fresh.clone());
                true
            }
        };
        if changed {
            cell.notify(&fresh);
        }
    }
}

/// A shared handle to a reactive text value.
///
/// Cloning the handle clones the *reference*; all clones read and observe
/// the same underlying cell.
#[derive(Clone)]
pub struct TextHandle(Arc<Inner>);

impl TextHandle {
    /// Create a settable source cell holding `initial`.
    pub fn source(initial: impl Into<String>) -> Self {
        Self(Arc::new(Inner {
            kind: Kind::Source(RwLock::new(initial.into())),
            observers: Mutex::new(Observers::default()),
        }))
    }

    /// Create a derived cell recomputed from `compute` whenever any handle
    /// in `deps` changes.
    ///
    /// `deps` must list every handle `compute` reads. The list is declared
    /// up front precisely so the first recomputation already has the
    /// complete dependency set; nothing is discovered while computing.
    pub fn derived(
        deps: Vec<TextHandle>,
        compute: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        log::trace!("derived text cell over {} dependencies", deps.len());
        let inner = Arc::new_cyclic(|weak: &Weak<Inner>| {
            let watches = deps
                .iter()
                .map(|dep| {
                    let weak = weak.clone();
                    dep.observe(move |_| {
                        if let Some(cell) = weak.upgrade() {
                            Inner::refresh(&cell);
                        }
                    })
                })
                .collect();
            Inner {
                kind: Kind::Derived(Derived {
                    compute: Box::new(compute),
                    cache: RwLock::new(None),
                    _deps: deps,
                    _watches: watches,
                }),
                observers: Mutex::new(Observers::default()),
            }
        });
        Self(inner)
    }

    /// Read the current value, recomputing first if this is a derived cell
    /// that has never been read.
    pub fn get(&self) -> String {
        match &self.0.kind {
            Kind::Source(value) => value.read().clone(),
            Kind::Derived(derived) => {
                let cached = derived.cache.read().clone();
                if let Some(value) = cached {
                    return value;
                }
                let fresh = (derived.compute)();
                *derived.cache.write() = Some(fresh.clone());
                fresh
            }
        }
    }

    /// Replace the value of a source cell, notifying observers only when the
    /// string actually changed.
    ///
    /// # Panics
    ///
    /// Panics if called on a derived cell; derived values are owned by their
    /// compute function.
    pub fn set(&self, value: impl Into<String>) {
        let Kind::Source(current) = &self.0.kind else {
            panic!("cannot set a derived text value");
        };
        let value = value.into();
        let changed = {
            let mut guard = current.write();
            if *guard == value {
                false
            } else {
                *guard = value.clone();
                true
            }
        };
        if changed {
            self.0.notify(&value);
        }
    }

    /// Attach an observer invoked with the new value after every change.
    ///
    /// The observer stays attached until the returned [`Subscription`] is
    /// dropped.
    pub fn observe(&self, callback: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut observers = self.0.observers.lock();
            let id = observers.next_id;
            observers.next_id += 1;
            observers.entries.push((id, Arc::new(callback)));
            id
        };
        Subscription {
            cell: Arc::downgrade(&self.0),
            id,
        }
    }

    /// True for derived cells, false for sources.
    pub fn is_derived(&self) -> bool {
        matches!(self.0.kind, Kind::Derived(_))
    }

    /// Whether two handles point at the same underlying cell.
    pub fn same_cell(&self, other: &TextHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TextHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextHandle")
            .field("derived", &self.is_derived())
            .field("value", &self.get())
            .finish()
    }
}

/// RAII guard for an attached observer; dropping it detaches the observer.
pub struct Subscription {
    cell: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.upgrade() {
            let mut observers = cell.observers.lock();
            observers.entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
