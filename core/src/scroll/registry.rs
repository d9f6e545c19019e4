//! Process-wide set of active scroll observers.
//!
//! Every observer is tagged with the owner that registered it (a
//! section anchor such as `"about"`), so a section can release exactly
//! what it registered when it unmounts.

use std::collections::BTreeMap;
use std::fmt;

use super::trigger::{Bounds, ScrollTrigger, ToggleAction};

/// Handle returned by [`ObserverRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

struct Observer<T> {
    owner: &'static str,
    trigger: ScrollTrigger,
    payload: T,
}

/// Registry of scroll observers with an arbitrary payload per entry
/// (the frontend stores the animation to drive).
pub struct ObserverRegistry<T> {
    next_id: u64,
    observers: BTreeMap<ObserverId, Observer<T>>,
}

impl<T> Default for ObserverRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ObserverRegistry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: BTreeMap::new(),
        }
    }

    /// Add an observer. Ids are never reused.
    pub fn register(&mut self, owner: &'static str, trigger: ScrollTrigger, payload: T) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.observers.insert(id, Observer { owner, trigger, payload });
        log::debug!("🔭 Registered {} for '{}' ({} active)", id, owner, self.observers.len());
        id
    }

    /// Release every observer registered by `owner`.
    pub fn release_owner(&mut self, owner: &str) -> usize {
        let before = self.observers.len();
        self.observers.retain(|_, observer| observer.owner != owner);
        let released = before - self.observers.len();
        if released > 0 {
            log::debug!("🧹 Released {} observer(s) of '{}'", released, owner);
        }
        released
    }

    /// Release everything.
    pub fn release_all(&mut self) -> usize {
        let released = self.observers.len();
        self.observers.clear();
        released
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.contains_key(&id)
    }

    pub fn count_for(&self, owner: &str) -> usize {
        self.observers.values().filter(|o| o.owner == owner).count()
    }

    /// Re-measure every observer and evaluate it at the given scroll
    /// position.
    ///
    /// Observers whose element can no longer be measured are left untouched.
    /// Returns cloned payloads so callers can run them after releasing any
    /// borrow on the registry.
    pub fn update_measured(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        mut measure: impl FnMut(&T) -> Option<Bounds>,
    ) -> Vec<(T, ToggleAction)>
    where
        T: Clone,
    {
        let mut fired = Vec::new();
        for observer in self.observers.values_mut() {
            let Some(bounds) = measure(&observer.payload) else {
                continue;
            };
            observer.trigger.set_bounds(bounds);
            for action in observer.trigger.update(scroll_y, viewport_height) {
                fired.push((observer.payload.clone(), action));
            }
        }
        fired
    }
}
