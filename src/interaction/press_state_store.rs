use std::sync::Arc;
use std::sync::mpsc::Receiver;

use tracing::{debug, trace};

use super::press_state::{PressState, PressStateInit, PressStateKeys};
use super::shared_value::SharedValue;

/// Main-context mirror of a press state's `is_active` flag.
///
/// The flag may be written from a gesture thread. Changes arrive over the
/// flag's subscription channel and are applied only when [`sync`](Self::sync)
/// runs on the owning context, so view code reads a plain `bool`.
#[derive(Debug)]
pub struct ActiveFlagMirror {
    changes: Receiver<bool>,
    current: bool,
    transitions: u64,
}

impl ActiveFlagMirror {
    #[must_use]
    pub fn observe(flag: &SharedValue<bool>) -> Self {
        Self {
            changes: flag.subscribe(),
            current: flag.get(),
            transitions: 0,
        }
    }

    /// Switches to a new flag, adopting its current value.
    pub fn rebind(&mut self, flag: &SharedValue<bool>) {
        self.changes = flag.subscribe();
        self.apply(flag.get());
    }

    /// Drains pending flag changes.
    ///
    /// Returns the mirrored value if it differs from the value at the
    /// previous sync. A change that was reverted before this sync still
    /// counts toward [`transitions`](Self::transitions) but returns `None`.
    pub fn sync(&mut self) -> Option<bool> {
        let before = self.current;
        while let Ok(value) = self.changes.try_recv() {
            self.apply(value);
        }
        (self.current != before).then_some(self.current)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current
    }

    /// Number of value changes observed so far.
    #[must_use]
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    fn apply(&mut self, value: bool) {
        if value != self.current {
            self.current = value;
            self.transitions += 1;
            trace!(active = value, "press active flag mirrored");
        }
    }
}

/// Owns a chart's press state across view updates.
///
/// [`state`](Self::state) is called on every update with the caller's
/// initial values. The same `Arc` is returned for as long as the ordered
/// series keys stay the same, so a gesture handler can keep its reference;
/// a changed key set rebuilds the state and bumps [`generation`](Self::generation).
#[derive(Debug)]
pub struct PressStateStore<X> {
    state: Arc<PressState<X>>,
    keys: PressStateKeys,
    generation: u64,
    mirror: ActiveFlagMirror,
}

impl<X: Clone + PartialEq> PressStateStore<X> {
    #[must_use]
    pub fn new(init: &PressStateInit<X>) -> Self {
        let state = Arc::new(PressState::new(init));
        let mirror = ActiveFlagMirror::observe(&state.is_active);
        Self {
            keys: init.keys(),
            state,
            generation: 0,
            mirror,
        }
    }

    /// Returns the press state for `init`, rebuilding only on key changes.
    pub fn state(&mut self, init: &PressStateInit<X>) -> Arc<PressState<X>> {
        let keys = init.keys();
        if keys != self.keys {
            self.state = Arc::new(PressState::new(init));
            self.keys = keys;
            self.generation += 1;
            self.mirror.rebind(&self.state.is_active);
            debug!(
                generation = self.generation,
                y_series = self.keys.y.len(),
                yr_series = self.keys.yr.len(),
                "press state rebuilt for new series keys"
            );
        }
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn current(&self) -> &Arc<PressState<X>> {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies pending active-flag changes; see [`ActiveFlagMirror::sync`].
    pub fn sync_active(&mut self) -> Option<bool> {
        self.mirror.sync()
    }

    /// Mirrored active flag as of the last sync.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mirror.is_active()
    }

    #[must_use]
    pub fn mirror(&self) -> &ActiveFlagMirror {
        &self.mirror
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{ActiveFlagMirror, PressStateStore};
    use crate::interaction::press_state::PressStateInit;
    use crate::interaction::shared_value::SharedValue;

    #[test]
    fn mirror_ignores_repeated_writes() {
        let flag = SharedValue::new(false);
        let mut mirror = ActiveFlagMirror::observe(&flag);

        flag.set(false);
        assert_eq!(mirror.sync(), None);

        flag.set(true);
        flag.set(true);
        assert_eq!(mirror.sync(), Some(true));
        assert_eq!(mirror.sync(), None);
        assert_eq!(mirror.transitions(), 1);
    }

    #[test]
    fn reverted_change_between_syncs_reports_nothing() {
        let flag = SharedValue::new(false);
        let mut mirror = ActiveFlagMirror::observe(&flag);

        flag.set(true);
        flag.set(false);
        assert_eq!(mirror.sync(), None);
        assert!(!mirror.is_active());
        assert_eq!(mirror.transitions(), 2);
    }

    #[test]
    fn rebuilt_state_rebinds_mirror() {
        let init = PressStateInit::new(0.0).with_y("a", 1.0);
        let mut store = PressStateStore::new(&init);
        let first = store.state(&init);
        first.is_active.set(true);
        assert_eq!(store.sync_active(), Some(true));

        let second = store.state(&init.clone().with_y("b", 2.0));
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(!store.is_active());

        first.is_active.set(false);
        first.is_active.set(true);
        assert_eq!(store.sync_active(), None);

        second.is_active.set(true);
        assert_eq!(store.sync_active(), Some(true));
    }
}
