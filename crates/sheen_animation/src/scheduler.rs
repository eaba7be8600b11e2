//! Transition scheduler
//!
//! Owns one transition per animated control and fans a single timer delta
//! out to all of them. The delta always comes from the host's tick source;
//! the scheduler never reads a clock of its own.

use slotmap::{new_key_type, SlotMap};

use crate::transition::Transition;

new_key_type! {
    pub struct TransitionId;
}

/// Registry that ticks every live transition from one timer delta
pub struct TransitionScheduler {
    transitions: SlotMap<TransitionId, Transition>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self {
            transitions: SlotMap::with_key(),
        }
    }

    /// Register a control's transition and return its key
    pub fn insert(&mut self, transition: Transition) -> TransitionId {
        self.transitions.insert(transition)
    }

    pub fn get(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id)
    }

    pub fn get_mut(&mut self, id: TransitionId) -> Option<&mut Transition> {
        self.transitions.get_mut(id)
    }

    /// Remove a transition, typically when its control is destroyed
    pub fn remove(&mut self, id: TransitionId) -> Option<Transition> {
        self.transitions.remove(id)
    }

    /// Advance every registered transition by one timer delta
    pub fn tick_all(&mut self, delta_ms: f32) {
        for (_, transition) in self.transitions.iter_mut() {
            transition.tick(delta_ms);
        }
    }

    /// Check if any transition is still running.
    ///
    /// Hosts use this to stop their timer once everything has settled.
    pub fn has_active(&self) -> bool {
        self.transitions.iter().any(|(_, t)| t.is_active())
    }

    /// Iterate over all transitions (immutable)
    pub fn iter(&self) -> impl Iterator<Item = (TransitionId, &Transition)> {
        self.transitions.iter()
    }

    /// Iterate over all transitions (mutable)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TransitionId, &mut Transition)> {
        self.transitions.iter_mut()
    }

    /// Number of registered transitions
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{EaseKind, EaseMode};

    fn linear_transition(duration_ms: u32) -> Transition {
        let mut transition = Transition::new();
        transition.add_track(EaseKind::Linear, EaseMode::In, duration_ms, 0.0, 100.0);
        transition.start();
        transition
    }

    #[test]
    fn test_insert_get_remove() {
        let mut scheduler = TransitionScheduler::new();
        let id = scheduler.insert(linear_transition(100));
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.get(id).is_some());

        let removed = scheduler.remove(id);
        assert!(removed.is_some());
        assert!(scheduler.is_empty());
        assert!(scheduler.get(id).is_none());
    }

    #[test]
    fn test_tick_all_advances_every_transition() {
        let mut scheduler = TransitionScheduler::new();
        let a = scheduler.insert(linear_transition(100));
        let b = scheduler.insert(linear_transition(200));

        scheduler.tick_all(50.0);
        assert_eq!(scheduler.get(a).unwrap().value(0).unwrap(), 50.0);
        assert_eq!(scheduler.get(b).unwrap().value(0).unwrap(), 25.0);
    }

    #[test]
    fn test_has_active_tracks_slowest_transition() {
        let mut scheduler = TransitionScheduler::new();
        let short = scheduler.insert(linear_transition(100));
        let long = scheduler.insert(linear_transition(300));

        scheduler.tick_all(150.0);
        assert!(!scheduler.get(short).unwrap().is_active());
        assert!(scheduler.get(long).unwrap().is_active());
        assert!(scheduler.has_active());

        scheduler.tick_all(200.0);
        assert!(!scheduler.has_active());
    }

    #[test]
    fn test_restart_through_get_mut() {
        let mut scheduler = TransitionScheduler::new();
        let id = scheduler.insert(linear_transition(100));

        scheduler.tick_all(100.0);
        assert!(!scheduler.has_active());

        let transition = scheduler.get_mut(id).unwrap();
        transition.reset();
        transition.set_reverse(true);
        transition.start();
        assert!(scheduler.has_active());
    }
}
