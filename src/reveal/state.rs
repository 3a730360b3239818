use std::fmt;

use super::options::ReplayPolicy;

/// Replay token handed to hosts. A changed value means "start over".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);

impl Epoch {
    pub fn get(self) -> u64 {
        self.0
    }

    fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a single notification did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Same visibility as before, nothing happened.
    Unchanged,
    /// Visibility flipped without touching the epoch.
    Moved,
    /// Visibility flipped and the epoch advanced.
    Replayed,
    /// Left view while already armed.
    Rearmed,
}

/// Visibility, debounce flag and epoch of one observed element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    policy: ReplayPolicy,
    visible: bool,
    armed: bool,
    epoch: Epoch,
}

impl RevealState {
    pub fn new(policy: ReplayPolicy) -> Self {
        Self {
            policy,
            visible: false,
            armed: false,
            epoch: Epoch::default(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Applies an intersection notification.
    pub fn observe(&mut self, now_visible: bool) -> Transition {
        let was_visible = self.visible;
        self.visible = now_visible;
        if was_visible == now_visible {
            return Transition::Unchanged;
        }

        match self.policy {
            ReplayPolicy::OnExit => {
                if now_visible {
                    self.armed = false;
                    Transition::Moved
                } else if self.armed {
                    Transition::Rearmed
                } else {
                    self.armed = true;
                    self.epoch.bump();
                    Transition::Replayed
                }
            }
            ReplayPolicy::OnEntry => {
                if now_visible {
                    self.epoch.bump();
                    Transition::Replayed
                } else {
                    Transition::Moved
                }
            }
        }
    }

    /// Forced replay after a direct navigation to the section.
    pub fn replay(&mut self) -> Epoch {
        self.armed = false;
        self.epoch.bump();
        self.epoch
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(ReplayPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch(state: &RevealState) -> u64 {
        state.epoch().get()
    }

    #[test]
    fn test_starts_hidden_unarmed() {
        let state = RevealState::default();
        assert!(!state.visible());
        assert!(!state.armed());
        assert_eq!(epoch(&state), 0);
    }

    #[test]
    fn test_exit_bumps_once_per_exit() {
        let mut state = RevealState::default();
        let events = [true, false, true, false, true, false];
        for e in events {
            state.observe(e);
        }
        // three true -> false transitions
        assert_eq!(epoch(&state), 3);

        // entering never bumps
        state.observe(true);
        assert_eq!(epoch(&state), 3);
        assert!(!state.armed());
    }

    #[test]
    fn test_repeated_notifications_are_idempotent() {
        let mut state = RevealState::default();
        assert_eq!(state.observe(false), Transition::Unchanged);
        assert_eq!(state.observe(false), Transition::Unchanged);
        assert_eq!(epoch(&state), 0);

        state.observe(true);
        assert_eq!(state.observe(true), Transition::Unchanged);
        assert_eq!(state.observe(false), Transition::Replayed);
        let armed = state.armed();
        assert_eq!(state.observe(false), Transition::Unchanged);
        assert_eq!(state.armed(), armed);
        assert_eq!(epoch(&state), 1);
    }

    #[test]
    fn test_reentry_clears_arm_without_bump() {
        let mut state = RevealState::default();
        state.observe(true);
        state.observe(false);
        assert!(state.armed());
        assert_eq!(state.observe(true), Transition::Moved);
        assert!(!state.armed());
        assert_eq!(epoch(&state), 1);
    }

    #[test]
    fn test_exit_while_armed_does_not_bump() {
        let mut state = RevealState::default();
        state.observe(true);
        state.observe(false);
        // a replay arrives while hidden, then the element is reported visible
        // and hidden again before anything else clears the arm
        state.armed = true;
        state.visible = true;
        assert_eq!(state.observe(false), Transition::Rearmed);
        assert_eq!(epoch(&state), 1);
    }

    #[test]
    fn test_replay_is_unconditional() {
        let mut state = RevealState::default();
        assert_eq!(state.replay().get(), 1);
        state.observe(true);
        assert_eq!(state.replay().get(), 2);
        state.observe(false);
        assert!(state.armed());
        assert_eq!(state.replay().get(), 4);
        assert!(!state.armed());
        assert!(!state.visible());
    }

    #[test]
    fn test_on_entry_policy() {
        let mut state = RevealState::new(ReplayPolicy::OnEntry);
        assert_eq!(state.observe(true), Transition::Replayed);
        assert_eq!(state.observe(false), Transition::Moved);
        assert!(!state.armed());
        assert_eq!(state.observe(true), Transition::Replayed);
        assert_eq!(epoch(&state), 2);
    }
}
