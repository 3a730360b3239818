use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;

/// Wait between a direct navigation and the replay it triggers, so the smooth
/// scroll towards the section has started before the animation resets.
pub const DEFAULT_REPLAY_DELAY: Duration = Duration::from_millis(100);

/// When an intersection change advances the epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Advance once when the element fully leaves view, then wait for it to
    /// come back before arming again.
    #[default]
    OnExit,
    /// Advance every time the element enters view.
    OnEntry,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarginParseError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin takes one or two lengths, got {0}")]
    Arity(usize),
    #[error("invalid length in root margin: {0}")]
    Length(String),
}

/// Inset (negative) or outset (positive) applied to the viewport before the
/// intersection test, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootMargin {
    pub vertical: i32,
    pub horizontal: i32,
}

impl RootMargin {
    pub const fn new(vertical: i32, horizontal: i32) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px", self.vertical, self.horizontal)
    }
}

fn parse_length(s: &str) -> Result<i32, MarginParseError> {
    let digits = s.strip_suffix("px").unwrap_or(s);
    // a unitless value is only meaningful for zero
    if digits.len() == s.len() && s != "0" {
        return Err(MarginParseError::Length(s.to_string()));
    }
    digits
        .parse::<i32>()
        .map_err(|_| MarginParseError::Length(s.to_string()))
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();
        match parts.as_slice() {
            [] => Err(MarginParseError::Empty),
            [all] => {
                let v = parse_length(all)?;
                Ok(Self::new(v, v))
            }
            [vertical, horizontal] => Ok(Self::new(
                parse_length(vertical)?,
                parse_length(horizontal)?,
            )),
            _ => Err(MarginParseError::Arity(parts.len())),
        }
    }
}

/// Configuration of one coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub replay_delay: Duration,
    pub policy: ReplayPolicy,
    pub replay_on_initial_hash: bool,
    /// Margin of a separate observer that starts the entrance animation.
    /// `None` means the entrance follows `root_margin`.
    pub entrance_margin: Option<RootMargin>,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::default(),
            replay_delay: DEFAULT_REPLAY_DELAY,
            policy: ReplayPolicy::OnExit,
            replay_on_initial_hash: false,
            entrance_margin: None,
        }
    }
}

impl RevealOptions {
    /// Cards: detect a full exit slightly past the viewport edge, but only
    /// animate in once actually on screen.
    pub fn card() -> Self {
        Self {
            root_margin: RootMargin::new(100, 0),
            entrance_margin: Some(RootMargin::default()),
            ..Self::default()
        }
    }

    pub fn header() -> Self {
        Self::card()
    }

    /// Whole sections: entrance once a tenth is on screen, well inside the edge.
    pub fn section() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::new(-50, 0),
            policy: ReplayPolicy::OnEntry,
            replay_on_initial_hash: true,
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn with_replay_delay(mut self, replay_delay: Duration) -> Self {
        self.replay_delay = replay_delay;
        self
    }

    pub fn entrance_margin(&self) -> RootMargin {
        self.entrance_margin.unwrap_or(self.root_margin)
    }

    /// True when the entrance needs its own observer.
    pub fn separate_entrance(&self) -> bool {
        self.entrance_margin() != self.root_margin
    }

    /// Whether an intersection entry counts as visible under this threshold.
    pub fn counts_as_visible(&self, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting {
            return false;
        }
        self.threshold <= 0.0 || ratio >= self.threshold
    }
}
