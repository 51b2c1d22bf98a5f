//! Reveal animation for bar heights.
//!
//! The driver is a small state machine sampled once per frame with a
//! monotonic timestamp: `Idle -> Delayed -> Animating -> Done`. Every bind
//! mints a fresh [`DatasetToken`]; transitions carry the token they were
//! scheduled under and are discarded once a newer bind has replaced it, which
//! is the only cancellation mechanism.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Idle,
    Delayed,
    Animating,
    Done,
}

impl AnimationPhase {
    fn successor(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::Delayed),
            Self::Delayed => Some(Self::Animating),
            Self::Animating => Some(Self::Done),
            Self::Done => None,
        }
    }
}

/// Opaque identity of one dataset binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetToken(u64);

/// Timing curve applied to linear animation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Cubic bezier `(0.4, 0.0, 0.2, 1.0)`: quick start, long settle.
    FastOutSlowIn,
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Easing {
    /// Maps linear time in `[0, 1]` to eased progress; the endpoints are exact.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => fraction,
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

fn bezier_component(p1: f64, p2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    // Newton first, bisection when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let error = bezier_component(x1, x2, t) - x;
        if error.abs() < EPSILON {
            return bezier_component(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let estimate = bezier_component(x1, x2, t);
        if (estimate - x).abs() < EPSILON {
            break;
        }
        if estimate < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) * 0.5;
    }
    bezier_component(y1, y2, t)
}

/// Delay, duration and curve of the reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTimings {
    pub enabled: bool,
    pub settle_delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            enabled: true,
            settle_delay: Duration::from_millis(400),
            duration: Duration::from_millis(1_000),
            easing: Easing::FastOutSlowIn,
        }
    }
}

/// Snapshot of one binding's animation. Replaced wholesale on every bind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub progress: f64,
    pub phase: AnimationPhase,
    pub token: DatasetToken,
    phase_started_at: Option<Instant>,
}

impl AnimationState {
    #[must_use]
    pub fn phase_started_at(&self) -> Option<Instant> {
        self.phase_started_at
    }
}

/// A phase change scheduled under a specific binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub token: DatasetToken,
    pub from: AnimationPhase,
    pub to: AnimationPhase,
    pub due_at: Instant,
}

#[derive(Debug, Clone)]
pub struct AnimationDriver {
    timings: AnimationTimings,
    state: Option<AnimationState>,
    next_token: u64,
}

impl AnimationDriver {
    #[must_use]
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            timings,
            state: None,
            next_token: 0,
        }
    }

    #[must_use]
    pub fn timings(&self) -> AnimationTimings {
        self.timings
    }

    /// `None` until the first dataset is bound.
    #[must_use]
    pub fn state(&self) -> Option<AnimationState> {
        self.state
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.map_or(0.0, |state| state.progress)
    }

    /// Starts a new binding and returns its token.
    ///
    /// With animation enabled the binding starts `Idle` at progress 0; with it
    /// disabled it is `Done` at progress 1 straight away.
    pub fn bind(&mut self) -> DatasetToken {
        self.next_token = self.next_token.wrapping_add(1);
        let token = DatasetToken(self.next_token);

        let state = if self.timings.enabled {
            AnimationState {
                progress: 0.0,
                phase: AnimationPhase::Idle,
                token,
                phase_started_at: None,
            }
        } else {
            AnimationState {
                progress: 1.0,
                phase: AnimationPhase::Done,
                token,
                phase_started_at: None,
            }
        };
        trace!(?token, phase = ?state.phase, "bind animation");
        self.state = Some(state);
        token
    }

    /// The next phase change of the current binding, if any.
    ///
    /// `Idle` is scheduled for `now`; the others are due once their phase has
    /// lasted the settle delay or the animation duration.
    #[must_use]
    pub fn pending_transition(&self, now: Instant) -> Option<PendingTransition> {
        let state = self.state?;
        let to = state.phase.successor()?;
        let due_at = match (state.phase, state.phase_started_at) {
            (AnimationPhase::Idle, _) | (_, None) => now,
            (AnimationPhase::Delayed, Some(started)) => started + self.timings.settle_delay,
            (AnimationPhase::Animating, Some(started)) => started + self.timings.duration,
            (AnimationPhase::Done, Some(_)) => return None,
        };

        Some(PendingTransition {
            token: state.token,
            from: state.phase,
            to,
            due_at,
        })
    }

    /// Applies a scheduled transition; returns `false` when it was discarded.
    ///
    /// A transition is discarded when its token is no longer current or the
    /// state already moved past its starting phase.
    pub fn apply(&mut self, transition: PendingTransition) -> bool {
        let Some(state) = self.state else {
            return false;
        };
        if state.token != transition.token {
            warn!(
                stale = ?transition.token,
                current = ?state.token,
                "discard stale animation transition"
            );
            return false;
        }
        if state.phase != transition.from {
            return false;
        }

        let progress = match transition.to {
            AnimationPhase::Done => 1.0,
            _ => state.progress,
        };
        trace!(token = ?state.token, from = ?transition.from, to = ?transition.to, "animation transition");
        self.state = Some(AnimationState {
            progress,
            phase: transition.to,
            token: state.token,
            phase_started_at: Some(transition.due_at),
        });
        true
    }

    /// Samples the animation at `now`, applying every transition already due.
    ///
    /// Returns the progress to lay bars out with. A clock that steps backwards
    /// never moves progress back.
    pub fn advance(&mut self, now: Instant) -> f64 {
        while let Some(transition) = self.pending_transition(now) {
            if transition.due_at > now || !self.apply(transition) {
                break;
            }
        }

        let Some(mut state) = self.state else {
            return 0.0;
        };
        if state.phase == AnimationPhase::Animating {
            if let Some(started) = state.phase_started_at {
                let elapsed = now.saturating_duration_since(started);
                let fraction = if self.timings.duration.is_zero() {
                    1.0
                } else {
                    elapsed.as_secs_f64() / self.timings.duration.as_secs_f64()
                };
                // Progress only moves forward within one binding.
                state.progress = state.progress.max(self.timings.easing.transform(fraction));
                self.state = Some(state);
            }
        }
        state.progress
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state
            .is_some_and(|state| state.phase != AnimationPhase::Done)
    }
}
