//! Focus timer state machine.
//!
//! # Responsibility
//! - Model the work/break countdown cycle as an explicit state machine.
//! - Report mode completions so the host can notify the user.
//!
//! # Invariants
//! - The machine never schedules anything itself; the host calls [`tick`]
//!   once per elapsed second (one-second granularity, drift tolerated).
//! - `start` is idempotent: starting a running timer never double-arms.
//! - A completion swaps mode, reloads the new mode's configured duration
//!   and stays running, so the cycle alternates until `pause`/`reset`.
//! - Settings changes apply to future resets and completions only; the
//!   currently running countdown is untouched.
//!
//! [`tick`]: FocusTimer::tick

use crate::model::settings::PomodoroSettings;
use serde::Serialize;

const SECS_PER_MINUTE: u32 = 60;

/// Which half of the cycle is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Work,
    Break,
}

/// A completed countdown: the mode swap and the message to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerTransition {
    pub from: TimerMode,
    pub to: TimerMode,
    /// User-facing notification text.
    pub message: &'static str,
}

/// Work/break countdown driven by host ticks.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    mode: TimerMode,
    remaining_secs: u32,
    running: bool,
    work_secs: u32,
    break_secs: u32,
}

impl FocusTimer {
    /// Creates a paused timer in `Work` mode at the configured duration.
    pub fn new(settings: &PomodoroSettings) -> Self {
        let work_secs = settings.work_minutes * SECS_PER_MINUTE;
        Self {
            mode: TimerMode::Work,
            remaining_secs: work_secs,
            running: false,
            work_secs,
            break_secs: settings.break_minutes * SECS_PER_MINUTE,
        }
    }

    /// Updates the configured durations used by future resets and
    /// completions. The current countdown is never altered.
    pub fn apply_settings(&mut self, settings: &PomodoroSettings) {
        self.work_secs = settings.work_minutes * SECS_PER_MINUTE;
        self.break_secs = settings.break_minutes * SECS_PER_MINUTE;
    }

    /// Starts the countdown in the current mode. No-op when running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts the countdown, preserving remaining seconds. No-op when paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Forces `Work` mode at the configured work duration, paused.
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = TimerMode::Work;
        self.remaining_secs = self.work_secs;
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `None` when paused or when the countdown has seconds left.
    /// When the countdown reaches zero the timer swaps mode, reloads the new
    /// mode's configured duration, stays running, and returns the
    /// transition.
    pub fn tick(&mut self) -> Option<TimerTransition> {
        if !self.running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        let transition = match self.mode {
            TimerMode::Work => TimerTransition {
                from: TimerMode::Work,
                to: TimerMode::Break,
                message: "Work session complete! Time for a break.",
            },
            TimerMode::Break => TimerTransition {
                from: TimerMode::Break,
                to: TimerMode::Work,
                message: "Break finished! Back to work.",
            },
        };
        self.mode = transition.to;
        self.remaining_secs = self.duration_for(transition.to);
        Some(transition)
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as `MM:SS`.
    pub fn remaining_display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_secs / SECS_PER_MINUTE,
            self.remaining_secs % SECS_PER_MINUTE
        )
    }

    fn duration_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}
