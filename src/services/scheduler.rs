//! Poll scheduling state machine.
//!
//! Decides whether a poll may run now and, after a successful poll,
//! when the next one is allowed. All arithmetic happens on epochs
//! shifted into a fixed reference timezone so the daily window is
//! plain integer math. State flows value-in/value-out; nothing here
//! mutates shared storage.

use chrono::{DateTime, Datelike, Utc, Weekday};
use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_TIMEZONE_OFFSET_SECS, SECONDS_PER_DAY, SECONDS_PER_HOUR, START_POLLING_HOUR,
    STOP_POLLING_HOUR,
};
use crate::models::{PollState, TriggerReason};

/// Daily polling window in the fixed reference timezone.
#[derive(Debug, Clone, Copy)]
pub struct PollWindow {
    /// First hour polls are allowed (inclusive)
    pub start_hour: i64,
    /// Hour polling stops (exclusive)
    pub stop_hour: i64,
    /// Reference timezone offset in seconds
    pub tz_offset_secs: i64,
}

impl Default for PollWindow {
    fn default() -> Self {
        Self {
            start_hour: START_POLLING_HOUR,
            stop_hour: STOP_POLLING_HOUR,
            tz_offset_secs: DEFAULT_TIMEZONE_OFFSET_SECS,
        }
    }
}

/// Gate decision for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Weekend suppression: publish a hidden result, touch no state
    HiddenWeekend,
    /// Still inside the throttle window: reuse the previous output
    Throttled,
    /// Poll may run now
    Due,
}

/// Shift a unix epoch into the reference timezone.
pub fn reference_epoch(now_unix: i64, window: &PollWindow) -> i64 {
    now_unix + window.tz_offset_secs
}

/// Saturday/Sunday check on a reference-adjusted epoch. An
/// unrepresentable timestamp skips the check rather than failing the
/// poll.
pub fn is_weekend(reference_epoch: i64) -> bool {
    match DateTime::<Utc>::from_timestamp(reference_epoch, 0) {
        Some(when) => matches!(when.weekday(), Weekday::Sat | Weekday::Sun),
        None => {
            warn!(epoch = reference_epoch, "epoch out of range, skipping weekend check");
            false
        }
    }
}

/// Apply a trigger to the scheduling state before gating.
///
/// Manual and settings-changed triggers force the next poll by
/// clearing the throttle. Reverse-mode: a settings change always
/// clears it, a manual trigger flips it, and with click-reverse
/// disabled it is forced off. Periodic ticks change nothing.
pub fn apply_trigger(state: PollState, reason: TriggerReason, click_reverse: bool) -> PollState {
    match reason {
        TriggerReason::Manual | TriggerReason::SettingsChanged => PollState {
            next_allowed_epoch: 0,
            reverse_mode: click_reverse
                && reason != TriggerReason::SettingsChanged
                && !state.reverse_mode,
        },
        TriggerReason::Periodic => state,
    }
}

/// Decide whether this invocation may poll. The weekend gate wins over
/// the throttle gate.
pub fn gate(state: PollState, reference_epoch: i64, hide_on_weekends: bool) -> Gate {
    if hide_on_weekends && is_weekend(reference_epoch) {
        return Gate::HiddenWeekend;
    }
    if state.next_allowed_epoch > reference_epoch {
        return Gate::Throttled;
    }
    Gate::Due
}

/// Advance the throttle after a successful poll.
///
/// Inside the window on a weekday the state is left alone, so the next
/// periodic tick polls again. Otherwise the next poll is deferred to a
/// start-hour boundary: today's when still before the start hour,
/// tomorrow's when at/after the stop hour. Failed polls never reach
/// this function, so they retry on the next tick.
pub fn after_success(state: PollState, reference_epoch: i64, window: &PollWindow) -> PollState {
    let daily_seconds = reference_epoch.rem_euclid(SECONDS_PER_DAY);
    let daily_hours = daily_seconds / SECONDS_PER_HOUR;

    let mut next = state;
    if is_weekend(reference_epoch)
        || daily_hours < window.start_hour
        || window.stop_hour <= daily_hours
    {
        // Midnight of the current day plus the window's start hour.
        next.next_allowed_epoch =
            reference_epoch - daily_seconds + window.start_hour * SECONDS_PER_HOUR;

        // Still in the current day, push into tomorrow.
        if window.stop_hour <= daily_hours {
            next.next_allowed_epoch += SECONDS_PER_DAY;
        }
        debug!(
            next_allowed_epoch = next.next_allowed_epoch,
            "outside polling window, throttled"
        );
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Reference-adjusted epoch for a given wall-clock moment. The
    // scheduler interprets the shifted epoch as local time, so UTC
    // construction gives exact control over hour and weekday.
    fn epoch(y: i32, m: u32, d: u32, h: u32) -> i64 {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().timestamp()
    }

    #[test]
    fn test_weekday_detection() {
        assert!(!is_weekend(epoch(2024, 1, 3, 12))); // Wednesday
        assert!(is_weekend(epoch(2024, 1, 6, 12))); // Saturday
        assert!(is_weekend(epoch(2024, 1, 7, 12))); // Sunday
    }

    #[test]
    fn test_success_inside_window_stays_due() {
        let window = PollWindow::default();
        let state = after_success(PollState::default(), epoch(2024, 1, 3, 16), &window);
        assert_eq!(state.next_allowed_epoch, 0);
    }

    #[test]
    fn test_success_at_stop_hour_defers_to_next_day() {
        let window = PollWindow::default();
        let state = after_success(PollState::default(), epoch(2024, 1, 3, 17), &window);
        assert_eq!(state.next_allowed_epoch, epoch(2024, 1, 4, 8));
    }

    #[test]
    fn test_success_before_start_hour_defers_to_same_day() {
        let window = PollWindow::default();
        let state = after_success(PollState::default(), epoch(2024, 1, 3, 6), &window);
        assert_eq!(state.next_allowed_epoch, epoch(2024, 1, 3, 8));
    }

    #[test]
    fn test_throttle_gate() {
        let now = epoch(2024, 1, 3, 12);
        let throttled = PollState {
            next_allowed_epoch: now + 60,
            reverse_mode: false,
        };
        assert_eq!(gate(throttled, now, false), Gate::Throttled);

        let due = PollState {
            next_allowed_epoch: now,
            reverse_mode: false,
        };
        assert_eq!(gate(due, now, false), Gate::Due);
    }

    #[test]
    fn test_weekend_gate_beats_throttle() {
        let saturday = epoch(2024, 1, 6, 12);
        let state = PollState {
            next_allowed_epoch: saturday + 60,
            reverse_mode: false,
        };
        assert_eq!(gate(state, saturday, true), Gate::HiddenWeekend);
        assert_eq!(gate(state, saturday, false), Gate::Throttled);
    }

    #[test]
    fn test_manual_trigger_forces_poll() {
        let throttled = PollState {
            next_allowed_epoch: i64::MAX,
            reverse_mode: false,
        };
        let state = apply_trigger(throttled, TriggerReason::Manual, false);
        assert_eq!(state.next_allowed_epoch, 0);
        assert_eq!(gate(state, epoch(2024, 1, 3, 12), false), Gate::Due);
    }

    #[test]
    fn test_periodic_trigger_preserves_throttle() {
        let throttled = PollState {
            next_allowed_epoch: 1_000,
            reverse_mode: true,
        };
        assert_eq!(
            apply_trigger(throttled, TriggerReason::Periodic, true),
            throttled
        );
    }

    #[test]
    fn test_reverse_mode_transition_table() {
        let off = PollState::default();

        // Manual with click-reverse enabled toggles each time.
        let on = apply_trigger(off, TriggerReason::Manual, true);
        assert!(on.reverse_mode);
        let off_again = apply_trigger(on, TriggerReason::Manual, true);
        assert!(!off_again.reverse_mode);

        // Settings change always clears, even when enabled.
        let cleared = apply_trigger(on, TriggerReason::SettingsChanged, true);
        assert!(!cleared.reverse_mode);

        // Disabled click-reverse forces it off.
        let forced_off = apply_trigger(on, TriggerReason::Manual, false);
        assert!(!forced_off.reverse_mode);
    }

    #[test]
    fn test_weekend_success_defers_within_day() {
        // Saturday noon: next allowed is that day's start hour, which
        // has already passed, so the next tick is effectively due.
        let window = PollWindow::default();
        let saturday_noon = epoch(2024, 1, 6, 12);
        let state = after_success(PollState::default(), saturday_noon, &window);
        assert_eq!(state.next_allowed_epoch, epoch(2024, 1, 6, 8));
    }
}
