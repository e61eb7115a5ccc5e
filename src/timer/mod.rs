//! Countdown engine
//!
//! A [`Timer`] never decrements a counter. Every check recomputes the
//! remaining time from a fixed origin and the requested offset, so irregular
//! polling intervals cannot accumulate drift.

pub mod clock;
pub mod format;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{clock_text, duration_text};

/// Offsets are clamped to this many seconds either way so the expiry
/// instant always stays representable.
const MAX_OFFSET_SECONDS: i64 = 10_000 * 24 * 3600;

/// Build a countdown offset from an hours/minutes/seconds triple.
///
/// No range validation happens here; negative or zero values simply yield a
/// timer that is already expired.
pub fn offset_from_hms(hours: i64, minutes: i64, seconds: i64) -> TimeDelta {
    let total = hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds);
    TimeDelta::seconds(total.clamp(-MAX_OFFSET_SECONDS, MAX_OFFSET_SECONDS))
}

/// Bound an arbitrary offset to the representable range
fn clamp_offset(offset: TimeDelta) -> TimeDelta {
    let bound = TimeDelta::seconds(MAX_OFFSET_SECONDS);
    offset.clamp(-bound, bound)
}

/// A single countdown anchored on a fixed time base
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    /// Time base captured at launch, moved only by [`Timer::resume`]
    origin: DateTime<Utc>,
    /// Requested length, replaced by the leftover on resume
    target_offset: TimeDelta,
    /// Instant of the most recent recompute
    last_sample: DateTime<Utc>,
    /// `origin + target_offset - last_sample`
    remaining: TimeDelta,
}

impl Timer<SystemClock> {
    /// Launch a timer against the system clock
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        Self::with_clock(SystemClock, hours, minutes, seconds)
    }
}

impl<C: Clock> Timer<C> {
    /// Launch a timer against the given clock
    pub fn with_clock(clock: C, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self::with_offset(clock, offset_from_hms(hours, minutes, seconds))
    }

    /// Launch a timer for an already-built offset, clamped like
    /// [`offset_from_hms`]
    pub fn with_offset(clock: C, target_offset: TimeDelta) -> Self {
        let target_offset = clamp_offset(target_offset);
        let origin = clock.now();
        debug!("Timer launched for {}", duration_text(target_offset));

        Self {
            clock,
            origin,
            target_offset,
            last_sample: origin,
            remaining: target_offset,
        }
    }

    /// The instant at which the countdown reaches zero
    pub fn expiry_instant(&self) -> DateTime<Utc> {
        self.origin + self.target_offset
    }

    /// Resample the clock and report whether the expiry instant was reached.
    ///
    /// This is the only place `last_sample` and `remaining` change.
    pub fn is_expired(&mut self) -> bool {
        self.last_sample = self.clock.now();
        let expiry = self.expiry_instant();
        self.remaining = expiry - self.last_sample;
        self.last_sample >= expiry
    }

    /// Remaining time as of the last [`Timer::is_expired`] call
    pub fn remaining(&self) -> TimeDelta {
        self.remaining
    }

    /// Remaining time as of the last check, as `H:MM:SS[.ffffff]`.
    ///
    /// Does not resample; the value is stale until the next
    /// [`Timer::is_expired`] call.
    pub fn remaining_text(&self) -> String {
        duration_text(self.remaining)
    }

    /// Re-anchor after a pause.
    ///
    /// The caller pauses by not polling; on resume the countdown continues
    /// from the last sampled leftover against a fresh origin.
    pub fn resume(&mut self) {
        self.origin = self.clock.now();
        self.target_offset = clamp_offset(self.remaining);
        debug!(
            "Timer resumed with {} left, expiring at {}",
            duration_text(self.remaining),
            self.expiry_instant()
        );
    }

    pub fn origin(&self) -> DateTime<Utc> {
        self.origin
    }

    pub fn target_offset(&self) -> TimeDelta {
        self.target_offset
    }

    pub fn last_sample(&self) -> DateTime<Utc> {
        self.last_sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn clock() -> ManualClock {
        ManualClock::starting_at(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_construction_sets_time_base() {
        let clock = clock();
        let timer = Timer::with_clock(clock.clone(), 1, 2, 3);

        assert_eq!(timer.origin(), clock.now());
        assert_eq!(timer.last_sample(), clock.now());
        assert_eq!(timer.target_offset(), TimeDelta::seconds(3723));
        assert_eq!(timer.remaining(), TimeDelta::seconds(3723));
        assert_eq!(timer.remaining_text(), "1:02:03");
    }

    #[test]
    fn test_countdown_is_monotonic_until_expiry() {
        let clock = clock();
        let mut timer = Timer::with_clock(clock.clone(), 0, 0, 5);
        let mut previous = timer.remaining();

        for step_ms in [10, 700, 1, 1_500, 333, 2_000] {
            clock.advance(TimeDelta::milliseconds(step_ms));
            assert!(!timer.is_expired());
            assert!(timer.remaining() <= previous);
            previous = timer.remaining();
        }

        // 4.544s elapsed so far
        clock.advance(TimeDelta::milliseconds(455));
        assert!(!timer.is_expired());
        assert_eq!(timer.remaining_text(), "0:00:00.001000");

        clock.advance(TimeDelta::milliseconds(1));
        assert!(timer.is_expired());
        assert_eq!(timer.remaining(), TimeDelta::zero());

        clock.advance(TimeDelta::seconds(2));
        assert!(timer.is_expired());
        assert_eq!(timer.remaining_text(), "-0:00:02");
    }

    #[test]
    fn test_expiry_instant_is_stable_across_samples() {
        let clock = clock();
        let mut timer = Timer::with_clock(clock.clone(), 0, 25, 0);
        let expiry = timer.expiry_instant();

        for _ in 0..1_000 {
            clock.advance(TimeDelta::milliseconds(7));
            timer.is_expired();
        }

        assert_eq!(timer.expiry_instant(), expiry);
        assert_eq!(timer.expiry_instant(), timer.origin() + TimeDelta::minutes(25));
        assert_eq!(timer.remaining(), TimeDelta::minutes(25) - TimeDelta::seconds(7));
    }

    #[test]
    fn test_remaining_text_does_not_resample() {
        let clock = clock();
        let mut timer = Timer::with_clock(clock.clone(), 0, 1, 0);

        clock.advance(TimeDelta::seconds(10));
        assert_eq!(timer.remaining_text(), "0:01:00");

        timer.is_expired();
        assert_eq!(timer.remaining_text(), "0:00:50");
    }

    #[test]
    fn test_resume_preserves_remaining_time() {
        let clock = clock();
        let mut timer = Timer::with_clock(clock.clone(), 0, 0, 30);

        clock.advance(TimeDelta::seconds(12));
        assert!(!timer.is_expired());
        let left_at_pause = timer.remaining();

        // Paused: nobody polls for a while
        clock.advance(TimeDelta::minutes(10));
        timer.resume();

        assert_eq!(timer.origin(), clock.now());
        assert_eq!(timer.target_offset(), left_at_pause);
        assert_eq!(timer.expiry_instant(), clock.now() + left_at_pause);

        clock.advance(TimeDelta::seconds(17));
        assert!(!timer.is_expired());
        clock.advance(TimeDelta::seconds(1));
        assert!(timer.is_expired());
    }

    #[test]
    fn test_zero_and_negative_durations_expire_immediately() {
        let clock = clock();
        let mut zero = Timer::with_clock(clock.clone(), 0, 0, 0);
        let mut negative = Timer::with_clock(clock.clone(), 0, -1, 0);

        assert!(zero.is_expired());
        assert!(negative.is_expired());
        assert_eq!(negative.remaining(), TimeDelta::seconds(-60));
    }

    #[test]
    fn test_offset_is_clamped() {
        let huge = offset_from_hms(i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(huge, TimeDelta::seconds(MAX_OFFSET_SECONDS));
        assert_eq!(offset_from_hms(0, 90, 0), TimeDelta::seconds(5400));
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        let clock = clock();
        let mut longest = Timer::with_offset(clock.clone(), TimeDelta::MAX);
        let mut shortest = Timer::with_offset(clock.clone(), TimeDelta::MIN);

        assert!(!longest.is_expired());
        assert_eq!(longest.target_offset(), TimeDelta::seconds(MAX_OFFSET_SECONDS));
        assert_eq!(longest.expiry_instant(), clock.now() + TimeDelta::seconds(MAX_OFFSET_SECONDS));

        assert!(shortest.is_expired());
        assert_eq!(shortest.remaining(), TimeDelta::seconds(-MAX_OFFSET_SECONDS));

        shortest.resume();
        assert!(shortest.is_expired());
    }

    #[test]
    fn test_real_clock_expiry() {
        let mut timer = Timer::new(0, 0, 1);
        assert!(!timer.is_expired());

        std::thread::sleep(std::time::Duration::from_millis(1_100));
        assert!(timer.is_expired());
    }
}
