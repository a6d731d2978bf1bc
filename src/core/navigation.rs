//! # Section Navigation
//!
//! Owns the active section index and turns navigation requests into
//! rate-limited transitions.
//!
//! ```text
//!                 request_navigate(valid)
//!        ┌──────┐ ─────────────────────────▶ ┌───────────────┐
//!        │ Idle │                            │ Transitioning │ ◀─┐ request_navigate(any)
//!        └──────┘ ◀───────────────────────── └───────────────┘ ──┘   (no-op)
//!                     cooldown timer fires
//! ```
//!
//! Two deferred actions exist, each a deadline owned by the navigator:
//!
//! - **debounce**: re-armed by every wheel event; when it fires, one
//!   navigation decision is made from the sign of the last event.
//! - **cooldown**: started by every committed navigation; while it is
//!   pending, all requests are ignored.
//!
//! Nothing here reads a clock. Every operation takes `now`, and the host
//! calls [`SectionNavigator::tick`] to fire expired timers. The TUI sizes
//! its poll timeout from [`SectionNavigator::next_deadline`].

use log::debug;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTiming {
    /// Quiet period after the last wheel event before a decision is made.
    pub debounce: Duration,
    /// Minimum spacing between two committed navigations.
    pub cooldown: Duration,
}

impl Default for NavigationTiming {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// One-shot deferred action. Dropping the handle cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    deadline: Instant,
}

impl Timer {
    fn after(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingWheel {
    timer: Timer,
    delta_y: f64,
}

#[derive(Debug)]
pub struct SectionNavigator {
    section_count: NonZeroUsize,
    timing: NavigationTiming,
    active_index: usize,
    cooldown: Option<Timer>,
    pending_wheel: Option<PendingWheel>,
}

impl SectionNavigator {
    pub fn new(section_count: NonZeroUsize, timing: NavigationTiming) -> Self {
        Self {
            section_count,
            timing,
            active_index: 0,
            cooldown: None,
            pending_wheel: None,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn section_count(&self) -> usize {
        self.section_count.get()
    }

    pub fn timing(&self) -> NavigationTiming {
        self.timing
    }

    pub fn phase(&self) -> Phase {
        if self.cooldown.is_some() {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase() == Phase::Transitioning
    }

    pub fn has_pending_wheel(&self) -> bool {
        self.pending_wheel.is_some()
    }

    /// Navigate to `target` unless it is out of range or a transition is running.
    ///
    /// Returns `true` when the navigation was committed. Navigating to the
    /// section that is already active still commits and starts a cooldown.
    pub fn request_navigate(&mut self, target: isize, now: Instant) -> bool {
        let index = match usize::try_from(target) {
            Ok(index) if index < self.section_count.get() => index,
            _ => {
                debug!(
                    "Ignoring navigation to {} (section count {})",
                    target, self.section_count
                );
                return false;
            }
        };

        if self.is_transitioning() {
            debug!("Ignoring navigation to {}: transition in progress", index);
            return false;
        }

        self.active_index = index;
        self.cooldown = Some(Timer::after(now, self.timing.cooldown));
        debug!(
            "Navigated to section {} (locked for {:?})",
            index, self.timing.cooldown
        );
        true
    }

    /// Record a raw wheel event, cancelling any decision still pending.
    pub fn on_wheel(&mut self, delta_y: f64, now: Instant) {
        let pending = PendingWheel {
            timer: Timer::after(now, self.timing.debounce),
            delta_y,
        };
        if self.pending_wheel.replace(pending).is_some() {
            debug!("Wheel event (delta {}) re-armed debounce", delta_y);
        }
    }

    /// Fire every timer whose deadline is at or before `now`, oldest first.
    ///
    /// Returns `true` if the active index or phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let index_before = self.active_index;
        let phase_before = self.phase();

        loop {
            let cooldown_due = self.cooldown.filter(|t| t.expired(now));
            let wheel_due = self.pending_wheel.filter(|p| p.timer.expired(now));

            match (cooldown_due, wheel_due) {
                (None, None) => break,
                (Some(cooldown), Some(wheel)) if wheel.timer.deadline < cooldown.deadline => {
                    self.fire_wheel()
                }
                (Some(_), _) => self.fire_cooldown(),
                (None, Some(_)) => self.fire_wheel(),
            }
        }

        self.active_index != index_before || self.phase() != phase_before
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let cooldown = self.cooldown.map(|t| t.deadline);
        let wheel = self.pending_wheel.map(|p| p.timer.deadline);
        match (cooldown, wheel) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel both timers. Called when the hosting surface goes away.
    pub fn shutdown(&mut self) {
        let debounce = self.pending_wheel.take().is_some();
        let cooldown = self.cooldown.take().is_some();
        debug!(
            "Navigator shut down (cancelled debounce: {}, cooldown: {})",
            debounce, cooldown
        );
    }

    fn fire_cooldown(&mut self) {
        self.cooldown = None;
        debug!("Transition cooldown elapsed");
    }

    fn fire_wheel(&mut self) {
        let Some(pending) = self.pending_wheel.take() else {
            return;
        };
        if self.is_transitioning() {
            debug!("Debounced wheel dropped: transition in progress");
            return;
        }

        let direction: isize = if pending.delta_y > 0.0 { 1 } else { -1 };
        let target = self.active_index as isize + direction;
        // The decision belongs to the moment the debounce window closed.
        self.request_navigate(target, pending.timer.deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn navigator() -> SectionNavigator {
        SectionNavigator::new(NonZeroUsize::new(3).unwrap(), NavigationTiming::default())
    }

    #[test]
    fn starts_idle_on_first_section() {
        let nav = navigator();
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.phase(), Phase::Idle);
        assert_eq!(nav.next_deadline(), None);
    }

    #[test]
    fn negative_target_is_ignored() {
        let mut nav = navigator();
        assert!(!nav.request_navigate(-1, Instant::now()));
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn commit_schedules_cooldown_deadline() {
        let mut nav = navigator();
        let t0 = Instant::now();
        assert!(nav.request_navigate(2, t0));
        assert_eq!(nav.next_deadline(), Some(t0 + DEFAULT_COOLDOWN));
    }

    #[test]
    fn next_deadline_is_earliest_timer() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.request_navigate(1, t0);
        nav.on_wheel(1.0, t0 + ms(100));
        // debounce at 250ms, cooldown at 500ms
        assert_eq!(nav.next_deadline(), Some(t0 + ms(250)));
    }

    #[test]
    fn wheel_during_cooldown_is_dropped_when_it_fires_first() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.request_navigate(1, t0);
        nav.on_wheel(1.0, t0 + ms(100));

        // At 250ms the debounce fires while still locked
        assert!(!nav.tick(t0 + ms(250)));
        assert_eq!(nav.active_index(), 1);
        assert!(!nav.has_pending_wheel());

        assert!(nav.tick(t0 + ms(500)));
        assert_eq!(nav.phase(), Phase::Idle);
        assert_eq!(nav.active_index(), 1);
    }

    #[test]
    fn late_tick_fires_timers_in_deadline_order() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.request_navigate(1, t0);
        // Debounce closes at 600ms, after the cooldown (500ms) released the lock
        nav.on_wheel(1.0, t0 + ms(450));

        // A single late tick must release the lock before evaluating the wheel
        assert!(nav.tick(t0 + ms(700)));
        assert_eq!(nav.active_index(), 2);
        assert!(nav.is_transitioning());
        // Cooldown is measured from the debounce deadline, not the late tick
        assert_eq!(nav.next_deadline(), Some(t0 + ms(600) + DEFAULT_COOLDOWN));
    }

    #[test]
    fn tick_before_any_deadline_changes_nothing() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.on_wheel(3.0, t0);
        assert!(!nav.tick(t0 + ms(149)));
        assert!(nav.has_pending_wheel());
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn zero_delta_counts_as_upward() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.request_navigate(1, t0);
        nav.tick(t0 + DEFAULT_COOLDOWN);

        let t1 = t0 + ms(1000);
        nav.on_wheel(0.0, t1);
        nav.tick(t1 + DEFAULT_DEBOUNCE);
        assert_eq!(nav.active_index(), 0);
    }

    #[test]
    fn shutdown_cancels_both_timers() {
        let mut nav = navigator();
        let t0 = Instant::now();
        nav.request_navigate(1, t0);
        nav.on_wheel(1.0, t0);
        nav.shutdown();

        assert_eq!(nav.next_deadline(), None);
        assert!(!nav.has_pending_wheel());
        assert!(!nav.is_transitioning());
        assert!(!nav.tick(t0 + ms(5000)));
        assert_eq!(nav.active_index(), 1);
    }

    #[test]
    fn custom_timing_is_respected() {
        let timing = NavigationTiming {
            debounce: ms(40),
            cooldown: ms(80),
        };
        let mut nav = SectionNavigator::new(NonZeroUsize::new(5).unwrap(), timing);
        let t0 = Instant::now();
        nav.on_wheel(1.0, t0);
        assert!(nav.tick(t0 + ms(40)));
        assert_eq!(nav.active_index(), 1);
        assert!(!nav.tick(t0 + ms(119)));
        assert!(nav.tick(t0 + ms(120)));
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn single_section_never_moves() {
        let mut nav =
            SectionNavigator::new(NonZeroUsize::new(1).unwrap(), NavigationTiming::default());
        let t0 = Instant::now();
        nav.on_wheel(1.0, t0);
        nav.tick(t0 + DEFAULT_DEBOUNCE);
        assert_eq!(nav.active_index(), 0);
        assert_eq!(nav.phase(), Phase::Idle);
    }
}
