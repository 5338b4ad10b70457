use chrono::{DateTime, Duration, Utc};

use crate::models::stats::LaunchPhase;

/// Two-state launch gate for the boardroom: `Pending` until the configured
/// launch time passes, `Live` forever after.
///
/// The gate is sampled on the poll timer. The transition is one-way; a
/// wall-clock sample earlier than the launch time observed after going
/// live does not flip it back.
#[derive(Debug)]
pub struct LaunchGate {
    launches_at: DateTime<Utc>,
    phase: LaunchPhase,
}

impl LaunchGate {
    pub fn new(launches_at: DateTime<Utc>) -> Self {
        Self {
            launches_at,
            phase: LaunchPhase::Pending,
        }
    }

    pub fn phase(&self) -> LaunchPhase {
        self.phase
    }

    pub fn launches_at(&self) -> DateTime<Utc> {
        self.launches_at
    }

    /// Evaluate the gate against `now`. Returns the new phase when this
    /// sample causes the transition, `None` on every other sample.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<LaunchPhase> {
        if self.phase == LaunchPhase::Pending && now >= self.launches_at {
            self.phase = LaunchPhase::Live;
            return Some(LaunchPhase::Live);
        }
        None
    }

    /// Time left until launch at `now`; zero once live
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        if self.phase == LaunchPhase::Live {
            return Duration::zero();
        }
        (self.launches_at - now).max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch() -> DateTime<Utc> {
        DateTime::from_timestamp(1_610_668_800, 0).unwrap()
    }

    #[test]
    fn stays_pending_before_launch() {
        let mut gate = LaunchGate::new(launch());
        assert_eq!(gate.poll(launch() - Duration::milliseconds(1)), None);
        assert_eq!(gate.phase(), LaunchPhase::Pending);
    }

    #[test]
    fn transitions_exactly_once() {
        let mut gate = LaunchGate::new(launch());
        assert_eq!(gate.poll(launch() + Duration::milliseconds(1)), Some(LaunchPhase::Live));
        assert_eq!(gate.poll(launch() + Duration::seconds(5)), None);
        assert_eq!(gate.phase(), LaunchPhase::Live);
    }

    #[test]
    fn launch_instant_counts_as_live() {
        let mut gate = LaunchGate::new(launch());
        assert_eq!(gate.poll(launch()), Some(LaunchPhase::Live));
    }

    #[test]
    fn never_reverts_on_an_earlier_sample() {
        let mut gate = LaunchGate::new(launch());
        gate.poll(launch() + Duration::seconds(1));
        assert_eq!(gate.poll(launch() - Duration::hours(1)), None);
        assert_eq!(gate.phase(), LaunchPhase::Live);
    }

    #[test]
    fn remaining_clamps_to_zero() {
        let mut gate = LaunchGate::new(launch());
        assert_eq!(gate.remaining(launch() - Duration::seconds(90)), Duration::seconds(90));
        assert_eq!(gate.remaining(launch() + Duration::seconds(90)), Duration::zero());
        gate.poll(launch());
        assert_eq!(gate.remaining(launch() - Duration::seconds(90)), Duration::zero());
    }
}
