//! # Walk loop
//!
//! Moves the robot into its stance and then streams the gait cycle to the bus until interrupted
//! or until a posture fails to dispatch. The bus is released on every exit path.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{error, info, warn};
use servo_if::ServoBus;
use util::module::State;

use crate::dispatch::{dispatch, DispatchError, Pacer};
use crate::walk_ctrl::{WalkCtrl, WalkCtrlError};

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// How a walk that didn't fail came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkExit {
    /// The stop flag was raised, normally by Ctrl-C.
    Interrupted {
        /// Number of postures dispatched while walking.
        ticks: u64,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum WalkError {
    #[error("Could not reach the initial stance: {0}")]
    StanceFailed(DispatchError),

    #[error("Command error at tick {tick} (phase {phase}): {source}")]
    DispatchFailed {
        tick: u64,
        phase: usize,
        source: DispatchError,
    },

    #[error("Walk control error: {0}")]
    WalkCtrlError(#[from] WalkCtrlError),
}

// ------------------------------------------------------------------------------------------------
// FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Dispatch the stance posture.
pub fn stand<B, P>(bus: &mut B, ctrl: &WalkCtrl, pacer: &mut P) -> Result<(), WalkError>
where
    B: ServoBus + ?Sized,
    P: Pacer + ?Sized,
{
    info!("Moving to initial stance...");

    dispatch(bus, ctrl.home()?, pacer).map_err(|e| {
        error!("Stance failed: {}", e);
        WalkError::StanceFailed(e)
    })
}

/// Stream the gait cycle to the bus until `stop` is raised or a dispatch fails.
///
/// There is no retry, the first failed dispatch ends the walk.
pub fn walk<B, P>(
    bus: &mut B,
    ctrl: &mut WalkCtrl,
    pacer: &mut P,
    stop: &AtomicBool,
) -> Result<WalkExit, WalkError>
where
    B: ServoBus + ?Sized,
    P: Pacer + ?Sized,
{
    let mut ticks = 0;

    loop {
        if stop.load(Ordering::Relaxed) {
            warn!("Walk interrupted after {} postures", ticks);
            return Ok(WalkExit::Interrupted { ticks });
        }

        let (output, report) = ctrl.proc(&())?;

        if let Err(e) = dispatch(bus, &output.posture, pacer) {
            error!("Command error at phase {}: {}", output.phase, e);
            return Err(WalkError::DispatchFailed {
                tick: report.tick,
                phase: output.phase,
                source: e,
            });
        }

        ticks += 1;
    }
}

/// Stand, settle, then walk, releasing the bus however the walk ends.
pub fn run<B, P>(
    bus: &mut B,
    ctrl: &mut WalkCtrl,
    pacer: &mut P,
    stop: &AtomicBool,
    settle: Duration,
) -> Result<WalkExit, WalkError>
where
    B: ServoBus + ?Sized,
    P: Pacer + ?Sized,
{
    let result = if stop.load(Ordering::Relaxed) {
        warn!("Stopped before reaching the stance");
        Ok(WalkExit::Interrupted { ticks: 0 })
    }
    else {
        stand(bus, ctrl, pacer).and_then(|_| {
            pacer.hold(settle);

            info!("Walking start... (Press Ctrl+C to stop)");
            walk(bus, ctrl, pacer, stop)
        })
    };

    bus.disconnect();
    info!("Bus released");

    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gait::GaitParams;
    use crate::joints::HEAD;
    use crate::test_util::{MockBus, RecordingPacer};
    use crate::walk_ctrl::Params;
    use std::sync::atomic::AtomicBool;

    /// Raises the stop flag during the settle time, the second hold.
    struct StoppingPacer<'a> {
        stop: &'a AtomicBool,
        holds: usize,
    }

    impl Pacer for StoppingPacer<'_> {
        fn hold(&mut self, _: Duration) {
            self.holds += 1;
            if self.holds == 2 {
                self.stop.store(true, Ordering::Relaxed);
            }
        }
    }

    fn ctrl(goal: i64) -> WalkCtrl {
        WalkCtrl::new(Params {
            cycles_to_goal: goal,
            settle_time_s: 0.0,
            gait: GaitParams::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_stance_failure_releases_bus() {
        let mut bus = MockBus::failing_at(0);
        let mut pacer = RecordingPacer::default();
        let stop = AtomicBool::new(false);

        let res = run(&mut bus, &mut ctrl(70), &mut pacer, &stop, Duration::from_secs(1));

        assert!(matches!(res, Err(WalkError::StanceFailed(_))));
        assert_eq!(bus.transmits, 1);
        assert_eq!(bus.disconnects, 1);
        // Neither the hold nor the settle time were waited for
        assert!(pacer.holds.is_empty());
    }

    #[test]
    fn test_mid_gait_failure_stops_walk() {
        // Stance, then 9 walking postures, then the 10th walking posture fails
        let mut bus = MockBus::failing_at(10);
        let mut pacer = RecordingPacer::default();
        let stop = AtomicBool::new(false);

        let res = run(&mut bus, &mut ctrl(70), &mut pacer, &stop, Duration::from_secs(1));

        match res {
            Err(WalkError::DispatchFailed { tick, phase, .. }) => {
                assert_eq!(tick, 9);
                assert_eq!(phase, 9 % 4);
            }
            other => panic!("Expected a dispatch failure, got {:?}", other),
        }

        // No dispatch attempted after the failure, bus released once
        assert_eq!(bus.transmits, 11);
        assert_eq!(bus.sent.len(), 10);
        assert_eq!(bus.disconnects, 1);

        // Stance hold, settle, then one hold per successful walking posture
        assert_eq!(pacer.holds.len(), 1 + 1 + 9);
        assert_eq!(pacer.holds[1], Duration::from_secs(1));
    }

    #[test]
    fn test_walk_replays_triangle_wave() {
        let goal = 6;
        let mut walker = ctrl(goal);
        let gait = walker.gait().unwrap().clone();

        // Fail after 20 walking postures to end the loop
        let mut bus = MockBus::failing_at(20);
        let mut pacer = RecordingPacer::default();
        let stop = AtomicBool::new(false);

        let res = walk(&mut bus, &mut walker, &mut pacer, &stop);
        assert!(matches!(res, Err(WalkError::DispatchFailed { tick: 20, .. })));

        // progress: 0 1 2 3 4 5 6 5 4 3 2 1 0 1 2 3 4 5 6 5
        let expected_phases = [0, 1, 2, 3, 0, 1, 2, 1, 0, 3, 2, 1, 0, 1, 2, 3, 0, 1, 2, 1];
        assert_eq!(bus.sent.len(), expected_phases.len());

        for (cmd, phase) in bus.sent.iter().zip(expected_phases.iter()) {
            let expected = crate::dispatch::build_command(gait.cycle.phase(*phase)).unwrap();
            assert_eq!(*cmd, expected);
            assert!(cmd.target(HEAD.0).is_some());
        }
    }

    #[test]
    fn test_interrupt_releases_bus() {
        let mut bus = MockBus::default();
        let mut pacer = RecordingPacer::default();
        let stop = AtomicBool::new(true);

        let res = run(&mut bus, &mut ctrl(70), &mut pacer, &stop, Duration::from_millis(0));

        assert_eq!(res.unwrap(), WalkExit::Interrupted { ticks: 0 });
        // Nothing moved, but the bus is still released
        assert!(bus.sent.is_empty());
        assert!(pacer.holds.is_empty());
        assert_eq!(bus.disconnects, 1);
    }

    #[test]
    fn test_interrupt_during_settle_skips_walk() {
        let mut bus = MockBus::default();
        let stop = AtomicBool::new(false);
        let mut pacer = StoppingPacer { stop: &stop, holds: 0 };

        let res = run(&mut bus, &mut ctrl(70), &mut pacer, &stop, Duration::from_secs(1));

        assert_eq!(res.unwrap(), WalkExit::Interrupted { ticks: 0 });
        // Stance only, then the stance hold and the settle time
        assert_eq!(bus.sent.len(), 1);
        assert_eq!(pacer.holds, 2);
        assert_eq!(bus.disconnects, 1);
    }
}
